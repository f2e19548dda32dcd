//! Bookstore backend: the seller resource as an axum application over SQLite.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::AppError;
pub use migration::apply_migrations;
pub use routes::{api_router, common_routes, seller_routes};
pub use service::SellerService;
pub use state::AppState;
pub use store::{connect, connect_in_memory};
