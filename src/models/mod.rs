//! Persisted entity shapes. No business logic lives here; constraints beyond
//! NOT NULL are deliberately absent (see migration DDL).

pub mod books;
pub mod sellers;

pub use books::Book;
pub use sellers::{Seller, SellerWithBooks};
