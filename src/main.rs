//! Server binary: loads settings from the environment, opens the pool,
//! applies migrations, and serves the API router.

use bookstore_api::{api_router, apply_migrations, store, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bookstore_api=info")),
        )
        .init();

    let settings = Settings::from_env();
    let pool = store::connect(&settings.database_url).await?;
    apply_migrations(&pool).await?;

    let app = api_router(AppState { pool });
    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
