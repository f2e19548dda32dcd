//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Cloned into every handler; the pool hands out one transactional session
/// per request, so no request-scoped state lives here.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
