//! SQLite pool bootstrap.
//!
//! Every pooled connection has `foreign_keys=ON`, so deleting a seller
//! cascades to its books instead of leaving orphan rows.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Opens (creating on first boot) the database at `database_url`,
/// e.g. `sqlite://bookstore.db`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Opens a fresh in-memory database. Each SQLite connection gets its own
/// private `:memory:` database, so the pool is capped at one connection and
/// that connection is never reaped; reaping it would take the data with it.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}
