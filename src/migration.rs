//! Schema DDL: sellers, books, and the FK index. Tables are created in
//! dependency order and every statement is idempotent, so applying on a
//! database that already has the schema is a no-op.

use crate::error::AppError;
use sqlx::SqlitePool;

const DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS sellers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        e_mail TEXT NOT NULL,
        password TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        year INTEGER NOT NULL,
        pages INTEGER NOT NULL,
        seller_id INTEGER NOT NULL REFERENCES sellers (id) ON DELETE CASCADE
    )",
    "CREATE INDEX IF NOT EXISTS idx_books_seller_id ON books (seller_id)",
];

/// Brings the database up to the current schema. Must run before the router
/// is built; handlers assume both tables exist.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for statement in DDL {
        tracing::debug!(sql = statement, "apply migration statement");
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
