//! The book row. Read-only from the seller resource's point of view: the
//! with-books fetch joins against it, nothing here creates or mutates books.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub pages: i64,
    pub seller_id: i64,
}
