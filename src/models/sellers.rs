//! The seller row and its eager-join companion.

use crate::models::Book;
use serde::Serialize;
use sqlx::FromRow;

/// One row of `sellers`. `id` is assigned by the store on insert and never
/// accepted from clients.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Seller {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    /// Write-only: accepted on registration, stored, never serialized.
    #[serde(skip_serializing)]
    pub password: String,
}

/// A seller with its books, as produced by the single-query eager join.
/// `books` is empty (not an error) for sellers that own nothing.
#[derive(Debug, Clone)]
pub struct SellerWithBooks {
    pub seller: Seller,
    pub books: Vec<Book>,
}
