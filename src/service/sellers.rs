//! Seller data access against SQLite.
//!
//! Every function takes `&mut SqliteConnection`, the transaction handle the
//! handler opened for the request, so writes land in that transaction and
//! become durable only when the handler commits.

use crate::error::AppError;
use crate::models::{Book, Seller, SellerWithBooks};
use crate::schemas::{RegisterSeller, UpdateSeller};
use sqlx::{FromRow, SqliteConnection};

const SELLER_COLUMNS: &str = "id, first_name, last_name, e_mail, password";

/// One row of the seller/books LEFT JOIN. Book columns are nullable because
/// a seller without books still produces exactly one row.
#[derive(FromRow)]
struct SellerBookRow {
    id: i64,
    first_name: String,
    last_name: String,
    e_mail: String,
    password: String,
    book_id: Option<i64>,
    title: Option<String>,
    author: Option<String>,
    year: Option<i64>,
    pages: Option<i64>,
}

impl SellerBookRow {
    fn seller(&self) -> Seller {
        Seller {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            e_mail: self.e_mail.clone(),
            password: self.password.clone(),
        }
    }

    fn book(self) -> Option<Book> {
        match (self.book_id, self.title, self.author, self.year, self.pages) {
            (Some(id), Some(title), Some(author), Some(year), Some(pages)) => Some(Book {
                id,
                title,
                author,
                year,
                pages,
                seller_id: self.id,
            }),
            _ => None,
        }
    }
}

pub struct SellerService;

impl SellerService {
    /// Inserts the four registration fields; the store assigns `id` and the
    /// full row comes back in the same statement.
    pub async fn insert(
        conn: &mut SqliteConnection,
        new_seller: &RegisterSeller,
    ) -> Result<Seller, AppError> {
        tracing::debug!(e_mail = %new_seller.e_mail, "insert seller");
        let seller = sqlx::query_as::<_, Seller>(&format!(
            "INSERT INTO sellers (first_name, last_name, e_mail, password) \
             VALUES (?, ?, ?, ?) \
             RETURNING {SELLER_COLUMNS}"
        ))
        .bind(&new_seller.first_name)
        .bind(&new_seller.last_name)
        .bind(&new_seller.e_mail)
        .bind(&new_seller.password)
        .fetch_one(&mut *conn)
        .await?;
        Ok(seller)
    }

    /// All sellers, ascending by id. An empty table yields an empty vec.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Seller>, AppError> {
        tracing::debug!("list sellers");
        let sellers = sqlx::query_as::<_, Seller>(&format!(
            "SELECT {SELLER_COLUMNS} FROM sellers ORDER BY id"
        ))
        .fetch_all(&mut *conn)
        .await?;
        Ok(sellers)
    }

    /// Fetches one seller together with its books in a single eager-join
    /// query. The to-many join repeats the seller row once per book; rows are
    /// collapsed by the parent primary key before anything is returned.
    pub async fn get_with_books(
        conn: &mut SqliteConnection,
        seller_id: i64,
    ) -> Result<Option<SellerWithBooks>, AppError> {
        tracing::debug!(seller_id, "fetch seller with books");
        let rows = sqlx::query_as::<_, SellerBookRow>(
            "SELECT s.id, s.first_name, s.last_name, s.e_mail, s.password, \
                    b.id AS book_id, b.title, b.author, b.year, b.pages \
             FROM sellers s \
             LEFT JOIN books b ON b.seller_id = s.id \
             WHERE s.id = ? \
             ORDER BY b.id",
        )
        .bind(seller_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(collapse_join_rows(rows).into_iter().next())
    }

    /// Overwrites the three mutable fields in place. `password` and `id` are
    /// not touched by this statement. Returns `None` when the id is absent.
    pub async fn update(
        conn: &mut SqliteConnection,
        seller_id: i64,
        changes: &UpdateSeller,
    ) -> Result<Option<Seller>, AppError> {
        tracing::debug!(seller_id, "update seller");
        let updated = sqlx::query_as::<_, Seller>(&format!(
            "UPDATE sellers SET first_name = ?, last_name = ?, e_mail = ? \
             WHERE id = ? \
             RETURNING {SELLER_COLUMNS}"
        ))
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(&changes.e_mail)
        .bind(seller_id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(updated)
    }

    /// Hard delete. Returns whether a row existed; owned books go with it
    /// via the FK cascade.
    pub async fn delete(conn: &mut SqliteConnection, seller_id: i64) -> Result<bool, AppError> {
        tracing::debug!(seller_id, "delete seller");
        let result = sqlx::query("DELETE FROM sellers WHERE id = ?")
            .bind(seller_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Collapses ordered join rows into one entry per seller id, attaching each
/// non-null book to the seller row it was joined from.
fn collapse_join_rows(rows: Vec<SellerBookRow>) -> Vec<SellerWithBooks> {
    let mut collapsed: Vec<SellerWithBooks> = Vec::new();
    for row in rows {
        if collapsed.last().map(|entry| entry.seller.id) != Some(row.id) {
            collapsed.push(SellerWithBooks {
                seller: row.seller(),
                books: Vec::new(),
            });
        }
        if let (Some(current), Some(book)) = (collapsed.last_mut(), row.book()) {
            current.books.push(book);
        }
    }
    collapsed
}
