//! Book projection embedded in the seller-with-books response.

use crate::models::Book;
use serde::Serialize;

/// The entity's `pages` goes out as `count_pages`; clients never see
/// `seller_id` since the book is already nested under its seller.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnedBookForSeller {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    #[serde(rename = "count_pages")]
    pub pages: i64,
}

impl From<Book> for ReturnedBookForSeller {
    fn from(book: Book) -> Self {
        ReturnedBookForSeller {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
            pages: book.pages,
        }
    }
}
