//! Seller transfer schemas.
//!
//! The seller base fields (`first_name`, `last_name`, `e_mail`) are spelled
//! out per schema instead of inherited from a shared base: each shape stays a
//! plain struct a reader can take in at a glance, and serde sees exactly the
//! contract fields.

use crate::models::{Seller, SellerWithBooks};
use crate::schemas::ReturnedBookForSeller;
use serde::{Deserialize, Serialize};

/// Registration input. All four fields required; a missing or mistyped field
/// fails extraction with 422 before any handler runs. `e_mail` is checked for
/// presence only, matching the persisted contract.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterSeller {
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    pub password: String,
}

/// Update input. Deliberately has no `id` (the path parameter is
/// authoritative) and no `password` (not updatable through this contract);
/// unknown body fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSeller {
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
}

/// Single-seller output: the persisted fields minus `password`.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnedSeller {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
}

impl From<Seller> for ReturnedSeller {
    fn from(seller: Seller) -> Self {
        ReturnedSeller {
            id: seller.id,
            first_name: seller.first_name,
            last_name: seller.last_name,
            e_mail: seller.e_mail,
        }
    }
}

/// Seller plus its owned books, ordered by book id.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnedSellerWithBooks {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub e_mail: String,
    pub books: Vec<ReturnedBookForSeller>,
}

impl From<SellerWithBooks> for ReturnedSellerWithBooks {
    fn from(found: SellerWithBooks) -> Self {
        ReturnedSellerWithBooks {
            id: found.seller.id,
            first_name: found.seller.first_name,
            last_name: found.seller.last_name,
            e_mail: found.seller.e_mail,
            books: found.books.into_iter().map(Into::into).collect(),
        }
    }
}

/// List output wrapper: `{"sellers": [...]}`.
#[derive(Debug, Serialize)]
pub struct ReturnedAllSeller {
    pub sellers: Vec<ReturnedSeller>,
}
