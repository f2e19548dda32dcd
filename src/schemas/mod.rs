//! Transfer schemas: input validation contracts and output projections.
//! Inputs derive only `Deserialize`, outputs only `Serialize`, so a schema
//! can never leak in the wrong direction.

pub mod books;
pub mod sellers;

pub use books::ReturnedBookForSeller;
pub use sellers::{
    RegisterSeller, ReturnedAllSeller, ReturnedSeller, ReturnedSellerWithBooks, UpdateSeller,
};
