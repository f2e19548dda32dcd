//! Data access for the seller resource. Service functions take the request's
//! transaction handle explicitly; nothing here owns a connection or commits.

mod sellers;
pub use sellers::SellerService;
