//! HTTP handlers for the seller resource.

pub mod sellers;
pub use sellers::*;
