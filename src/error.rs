//! Typed errors and their HTTP mapping.
//!
//! Malformed request bodies never reach handlers: the `Json` extractor
//! rejects them with 422 on its own, so the error surface here is only what
//! handlers themselves raise.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A referenced seller id does not exist. Surfaced as 404 with an empty
    /// body; this is ordinary control flow for get/update/delete, not a fault.
    #[error("seller {0} not found")]
    NotFound(i64),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::Db(err) => {
                tracing::error!(error = %err, "store failure while handling request");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
