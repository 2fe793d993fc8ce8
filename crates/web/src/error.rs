//! Application error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::viacep::ViaCepError;
use crate::store::StoreError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Contact store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Postal code resolution failed.
    #[error("Lookup error: {0}")]
    Lookup(#[from] ViaCepError),

    /// Requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request is malformed.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::Lookup(e) => {
                tracing::error!(error = %e, "Postal code lookup failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "External service error".to_string(),
                )
            }
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
        };

        (status, message).into_response()
    }
}

/// Convenience result type for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
