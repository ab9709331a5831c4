//! # REST API Errors
//!
//! Two outcomes other than success: no matching rows (404 with a
//! human-readable message) and a store failure (500 with the raw detail).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::response::{ErrorResponse, MessageResponse};

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    /// The statement matched zero rows
    #[error("{0}")]
    NotFound(String),

    /// Binding, execution or store connectivity failed
    #[error("{0}")]
    Execution(#[from] StoreError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Execution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            RestError::NotFound(message) => (status, Json(MessageResponse { message })).into_response(),
            RestError::Execution(err) => (
                status,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
