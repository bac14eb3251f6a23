//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can produce is an [`AppError`]. The response body is
//! always a flat object with a single `error` message:
//!
//! ```json
//! { "error": "Shortcode already exists" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input. Maps to `400 Bad Request`.
    #[error("{0}")]
    Validation(String),

    /// Unknown short code. Maps to `404 Not Found`.
    #[error("{0}")]
    NotFound(String),

    /// Short code already taken. Maps to `409 Conflict`.
    #[error("{0}")]
    Conflict(String),

    /// Every generated candidate collided with an existing code.
    #[error("Unable to allocate a unique shortcode")]
    CodeSpaceExhausted { attempts: usize },

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::CodeSpaceExhausted { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
