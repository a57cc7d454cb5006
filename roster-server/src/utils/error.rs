//! Unified error handling
//!
//! [`AppError`] is what handlers return. It renders itself as one of the
//! service's JSON envelopes:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | NotFound | 404 | `{"message": ...}` |
//! | Validation / Invalid | 400 | `{"error": ...}` |
//! | Database | 500 | `{"error": ...}` |
//!
//! # Example
//!
//! ```ignore
//! let employee = roster::get_employee_by_id(state.pool(), id)
//!     .await?
//!     .ok_or_else(|| AppError::not_found("No employee found"))?;
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::response::{ErrorResponse, MessageResponse};
use tracing::error;

use crate::db::repository::RepoError;

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("{0}")]
    /// Resource not found (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// Payload failed validation (400)
    Validation(String),

    #[error("Invalid request: {0}")]
    /// Malformed request parameters (400)
    Invalid(String),

    // ========== Server errors (5xx) ==========
    #[error("{0}")]
    /// Store failure (500)
    Database(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            AppError::NotFound(message) => (status, Json(MessageResponse::new(message))).into_response(),
            AppError::Validation(_) | AppError::Invalid(_) => {
                (status, Json(ErrorResponse::new(self.to_string()))).into_response()
            }
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (status, Json(ErrorResponse::new(msg))).into_response()
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Invalid(rejection.body_text())
    }
}
