//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that maps every failure to an HTTP
//! status code and a JSON payload, capturing server-side errors to Sentry
//! before responding. All route handlers return `Result<T, AppError>`; no
//! error is fatal to the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use wayfarer_core::StoreError;

use crate::gemini::GeminiError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from client: malformed ID or failed field validation.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Valid ID but no matching record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate unique key (user email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The Gemini upstream failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] GeminiError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Map a store rejection from a create operation.
    ///
    /// Duplicates get the fixed "Failed to create <entity>" message the API
    /// documents for the conflict case; validation failures surface the
    /// store's message naming the offending fields.
    #[must_use]
    pub fn create_failed(entity: &str, err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => Self::Conflict(format!("Failed to create {entity}")),
            other => Self::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Upstream(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            // Conflicts surface as 400, not 409: duplicate email is part of
            // the documented validation contract of POST /api/users
            Self::BadRequest(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::BadRequest(message) | Self::Conflict(message) | Self::NotFound(message) => {
                json!({ "message": message })
            }
            Self::Upstream(err) => json!({ "error": err.to_string() }),
            // Don't expose internal error details to clients
            Self::Internal(_) => json!({ "error": "Internal server error" }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
