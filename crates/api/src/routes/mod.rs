//! HTTP route handlers for the Wayfarer API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                          - Liveness banner
//! GET    /health                    - Health check
//!
//! # Tours
//! GET    /api/tours                 - List all tours
//! POST   /api/tours                 - Create a tour
//! GET    /api/tours/{id}            - Get one tour
//! PUT    /api/tours/{id}            - Partially update a tour
//! DELETE /api/tours/{id}            - Delete a tour
//!
//! # Users
//! GET    /api/users                 - List all users
//! POST   /api/users                 - Create a user (email must be unique)
//! GET    /api/users/{id}            - Get one user
//! PUT    /api/users/{id}            - Partially update a user
//! DELETE /api/users/{id}            - Delete a user
//!
//! # AI
//! POST   /api/ai/tour-suggestions  - Generate a tour suggestion via Gemini
//! ```
//!
//! Path IDs are extracted as raw strings and parsed explicitly: a
//! non-numeric or non-positive ID is a 400, a well-formed ID with no
//! matching record is a 404. Any unmatched path falls through to
//! [`unknown_endpoint`].

pub mod ai;
pub mod tours;
pub mod users;

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::state::AppState;

/// Build the combined application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(tours::router())
        .merge(users::router())
        .merge(ai::router())
}

/// Liveness banner, kept for parity with the public API contract.
async fn root() -> &'static str {
    "API is running"
}

/// Health check endpoint. There are no backing services to probe.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for any unmatched path.
pub async fn unknown_endpoint() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}

/// Parse a path segment into a positive entity ID.
///
/// # Errors
///
/// Returns `AppError::BadRequest` when `raw` is not a positive integer.
pub(crate) fn parse_id<I: From<i32>>(raw: &str, entity: &'static str) -> Result<I, AppError> {
    raw.parse::<i32>()
        .ok()
        .filter(|n| *n > 0)
        .map(I::from)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {entity} id: {raw}")))
}
