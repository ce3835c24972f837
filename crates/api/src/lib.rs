//! Wayfarer API library.
//!
//! This crate provides the backend functionality as a library, allowing the
//! full router to be driven in-process by tests and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router over `state`.
///
/// Used by `main` and by the integration tests, which construct an isolated
/// [`AppState`] per test run instead of sharing process state.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .fallback(routes::unknown_endpoint)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
