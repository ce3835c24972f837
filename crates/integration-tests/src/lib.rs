//! Integration test harness for Wayfarer.
//!
//! The API's stores are process-local and injected through [`AppState`], so
//! every test builds an isolated application and drives it in-process with
//! `tower::ServiceExt::oneshot` - no listening socket, no shared state
//! between tests. The Gemini upstream is stood in for by a `wiremock`
//! server; its URI goes into `GeminiConfig::api_base`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p wayfarer-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use wayfarer_api::config::{ApiConfig, GeminiConfig};
use wayfarer_api::state::AppState;

/// Model name used by the test configuration; the wiremock path matchers
/// depend on it.
pub const TEST_MODEL: &str = "gemini-2.5-flash";

/// API key used by the test configuration.
pub const TEST_API_KEY: &str = "test-key";

/// Build a config whose Gemini client points at `gemini_base`.
#[must_use]
pub fn test_config(gemini_base: &str) -> ApiConfig {
    ApiConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        gemini: GeminiConfig {
            api_key: SecretString::from(TEST_API_KEY),
            model: TEST_MODEL.to_string(),
            api_base: gemini_base.to_string(),
            debug: false,
        },
        sentry_dsn: None,
    }
}

/// Build an isolated application with empty stores.
///
/// `Router` is cheap to clone and all clones share the same [`AppState`],
/// so a test can issue a sequence of requests against one store.
#[must_use]
pub fn test_app(gemini_base: &str) -> Router {
    wayfarer_api::app(AppState::new(test_config(gemini_base)))
}

/// Build an isolated application with no reachable Gemini upstream, for
/// tests that never hit the AI route.
#[must_use]
pub fn test_app_without_gemini() -> Router {
    test_app("http://127.0.0.1:9")
}

/// Send one request and return the status plus raw body bytes.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("handler is infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();

    (status, bytes.to_vec())
}

/// Send one request and decode the response body as JSON.
///
/// Panics on a non-JSON body; use [`send`] for endpoints returning plain
/// text or empty bodies.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "expected JSON body for {uri}, got error {e}: {:?}",
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, json)
}

/// A unique email for user-creation tests.
#[must_use]
pub fn unique_email() -> String {
    format!("user-{}@example.com", uuid::Uuid::new_v4())
}
