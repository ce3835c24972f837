//! Gemini API client for text generation.
//!
//! Non-streaming access to the `generateContent` endpoint of the Gemini
//! generative-language API.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::GeminiConfig;

use super::error::{ApiErrorResponse, GeminiError};
use super::types::{GenerateRequest, GenerateResponse};

/// Low, deterministic-leaning sampling temperature for tour suggestions.
const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Gemini API client.
///
/// Cheap to clone; holds a pooled `reqwest::Client` behind an `Arc`.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    api_base: String,
    model: String,
    debug: bool,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `config` - Gemini API configuration containing API key, model, and
    ///   base URL
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiClientInner {
                client,
                api_base: config.api_base.trim_end_matches('/').to_string(),
                model: config.model.clone(),
                debug: config.debug,
            }),
        }
    }

    /// Send `prompt` as a single user turn and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API returns an error
    /// response, or the response carries no candidate text.
    #[instrument(skip(self, prompt), fields(model = %self.inner.model))]
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateRequest::user_prompt(prompt, DEFAULT_TEMPERATURE);
        let url = format!(
            "{}/models/{}:generateContent",
            self.inner.api_base, self.inner.model
        );

        let response = self.inner.client.post(url).json(&request).send().await?;

        self.handle_response(response).await
    }

    /// Handle a response, extracting the candidate text on success.
    async fn handle_response(&self, response: reqwest::Response) -> Result<String, GeminiError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            if self.inner.debug {
                tracing::debug!(%body, "full Gemini API response");
            }
            let parsed: GenerateResponse = serde_json::from_str(&body)
                .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))?;
            parsed.into_text().ok_or(GeminiError::Empty)
        } else {
            Err(self.handle_error_status(status, response).await)
        }
    }

    /// Handle an error status code.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> GeminiError {
        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return GeminiError::RateLimited(retry_after);
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return GeminiError::Unauthorized("Invalid API key".to_string());
        }

        // Try to parse the API error envelope
        match response.text().await {
            Ok(body) => {
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                    GeminiError::Api {
                        status: api_error.error.status,
                        message: api_error.error.message,
                    }
                } else {
                    GeminiError::Api {
                        status: status.to_string(),
                        message: body,
                    }
                }
            }
            Err(e) => GeminiError::Http(e),
        }
    }
}
