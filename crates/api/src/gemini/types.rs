//! Request and response types for the Gemini `generateContent` API.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Conversation turns; a single user turn for tour suggestions.
    pub contents: Vec<Content>,
    /// Sampling configuration.
    pub generation_config: GenerationConfig,
}

/// A single conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" in requests, "model" in responses.
    #[serde(default)]
    pub role: String,
    /// Content parts; text-only here.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text payload.
    pub text: String,
}

/// Sampling configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature; kept low for deterministic-leaning output.
    pub temperature: f32,
}

/// Response body for `generateContent`.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    /// Generated candidates; the first one carries the completion.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single generated candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// The generated content, absent when generation was blocked.
    pub content: Option<Content>,
}

impl GenerateRequest {
    /// Build a single-user-turn request for `prompt`.
    #[must_use]
    pub fn user_prompt(prompt: &str, temperature: f32) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig { temperature },
        }
    }
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts, if any.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>(),
        )
    }
}
