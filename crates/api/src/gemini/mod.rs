//! Gemini API integration for AI tour suggestions.
//!
//! A thin, stateless pass-through to the generative-language API: render a
//! prompt, send it with a low-temperature configuration, return the text
//! completion. No retries, no caching, no streaming.

pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
