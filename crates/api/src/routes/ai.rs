//! AI tour-suggestion handler.
//!
//! A stateless pass-through: validate the six free-text trip fields, render
//! the fixed prompt template, forward it to Gemini, and relay the text
//! completion. Upstream failures surface as 500s with the error's message.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Build the AI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/ai/tour-suggestions", post(tour_suggestions))
}

/// Request body for a tour suggestion. All six fields are required and
/// non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub destination: Option<String>,
    pub duration: Option<String>,
    pub budget: Option<String>,
    pub season: Option<String>,
    pub preferences: Option<String>,
    pub travel_style: Option<String>,
}

/// Response body carrying the generated suggestion.
#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub output: String,
}

/// The validated trip profile embedded into the prompt.
#[derive(Debug)]
struct TripProfile {
    destination: String,
    duration: String,
    budget: String,
    season: String,
    preferences: String,
    travel_style: String,
}

impl SuggestionRequest {
    /// Validate that all six fields are present and non-empty.
    fn into_profile(self) -> Option<TripProfile> {
        fn field(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Some(TripProfile {
            destination: field(self.destination)?,
            duration: field(self.duration)?,
            budget: field(self.budget)?,
            season: field(self.season)?,
            preferences: field(self.preferences)?,
            travel_style: field(self.travel_style)?,
        })
    }
}

impl TripProfile {
    /// Render the fixed natural-language prompt for this trip.
    fn prompt(&self) -> String {
        format!(
            "A traveler is interested in visiting {} for {}.\n\
             Their budget is around {}, and they prefer traveling in the {} season.\n\
             Their interests include: {}.\n\
             They prefer a {} experience.\n\
             \n\
             Based on this, recommend a suitable tour.\n\
             Include:\n\
             - A short tour description\n\
             - Key highlights\n\
             - Why this tour matches their preferences\n\
             - Estimated price range\n\
             - Best time to visit\n\
             - Any special offers or tips\n",
            self.destination,
            self.duration,
            self.budget,
            self.season,
            self.preferences,
            self.travel_style,
        )
    }
}

/// Generate a tour suggestion for the submitted trip profile.
///
/// # Errors
///
/// Returns a 400 when any field is missing or empty, and a 500 relaying the
/// upstream error message when the Gemini call fails.
pub async fn tour_suggestions(
    State(state): State<AppState>,
    Json(body): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>> {
    let Some(profile) = body.into_profile() else {
        return Err(AppError::BadRequest("All fields are required.".to_string()));
    };

    let output = state.gemini().generate(&profile.prompt()).await?;
    Ok(Json(SuggestionResponse { output }))
}
