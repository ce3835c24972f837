//! Tour CRUD handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::error::{AppError, Result};
use crate::models::{NewTour, Tour, TourPatch};
use crate::state::AppState;

use super::parse_id;

/// Build the tours router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tours", get(list_tours).post(create_tour))
        .route(
            "/api/tours/{id}",
            get(get_tour).put(update_tour).delete(delete_tour),
        )
}

/// List all tours in insertion order.
pub async fn list_tours(State(state): State<AppState>) -> Json<Vec<Tour>> {
    Json(state.tours().read().await.all().to_vec())
}

/// Create a tour from a full draft.
///
/// # Errors
///
/// Returns a 400 if any required field is missing or empty.
pub async fn create_tour(
    State(state): State<AppState>,
    Json(draft): Json<NewTour>,
) -> Result<(StatusCode, Json<Tour>)> {
    let tour = state
        .tours()
        .write()
        .await
        .add(draft)
        .map_err(|e| AppError::create_failed("tour", e))?;

    tracing::info!(id = %tour.id, "tour created");
    Ok((StatusCode::CREATED, Json(tour)))
}

/// Get one tour by ID.
///
/// # Errors
///
/// Returns a 400 for a malformed ID, 404 when no tour matches.
pub async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Tour>> {
    let id = parse_id(&id, "tour")?;
    let tour = state
        .tours()
        .read()
        .await
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("tour {id} not found")))?;

    Ok(Json(tour))
}

/// Partially update a tour. Present fields overwrite, absent fields are
/// retained; the merged record is not re-validated.
///
/// # Errors
///
/// Returns a 400 for a malformed ID, 404 when no tour matches.
pub async fn update_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TourPatch>,
) -> Result<Json<Tour>> {
    let id = parse_id(&id, "tour")?;
    let tour = state
        .tours()
        .write()
        .await
        .update(id, patch)
        .ok_or_else(|| AppError::NotFound(format!("tour {id} not found")))?;

    Ok(Json(tour))
}

/// Delete a tour by ID.
///
/// # Errors
///
/// Returns a 400 for a malformed ID, 404 when no tour matches.
pub async fn delete_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id, "tour")?;
    if !state.tours().write().await.remove(id) {
        return Err(AppError::NotFound(format!("tour {id} not found")));
    }

    tracing::info!(%id, "tour deleted");
    Ok(StatusCode::NO_CONTENT)
}
