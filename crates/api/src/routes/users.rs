//! User CRUD handlers.
//!
//! Symmetric with the tour handlers except for the email-uniqueness check,
//! which the user store enforces at creation.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::error::{AppError, Result};
use crate::models::{NewUser, User, UserPatch};
use crate::state::AppState;

use super::parse_id;

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List all users in insertion order.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users().read().await.all().to_vec())
}

/// Create a user from a full draft.
///
/// # Errors
///
/// Returns a 400 if any required field is missing or empty, or if another
/// user already has the same email.
pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<NewUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state
        .users()
        .write()
        .await
        .add(draft)
        .map_err(|e| AppError::create_failed("user", e))?;

    tracing::info!(id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get one user by ID.
///
/// # Errors
///
/// Returns a 400 for a malformed ID, 404 when no user matches.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let id = parse_id(&id, "user")?;
    let user = state
        .users()
        .read()
        .await
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("user {id} not found")))?;

    Ok(Json(user))
}

/// Partially update a user. Present fields overwrite, absent fields are
/// retained; the merged record is not re-validated (not even email
/// uniqueness).
///
/// # Errors
///
/// Returns a 400 for a malformed ID, 404 when no user matches.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>> {
    let id = parse_id(&id, "user")?;
    let user = state
        .users()
        .write()
        .await
        .update(id, patch)
        .ok_or_else(|| AppError::NotFound(format!("user {id} not found")))?;

    Ok(Json(user))
}

/// Delete a user by ID.
///
/// # Errors
///
/// Returns a 400 for a malformed ID, 404 when no user matches.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id, "user")?;
    if !state.users().write().await.remove(id) {
        return Err(AppError::NotFound(format!("user {id} not found")));
    }

    tracing::info!(%id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
