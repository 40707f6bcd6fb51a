//! Proverb request handlers.
//!
//! One handler per route. Each decodes its inputs through extractors,
//! calls exactly one store operation and maps the result to a response.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    Json,
};

use crate::http::{ApiError, AppState, JsonBody, ProverbPayload};
use crate::routing::PathId;
use crate::store::Proverb;

/// `POST /proverbs`
pub async fn create_proverb(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProverbPayload>,
) -> Result<(StatusCode, Json<Proverb>), ApiError> {
    let proverb = state.store.create(payload.text)?;
    tracing::info!(id = proverb.id, "Created proverb");
    Ok((StatusCode::CREATED, Json(proverb)))
}

/// `GET /proverbs`
pub async fn list_proverbs(State(state): State<AppState>) -> Json<Vec<Proverb>> {
    Json(state.store.list())
}

/// `GET /proverbs/{id}`
pub async fn get_proverb(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<Proverb>, ApiError> {
    Ok(Json(state.store.get(id)?))
}

/// `PUT /proverbs/{id}`
///
/// The path id always wins over any `id` in the body.
pub async fn update_proverb(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<ProverbPayload>,
) -> Result<Json<Proverb>, ApiError> {
    let proverb = state.store.update(id, payload.text)?;
    tracing::info!(id, "Updated proverb");
    Ok(Json(proverb))
}

/// `DELETE /proverbs/{id}`
pub async fn delete_proverb(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id)?;
    tracing::info!(id, "Deleted proverb");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for paths no route matches.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
