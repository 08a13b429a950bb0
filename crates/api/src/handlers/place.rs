//! Handlers for the `/places` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::error::CoreError;
use vernissage_core::types::DbId;
use vernissage_db::models::place::{CreatePlace, UpdatePlace};
use vernissage_db::repositories::PlaceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Validated;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Place", id })
}

/// GET /api/v1/places
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let places = PlaceRepo::list(&state.pool).await?;
    Ok(Json(places))
}

/// GET /api/v1/places/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let place = PlaceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(place))
}

/// POST /api/v1/places
pub async fn create(
    State(state): State<AppState>,
    Validated(input): Validated<CreatePlace>,
) -> AppResult<impl IntoResponse> {
    let place = PlaceRepo::create(&state.pool, &input).await?;
    tracing::info!(place_id = place.id, "Place created");
    Ok((StatusCode::CREATED, Json(place)))
}

/// PUT /api/v1/places/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Validated(input): Validated<UpdatePlace>,
) -> AppResult<impl IntoResponse> {
    let place = PlaceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(place_id = id, "Place replaced");
    Ok(Json(place))
}

/// DELETE /api/v1/places/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PlaceRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(place_id = id, "Place deleted");
    Ok(StatusCode::NO_CONTENT)
}
