//! Handlers for the `/events` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::error::CoreError;
use vernissage_core::types::DbId;
use vernissage_db::models::event::{CreateEvent, UpdateEvent};
use vernissage_db::repositories::{EventRepo, RefTable};
use vernissage_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::Validated;
use crate::references::References;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Event", id })
}

async fn verify_references(pool: &DbPool, input: &CreateEvent) -> AppResult<()> {
    References::new()
        .one("place", RefTable::Places, input.place)
        .many("paintings", RefTable::Paintings, &input.paintings)
        .many("artists", RefTable::Artists, &input.artists)
        .verify(pool)
        .await
}

/// GET /api/v1/events
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(event))
}

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    Validated(input): Validated<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    verify_references(&state.pool, &input).await?;
    let event = EventRepo::create(&state.pool, &input).await?;
    tracing::info!(event_id = event.event.id, "Event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/v1/events/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Validated(input): Validated<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    verify_references(&state.pool, &input).await?;
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(event_id = id, "Event replaced");
    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !EventRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(event_id = id, "Event deleted");
    Ok(StatusCode::NO_CONTENT)
}
