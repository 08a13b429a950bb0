//! Handlers for the `/paintings` resource.
//!
//! `author` and every id in `genres` must name stored records; the check
//! runs before the write so a bad payload stores nothing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::error::CoreError;
use vernissage_core::types::DbId;
use vernissage_db::models::painting::{CreatePainting, UpdatePainting};
use vernissage_db::repositories::{PaintingRepo, RefTable};
use vernissage_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::Validated;
use crate::references::References;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Painting",
        id,
    })
}

async fn verify_references(pool: &DbPool, input: &CreatePainting) -> AppResult<()> {
    References::new()
        .one("author", RefTable::Artists, input.author)
        .many("genres", RefTable::Genres, &input.genres)
        .verify(pool)
        .await
}

/// GET /api/v1/paintings
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let paintings = PaintingRepo::list(&state.pool).await?;
    Ok(Json(paintings))
}

/// GET /api/v1/paintings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let painting = PaintingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(painting))
}

/// POST /api/v1/paintings
pub async fn create(
    State(state): State<AppState>,
    Validated(input): Validated<CreatePainting>,
) -> AppResult<impl IntoResponse> {
    verify_references(&state.pool, &input).await?;
    let painting = PaintingRepo::create(&state.pool, &input).await?;
    tracing::info!(painting_id = painting.painting.id, "Painting created");
    Ok((StatusCode::CREATED, Json(painting)))
}

/// PUT /api/v1/paintings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Validated(input): Validated<UpdatePainting>,
) -> AppResult<impl IntoResponse> {
    verify_references(&state.pool, &input).await?;
    let painting = PaintingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(painting_id = id, "Painting replaced");
    Ok(Json(painting))
}

/// DELETE /api/v1/paintings/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PaintingRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(painting_id = id, "Painting deleted");
    Ok(StatusCode::NO_CONTENT)
}
