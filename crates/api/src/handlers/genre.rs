//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::error::CoreError;
use vernissage_core::types::DbId;
use vernissage_db::models::genre::{CreateGenre, UpdateGenre};
use vernissage_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Validated;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Genre", id })
}

/// GET /api/v1/genres
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /api/v1/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(genre))
}

/// POST /api/v1/genres
///
/// A duplicate `genre_name` is rejected with 400 and nothing is stored.
pub async fn create(
    State(state): State<AppState>,
    Validated(input): Validated<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, "Genre created");
    Ok((StatusCode::CREATED, Json(genre)))
}

/// PUT /api/v1/genres/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Validated(input): Validated<UpdateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(genre_id = id, "Genre replaced");
    Ok(Json(genre))
}

/// DELETE /api/v1/genres/{id}
///
/// Paintings tagged with the genre keep existing and lose the tag.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !GenreRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(genre_id = id, "Genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
