//! Handlers for the `/artists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::error::CoreError;
use vernissage_core::types::DbId;
use vernissage_db::models::artist::{CreateArtist, UpdateArtist};
use vernissage_db::repositories::{ArtistRepo, PaintingRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Validated;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

/// GET /api/v1/artists
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(artists))
}

/// GET /api/v1/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(artist))
}

/// GET /api/v1/artists/{id}/paintings
///
/// The artist's personal gallery: every painting they authored.
pub async fn paintings(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let paintings = PaintingRepo::list_by_author(&state.pool, id).await?;
    Ok(Json(paintings))
}

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    Validated(input): Validated<CreateArtist>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, "Artist created");
    Ok((StatusCode::CREATED, Json(artist)))
}

/// PUT /api/v1/artists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Validated(input): Validated<UpdateArtist>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(artist_id = id, "Artist replaced");
    Ok(Json(artist))
}

/// DELETE /api/v1/artists/{id}
///
/// Authored paintings survive with `author` cleared.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ArtistRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(artist_id = id, "Artist deleted");
    Ok(StatusCode::NO_CONTENT)
}
