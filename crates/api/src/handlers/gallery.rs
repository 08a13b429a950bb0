//! Handlers for the `/galleries` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::error::CoreError;
use vernissage_core::types::DbId;
use vernissage_db::models::gallery::{CreateGallery, UpdateGallery};
use vernissage_db::repositories::{GalleryRepo, RefTable};

use crate::error::{AppError, AppResult};
use crate::extract::Validated;
use crate::references::References;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Gallery",
        id,
    })
}

/// GET /api/v1/galleries
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let galleries = GalleryRepo::list(&state.pool).await?;
    Ok(Json(galleries))
}

/// GET /api/v1/galleries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let gallery = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(gallery))
}

/// POST /api/v1/galleries
pub async fn create(
    State(state): State<AppState>,
    Validated(input): Validated<CreateGallery>,
) -> AppResult<impl IntoResponse> {
    References::new()
        .many("paintings", RefTable::Paintings, &input.paintings)
        .verify(&state.pool)
        .await?;
    let gallery = GalleryRepo::create(&state.pool, &input).await?;
    tracing::info!(gallery_id = gallery.gallery.id, "Gallery created");
    Ok((StatusCode::CREATED, Json(gallery)))
}

/// PUT /api/v1/galleries/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Validated(input): Validated<UpdateGallery>,
) -> AppResult<impl IntoResponse> {
    References::new()
        .many("paintings", RefTable::Paintings, &input.paintings)
        .verify(&state.pool)
        .await?;
    let gallery = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(gallery_id = id, "Gallery replaced");
    Ok(Json(gallery))
}

/// DELETE /api/v1/galleries/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !GalleryRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(gallery_id = id, "Gallery deleted");
    Ok(StatusCode::NO_CONTENT)
}
