//! Handlers for the `/main` resource: articles shown on the homepage.
//!
//! Same payloads as `/articles`, scoped to `for_main = true`. Writes force
//! the flag on; ids of regular blog posts answer 404 here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::types::DbId;
use vernissage_db::models::article::{ArticleFeed, CreateArticle, UpdateArticle};
use vernissage_db::repositories::ArticleRepo;

use super::article::{not_found, verify_references};
use crate::error::AppResult;
use crate::extract::Validated;
use crate::state::AppState;

const FEED: ArticleFeed = ArticleFeed::Homepage;

/// GET /api/v1/main
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let articles = ArticleRepo::list(&state.pool, FEED).await?;
    Ok(Json(articles))
}

/// GET /api/v1/main/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = ArticleRepo::find_in_feed(&state.pool, id, FEED)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(article))
}

/// POST /api/v1/main
pub async fn create(
    State(state): State<AppState>,
    Validated(mut input): Validated<CreateArticle>,
) -> AppResult<impl IntoResponse> {
    input.for_main = FEED.for_main();
    verify_references(&state.pool, &input).await?;
    let article = ArticleRepo::create(&state.pool, &input).await?;
    tracing::info!(article_id = article.article.id, "Homepage article created");
    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/v1/main/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Validated(mut input): Validated<UpdateArticle>,
) -> AppResult<impl IntoResponse> {
    input.for_main = FEED.for_main();
    verify_references(&state.pool, &input).await?;
    let article = ArticleRepo::update_in_feed(&state.pool, id, FEED, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(article_id = id, "Homepage article replaced");
    Ok(Json(article))
}

/// DELETE /api/v1/main/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ArticleRepo::delete_in_feed(&state.pool, id, FEED).await? {
        return Err(not_found(id));
    }
    tracing::info!(article_id = id, "Homepage article deleted");
    Ok(StatusCode::NO_CONTENT)
}
