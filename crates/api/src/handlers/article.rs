//! Handlers for the `/articles` resource (the blog).
//!
//! Listing shows only regular posts (`for_main = false`); lookups, replace
//! and delete by id reach any article. Homepage articles have their own
//! surface in [`super::homepage`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::comment_tree::build_thread;
use vernissage_core::error::CoreError;
use vernissage_core::types::DbId;
use vernissage_db::models::article::{ArticleFeed, CreateArticle, UpdateArticle};
use vernissage_db::repositories::{ArticleRepo, CommentRepo, RefTable};
use vernissage_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::Validated;
use crate::references::References;
use crate::state::AppState;

pub(crate) fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Article",
        id,
    })
}

pub(crate) async fn verify_references(pool: &DbPool, input: &CreateArticle) -> AppResult<()> {
    References::new()
        .many("places", RefTable::Places, &input.places)
        .many("paintings", RefTable::Paintings, &input.paintings)
        .many("artists", RefTable::Artists, &input.artists)
        .many("events", RefTable::Events, &input.events)
        .verify(pool)
        .await
}

/// GET /api/v1/articles
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let articles = ArticleRepo::list(&state.pool, ArticleFeed::Blog).await?;
    Ok(Json(articles))
}

/// GET /api/v1/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(article))
}

/// GET /api/v1/articles/{id}/comments
///
/// The article's comments as a reply tree.
pub async fn comments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let comments = CommentRepo::list_by_article(&state.pool, id).await?;
    Ok(Json(build_thread(comments)))
}

/// POST /api/v1/articles
pub async fn create(
    State(state): State<AppState>,
    Validated(input): Validated<CreateArticle>,
) -> AppResult<impl IntoResponse> {
    verify_references(&state.pool, &input).await?;
    let article = ArticleRepo::create(&state.pool, &input).await?;
    tracing::info!(
        article_id = article.article.id,
        for_main = article.article.for_main,
        "Article created"
    );
    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/v1/articles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Validated(input): Validated<UpdateArticle>,
) -> AppResult<impl IntoResponse> {
    verify_references(&state.pool, &input).await?;
    let article = ArticleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(article_id = id, "Article replaced");
    Ok(Json(article))
}

/// DELETE /api/v1/articles/{id}
///
/// Removes the article's comments with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ArticleRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(article_id = id, "Article deleted");
    Ok(StatusCode::NO_CONTENT)
}
