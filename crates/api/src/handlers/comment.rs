//! Handlers for the `/comments` resource.
//!
//! A comment must name a stored article. An optional parent must be a
//! stored comment of the same article, and may not be the comment itself
//! or one of its replies. A comment with replies stays on its article.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vernissage_core::comment_tree::{check_parent, ParentRef};
use vernissage_core::error::CoreError;
use vernissage_core::types::DbId;
use vernissage_db::models::comment::{CreateComment, UpdateComment};
use vernissage_db::repositories::{CommentRepo, RefTable};
use vernissage_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::Validated;
use crate::references::References;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Comment",
        id,
    })
}

/// Check `article` and `parent` of a payload for the comment `comment_id`
/// (`None` when creating).
async fn verify_thread(
    pool: &DbPool,
    comment_id: Option<DbId>,
    input: &CreateComment,
) -> AppResult<()> {
    References::new()
        .one("article", RefTable::Articles, Some(input.article))
        .one("parent", RefTable::Comments, input.parent)
        .verify(pool)
        .await?;

    let Some(parent_id) = input.parent else {
        return Ok(());
    };
    let parent = CommentRepo::find_by_id(pool, parent_id)
        .await?
        .ok_or_else(|| CoreError::field("parent", "Parent comment does not exist."))?;
    let ancestors = CommentRepo::ancestor_ids(pool, parent.id).await?;
    check_parent(
        comment_id,
        input.article,
        ParentRef {
            id: parent.id,
            article_id: parent.article_id,
        },
        &ancestors,
    )?;
    Ok(())
}

/// GET /api/v1/comments
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list(&state.pool).await?;
    Ok(Json(comments))
}

/// GET /api/v1/comments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(comment))
}

/// POST /api/v1/comments
pub async fn create(
    State(state): State<AppState>,
    Validated(input): Validated<CreateComment>,
) -> AppResult<impl IntoResponse> {
    verify_thread(&state.pool, None, &input).await?;
    let comment = CommentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        comment_id = comment.id,
        article_id = comment.article_id,
        "Comment created"
    );
    Ok((StatusCode::CREATED, Json(comment)))
}

/// PUT /api/v1/comments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Validated(input): Validated<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    let existing = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    verify_thread(&state.pool, Some(id), &input).await?;
    if existing.article_id != input.article && CommentRepo::has_replies(&state.pool, id).await? {
        return Err(CoreError::field(
            "article",
            "A comment with replies cannot move to another article.",
        )
        .into());
    }
    let comment = CommentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(comment_id = id, "Comment replaced");
    Ok(Json(comment))
}

/// DELETE /api/v1/comments/{id}
///
/// Direct replies survive as top-level comments of the same article.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CommentRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(comment_id = id, "Comment deleted");
    Ok(StatusCode::NO_CONTENT)
}
