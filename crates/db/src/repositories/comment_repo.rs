//! Repository for the `comments` table.

use sqlx::PgPool;
use vernissage_core::types::DbId;

use crate::models::comment::{Comment, CreateComment, UpdateComment};

const COLUMNS: &str = "id, article_id, parent_id, content, created_at, updated_at";

/// Provides CRUD operations for comments and parent-chain lookups.
pub struct CommentRepo;

impl CommentRepo {
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (article_id, parent_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.article)
            .bind(input.parent)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY id");
        sqlx::query_as::<_, Comment>(&query).fetch_all(pool).await
    }

    /// Every comment of one article, flat and ordered by ID.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE article_id = $1 ORDER BY id");
        sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await
    }

    /// The ids above `id` in its parent chain, ascending.
    ///
    /// `UNION` discards rows already seen, so the walk ends at a root or
    /// when an id repeats.
    pub async fn ancestor_ids(pool: &PgPool, id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "WITH RECURSIVE chain(id) AS ( \
                 SELECT parent_id FROM comments \
                 WHERE id = $1 AND parent_id IS NOT NULL \
                 UNION \
                 SELECT c.parent_id FROM comments c \
                 JOIN chain ON c.id = chain.id \
                 WHERE c.parent_id IS NOT NULL \
             ) \
             SELECT id FROM chain ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }

    /// Whether any comment names `id` as its parent.
    pub async fn has_replies(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM comments WHERE parent_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Replace the article, parent and content of a comment.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET \
                article_id = $2, \
                parent_id = $3, \
                content = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(input.article)
            .bind(input.parent)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment. Direct replies become top-level comments.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
