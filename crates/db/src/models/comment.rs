//! Comment entity model and DTO.
//!
//! Every comment belongs to one article (deleted with it) and may reply to
//! another comment of the same article. Deleting the parent turns its
//! replies into top-level comments.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vernissage_core::comment_tree::ThreadItem;
use vernissage_core::types::{DbId, ReadOnly, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    #[serde(rename = "article")]
    pub article_id: DbId,
    #[serde(rename = "parent")]
    pub parent_id: Option<DbId>,
    pub content: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(rename = "datetime")]
    pub updated_at: Timestamp,
}

impl ThreadItem for Comment {
    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.parent_id
    }
}

/// DTO for creating a comment.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateComment {
    #[serde(default, rename = "id")]
    pub read_only_id: ReadOnly,
    #[serde(default)]
    pub datetime: ReadOnly,
    /// Article id.
    pub article: DbId,
    /// Parent comment id.
    pub parent: Option<DbId>,
    #[validate(length(min = 1))]
    pub content: String,
}

pub type UpdateComment = CreateComment;
