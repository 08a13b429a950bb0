//! Article entity model and DTO.
//!
//! Articles marked `for_main` form the homepage feed and are kept out of
//! the regular blog listing.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vernissage_core::types::{DbId, ReadOnly, Timestamp};

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub for_main: bool,
    pub title: String,
    pub content: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(rename = "datetime")]
    pub updated_at: Timestamp,
}

/// An article enriched with all four of its link sets.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleWithLinks {
    #[serde(flatten)]
    pub article: Article,
    pub places: Vec<DbId>,
    pub paintings: Vec<DbId>,
    pub artists: Vec<DbId>,
    pub events: Vec<DbId>,
}

/// Which listing an article request goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleFeed {
    /// Regular blog posts (`for_main = false`).
    Blog,
    /// Homepage articles (`for_main = true`).
    Homepage,
}

impl ArticleFeed {
    /// The `for_main` value of every article in this feed.
    pub fn for_main(self) -> bool {
        matches!(self, ArticleFeed::Homepage)
    }
}

/// DTO for creating an article.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateArticle {
    #[serde(default, rename = "id")]
    pub read_only_id: ReadOnly,
    #[serde(default)]
    pub datetime: ReadOnly,
    #[serde(default)]
    pub for_main: bool,
    #[validate(length(min = 1, max = 250))]
    pub title: String,
    pub content: Option<String>,
    #[serde(default)]
    pub places: Vec<DbId>,
    #[serde(default)]
    pub paintings: Vec<DbId>,
    #[serde(default)]
    pub artists: Vec<DbId>,
    #[serde(default)]
    pub events: Vec<DbId>,
}

pub type UpdateArticle = CreateArticle;
