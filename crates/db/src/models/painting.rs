//! Painting entity model and DTO.
//!
//! A painting has at most one author (cleared when the artist is deleted)
//! and any number of genres via the `painting_genres` junction table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vernissage_core::types::{DbId, ReadOnly, Timestamp};

/// A row from the `paintings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Painting {
    pub id: DbId,
    pub title: String,
    pub photo: Option<String>,
    #[serde(rename = "author")]
    pub author_id: Option<DbId>,
    /// Creation year.
    pub painting_date: Option<i16>,
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(rename = "datetime")]
    pub updated_at: Timestamp,
}

/// A painting enriched with its genre ids.
#[derive(Debug, Clone, Serialize)]
pub struct PaintingWithGenres {
    #[serde(flatten)]
    pub painting: Painting,
    pub genres: Vec<DbId>,
}

/// DTO for creating a painting.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePainting {
    #[serde(default, rename = "id")]
    pub read_only_id: ReadOnly,
    #[serde(default)]
    pub datetime: ReadOnly,
    #[validate(length(min = 1, max = 250))]
    pub title: String,
    #[validate(length(max = 100))]
    pub photo: Option<String>,
    /// Artist id.
    pub author: Option<DbId>,
    /// Genre ids.
    #[serde(default)]
    pub genres: Vec<DbId>,
    #[validate(range(min = 0))]
    pub painting_date: Option<i16>,
    pub description: Option<String>,
}

pub type UpdatePainting = CreatePainting;
