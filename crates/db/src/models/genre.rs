//! Genre entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vernissage_core::types::{DbId, ReadOnly, Timestamp};

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub genre_name: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// DTO for creating a genre. `genre_name` must be unique.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateGenre {
    #[serde(default, rename = "id")]
    pub read_only_id: ReadOnly,
    #[validate(length(min = 1, max = 30))]
    pub genre_name: String,
}

pub type UpdateGenre = CreateGenre;
