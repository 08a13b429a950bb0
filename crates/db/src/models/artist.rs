//! Artist entity model and DTO.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vernissage_core::types::{DbId, ReadOnly, Timestamp};

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub is_master: bool,
    pub photo: Option<String>,
    pub artist_date: Option<NaiveDate>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// DTO for creating an artist. `name` must be unique.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateArtist {
    #[serde(default, rename = "id")]
    pub read_only_id: ReadOnly,
    #[validate(length(min = 1, max = 250))]
    pub name: String,
    #[serde(default)]
    pub is_master: bool,
    #[validate(length(max = 100))]
    pub photo: Option<String>,
    pub artist_date: Option<NaiveDate>,
}

/// Full replacement accepts exactly the creation whitelist.
pub type UpdateArtist = CreateArtist;
