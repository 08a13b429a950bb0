//! Gallery entity model and DTO.
//!
//! A gallery is a named, thematic selection of paintings.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vernissage_core::types::{DbId, ReadOnly, Timestamp};

/// A row from the `galleries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gallery {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// A gallery enriched with the ids of the paintings it shows.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryWithPaintings {
    #[serde(flatten)]
    pub gallery: Gallery,
    pub paintings: Vec<DbId>,
}

/// DTO for creating a gallery.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateGallery {
    #[serde(default, rename = "id")]
    pub read_only_id: ReadOnly,
    #[validate(length(min = 1, max = 250))]
    pub name: String,
    #[serde(default)]
    pub paintings: Vec<DbId>,
}

pub type UpdateGallery = CreateGallery;
