//! Event entity model and DTO.
//!
//! An event takes place at an optional venue (cleared when the place is
//! deleted) and links to any number of paintings and artists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vernissage_core::types::{DbId, ReadOnly, Timestamp};

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub photo: Option<String>,
    #[serde(rename = "place")]
    pub place_id: Option<DbId>,
    pub event_date: Option<NaiveDate>,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(rename = "datetime")]
    pub updated_at: Timestamp,
}

/// An event enriched with its painting and artist ids.
#[derive(Debug, Clone, Serialize)]
pub struct EventWithLinks {
    #[serde(flatten)]
    pub event: Event,
    pub paintings: Vec<DbId>,
    pub artists: Vec<DbId>,
}

/// DTO for creating an event.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateEvent {
    #[serde(default, rename = "id")]
    pub read_only_id: ReadOnly,
    #[serde(default)]
    pub datetime: ReadOnly,
    #[validate(length(min = 1, max = 250))]
    pub name: String,
    #[validate(length(max = 100))]
    pub photo: Option<String>,
    /// Place id.
    pub place: Option<DbId>,
    #[serde(default)]
    pub paintings: Vec<DbId>,
    #[serde(default)]
    pub artists: Vec<DbId>,
    pub event_date: Option<NaiveDate>,
}

pub type UpdateEvent = CreateEvent;
