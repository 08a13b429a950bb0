//! Existence checks for relationship fields of a write payload.
//!
//! Every id named by a foreign-key field or link set must match a stored
//! record. All fields are checked before reporting, so one response lists
//! every bad field.

use vernissage_core::error::{CoreError, FieldErrors};
use vernissage_core::relations::{missing_ids_message, normalize_ids};
use vernissage_core::types::DbId;
use vernissage_db::repositories::RefTable;
use vernissage_db::DbPool;

use crate::error::AppResult;

/// Collects relationship fields, then checks them in [`References::verify`].
#[derive(Debug, Default)]
pub struct References {
    fields: Vec<(&'static str, RefTable, Vec<DbId>)>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// A nullable foreign-key field. `None` is always valid.
    pub fn one(mut self, field: &'static str, table: RefTable, id: Option<DbId>) -> Self {
        if let Some(id) = id {
            self.fields.push((field, table, vec![id]));
        }
        self
    }

    /// A link-set field.
    pub fn many(mut self, field: &'static str, table: RefTable, ids: &[DbId]) -> Self {
        if !ids.is_empty() {
            self.fields.push((field, table, normalize_ids(ids)));
        }
        self
    }

    /// Fail with a field-level validation error naming every unknown id.
    pub async fn verify(self, pool: &DbPool) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        for (field, table, ids) in self.fields {
            let missing = table.missing_ids(pool, &ids).await?;
            if !missing.is_empty() {
                errors.insert(field.to_string(), vec![missing_ids_message(&missing)]);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(errors).into())
        }
    }
}
