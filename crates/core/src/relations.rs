//! Helpers for relationship fields (foreign keys and many-to-many link sets).
//!
//! Link sets have set semantics: order carries no meaning and a link either
//! exists or not. They are stored and rendered sorted ascending by id.

use crate::types::DbId;

/// Sort and deduplicate a link set as submitted by a client.
pub fn normalize_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Message for a relationship field that names ids with no matching record.
///
/// `missing` must be non-empty.
pub fn missing_ids_message(missing: &[DbId]) -> String {
    match missing {
        [id] => format!("Invalid pk \"{id}\" - object does not exist."),
        many => {
            let list = many
                .iter()
                .map(DbId::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("Invalid pks [{list}] - objects do not exist.")
        }
    }
}
