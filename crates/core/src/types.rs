/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A server-assigned key that write payloads may echo back.
///
/// Deserializes anything and keeps nothing, so a record fetched with `GET`
/// can be sent back verbatim with `PUT`.
pub type ReadOnly = Option<serde::de::IgnoredAny>;
