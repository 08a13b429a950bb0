//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row,
//!   renamed to the wire names clients use (`author`, `datetime`, ...)
//! - For kinds with link sets, a `XxxWith...` read model that flattens the
//!   row and adds the linked ids
//! - A `Deserialize` + `Validate` write DTO: the field whitelist for both
//!   create and full replace

pub mod article;
pub mod artist;
pub mod comment;
pub mod event;
pub mod gallery;
pub mod genre;
pub mod painting;
pub mod place;
