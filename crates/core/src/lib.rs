//! Domain types and pure logic for the Vernissage gallery backend.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on it.

pub mod comment_tree;
pub mod error;
pub mod relations;
pub mod types;
