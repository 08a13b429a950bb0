//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Writes that touch link
//! tables run in a single transaction.

pub mod article_repo;
pub mod artist_repo;
pub mod comment_repo;
pub mod event_repo;
pub mod gallery_repo;
pub mod genre_repo;
pub mod links;
pub mod painting_repo;
pub mod place_repo;

pub use article_repo::ArticleRepo;
pub use artist_repo::ArtistRepo;
pub use comment_repo::CommentRepo;
pub use event_repo::EventRepo;
pub use gallery_repo::GalleryRepo;
pub use genre_repo::GenreRepo;
pub use links::{LinkTable, RefTable};
pub use painting_repo::PaintingRepo;
pub use place_repo::PlaceRepo;
