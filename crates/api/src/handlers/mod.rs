pub mod article;
pub mod artist;
pub mod comment;
pub mod event;
pub mod gallery;
pub mod genre;
pub mod homepage;
pub mod painting;
pub mod place;
