//! Route definitions for paintings.

use axum::routing::get;
use axum::Router;

use crate::handlers::painting;
use crate::state::AppState;

/// Routes mounted at `/paintings`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(painting::list).post(painting::create))
        .route(
            "/{id}",
            get(painting::get_by_id)
                .put(painting::update)
                .delete(painting::delete),
        )
}
