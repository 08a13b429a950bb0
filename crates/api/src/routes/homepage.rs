//! Route definitions for homepage articles.

use axum::routing::get;
use axum::Router;

use crate::handlers::homepage;
use crate::state::AppState;

/// Routes mounted at `/main`.
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
        .route("/", get(homepage::list).post(homepage::create))
        .route(
            "/{id}",
            get(homepage::get_by_id)
                .put(homepage::update)
                .delete(homepage::delete),
        )
}
