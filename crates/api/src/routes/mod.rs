pub mod article;
pub mod artist;
pub mod comment;
pub mod event;
pub mod gallery;
pub mod genre;
pub mod health;
pub mod homepage;
pub mod painting;
pub mod place;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (a trailing slash on any path is accepted):
///
/// ```text
/// /artists                          list, create
/// /artists/{id}                     get, replace, delete
/// /artists/{id}/paintings           paintings authored by the artist
///
/// /genres                           list, create
/// /genres/{id}                      get, replace, delete
///
/// /paintings                        list, create
/// /paintings/{id}                   get, replace, delete
///
/// /galleries                        list, create
/// /galleries/{id}                   get, replace, delete
///
/// /places                           list, create
/// /places/{id}                      get, replace, delete
///
/// /events                           list, create
/// /events/{id}                      get, replace, delete
///
/// /articles                         list blog posts, create
/// /articles/{id}                    get, replace, delete (any article)
/// /articles/{id}/comments           comment reply tree
///
/// /main                             list homepage articles, create
/// /main/{id}                        get, replace, delete (homepage only)
///
/// /comments                         list, create
/// /comments/{id}                    get, replace, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artists", artist::router())
        .nest("/genres", genre::router())
        .nest("/paintings", painting::router())
        .nest("/galleries", gallery::router())
        .nest("/places", place::router())
        .nest("/events", event::router())
        .nest("/articles", article::router())
        .nest("/main", homepage::router())
        .nest("/comments", comment::router())
}
