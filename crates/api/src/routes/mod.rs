pub mod health;
pub mod legacy;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/layouts                           list, save
/// /projects/{id}/layouts/{filename}                load, delete
///
/// /layouts                                         legacy cross-project listing
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/layouts", legacy::router())
}
