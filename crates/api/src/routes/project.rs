//! Route definitions for the `/projects` resource.
//!
//! Also nests layout routes under `/projects/{project_id}/layouts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{layout, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /{project_id}                       -> get_by_id
/// PUT    /{project_id}                       -> update
/// DELETE /{project_id}                       -> delete
///
/// GET    /{project_id}/layouts               -> list
/// POST   /{project_id}/layouts               -> save
/// GET    /{project_id}/layouts/{filename}    -> load
/// DELETE /{project_id}/layouts/{filename}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let layout_routes = Router::new()
        .route("/", get(layout::list).post(layout::save))
        .route("/{filename}", get(layout::load).delete(layout::delete));

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{project_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .nest("/{project_id}/layouts", layout_routes)
}
