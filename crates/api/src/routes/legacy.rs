use axum::routing::get;
use axum::Router;

use crate::handlers::legacy;
use crate::state::AppState;

/// Routes mounted at `/layouts`.
///
/// ```text
/// GET    /    -> list_all
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(legacy::list_all))
}
