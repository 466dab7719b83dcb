//! Cross-project layout listing kept for clients of the single-project API.

use axum::extract::State;
use axum::Json;
use floorplan_db::models::layout::LegacyLayoutSummary;
use floorplan_db::repositories::LayoutRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/layouts
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<LegacyLayoutSummary>>> {
    let layouts = LayoutRepo::list_all(&state.pool).await?;
    Ok(Json(layouts))
}
