//! Handlers for layouts nested under `/projects/{id}/layouts`.
//!
//! Saving always inserts a new row under a freshly generated filename;
//! there is no update-in-place.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use floorplan_core::error::CoreError;
use floorplan_core::layout::stamp_document;
use floorplan_core::types::DbId;
use floorplan_db::models::layout::{LayoutSummary, NewLayout};
use floorplan_db::repositories::{LayoutRepo, ProjectRepo};
use serde::Serialize;

use crate::error::{is_foreign_key_violation, is_unique_violation, AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Response body for a successful save.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLayoutResponse {
    pub success: bool,
    pub filename: String,
    pub saved_at: String,
}

/// GET /api/projects/{project_id}/layouts
pub async fn list(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<LayoutSummary>>> {
    let layouts = LayoutRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(layouts))
}

/// POST /api/projects/{project_id}/layouts
///
/// Stamps `filename` and `savedAt` into the document, stores it, then
/// touches the parent project's `updatedAt` as a separate statement.
pub async fn save(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<DbId>,
    ApiJson(mut document): ApiJson<serde_json::Value>,
) -> AppResult<Json<SavedLayoutResponse>> {
    let stamped = stamp_document(&mut document, Utc::now())?;
    let saved_at = stamped.saved_at_string();

    let new_layout = NewLayout {
        filename: stamped.filename,
        name: stamped.name,
        data: document,
        saved_at: stamped.saved_at,
    };

    LayoutRepo::create(&state.pool, project_id, &new_layout)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Core(CoreError::Conflict(format!(
                    "Layout '{}' already exists in this project",
                    new_layout.filename
                )))
            } else if is_foreign_key_violation(&err) {
                AppError::Core(CoreError::NotFound {
                    entity: "Project",
                    key: project_id.to_string(),
                })
            } else {
                AppError::Database(err)
            }
        })?;

    ProjectRepo::touch(&state.pool, project_id).await?;

    tracing::info!(
        project_id,
        filename = %new_layout.filename,
        "Layout saved",
    );

    Ok(Json(SavedLayoutResponse {
        success: true,
        filename: new_layout.filename,
        saved_at,
    }))
}

/// GET /api/projects/{project_id}/layouts/{filename}
///
/// Returns the stored document verbatim.
pub async fn load(
    State(state): State<AppState>,
    ApiPath((project_id, filename)): ApiPath<(DbId, String)>,
) -> AppResult<Json<serde_json::Value>> {
    let data = LayoutRepo::find_data(&state.pool, project_id, &filename)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Layout",
            key: filename,
        }))?;
    Ok(Json(data))
}

/// DELETE /api/projects/{project_id}/layouts/{filename}
///
/// Succeeds whether or not the layout existed. Removing a layout touches
/// the parent project.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath((project_id, filename)): ApiPath<(DbId, String)>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = LayoutRepo::delete(&state.pool, project_id, &filename).await?;
    if deleted {
        ProjectRepo::touch(&state.pool, project_id).await?;
    }

    tracing::info!(project_id, filename = %filename, deleted, "Layout delete requested");

    Ok(Json(SuccessResponse::OK))
}
