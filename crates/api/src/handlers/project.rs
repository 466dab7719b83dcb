//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::Json;
use floorplan_core::error::CoreError;
use floorplan_core::project::validate_project_name;
use floorplan_core::types::DbId;
use floorplan_db::models::project::{CreateProject, Project, ProjectSummary, UpdateProject};
use floorplan_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        key: id.to_string(),
    })
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectSummary>>> {
    let projects = ProjectRepo::list_summaries(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<Json<Project>> {
    validate_project_name(input.name.as_deref())?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, name = %project.name, "Project created");

    Ok(Json(project))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// Absent fields keep their stored value; `updatedAt` is always refreshed.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    if input.name.is_some() {
        validate_project_name(input.name.as_deref())?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = id, "Project updated");

    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Succeeds whether or not the project existed. Layouts cascade.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;

    tracing::info!(project_id = id, deleted, "Project delete requested");

    Ok(Json(SuccessResponse::OK))
}
