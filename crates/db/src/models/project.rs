//! Project entity model and DTOs.

use floorplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with aggregate information about its layouts, as returned by
/// the project listing.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub layout_count: i64,
    /// `None` when the project has no layouts.
    pub last_saved: Option<Timestamp>,
}

/// DTO for creating a new project.
///
/// `name` is optional here so a missing field surfaces as a validation
/// error rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}
