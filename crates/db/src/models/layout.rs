//! Layout models and DTOs.
//!
//! Listings return metadata only; the full document is fetched separately.

use floorplan_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Layout metadata for a single project's listing.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    pub filename: String,
    pub name: String,
    pub saved_at: Timestamp,
    /// Byte length of the stored document's text form.
    pub size: i64,
}

/// Layout metadata across all projects, for the legacy listing.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyLayoutSummary {
    pub filename: String,
    pub name: String,
    pub saved_at: Timestamp,
    pub size: i64,
    /// `None` for layouts saved before projects existed.
    pub project_name: Option<String>,
    pub project_id: Option<DbId>,
}

/// Insert payload for a new layout row. Built by the save handler after the
/// document has been stamped.
#[derive(Debug, Clone)]
pub struct NewLayout {
    pub filename: String,
    pub name: String,
    pub data: serde_json::Value,
    pub saved_at: Timestamp,
}
