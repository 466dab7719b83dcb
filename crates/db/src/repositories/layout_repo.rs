//! Repository for the `layouts` table.
//!
//! Layouts are insert-only: saving always creates a new row and there is
//! no update statement.

use floorplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::layout::{LayoutSummary, LegacyLayoutSummary, NewLayout};

/// Metadata columns for listings. `size` is the byte length of the stored
/// document's text form.
const SUMMARY_COLUMNS: &str = "\
    filename, name, saved_at, \
    OCTET_LENGTH(data::text)::BIGINT AS size";

/// Provides data access for saved layouts.
pub struct LayoutRepo;

impl LayoutRepo {
    /// Insert a new layout into a project, returning its metadata.
    ///
    /// Fails with a unique violation on `uq_layouts_project_filename` if the
    /// project already holds a layout with the same filename, and with a
    /// foreign-key violation if the project does not exist.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &NewLayout,
    ) -> Result<LayoutSummary, sqlx::Error> {
        let query = format!(
            "INSERT INTO layouts (project_id, filename, name, data, saved_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {SUMMARY_COLUMNS}"
        );
        sqlx::query_as::<_, LayoutSummary>(&query)
            .bind(project_id)
            .bind(&input.filename)
            .bind(&input.name)
            .bind(&input.data)
            .bind(input.saved_at)
            .fetch_one(pool)
            .await
    }

    /// List layout metadata for a project, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<LayoutSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM layouts \
             WHERE project_id = $1 ORDER BY saved_at DESC"
        );
        sqlx::query_as::<_, LayoutSummary>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch the stored document for a layout, verbatim.
    pub async fn find_data(
        pool: &PgPool,
        project_id: DbId,
        filename: &str,
    ) -> Result<Option<serde_json::Value>, sqlx::Error> {
        sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT data FROM layouts WHERE project_id = $1 AND filename = $2",
        )
        .bind(project_id)
        .bind(filename)
        .fetch_optional(pool)
        .await
    }

    /// Delete a layout. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_id: DbId, filename: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM layouts WHERE project_id = $1 AND filename = $2")
            .bind(project_id)
            .bind(filename)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List layout metadata across all projects with the owning project's
    /// name, newest first. Layouts without a project are included.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<LegacyLayoutSummary>, sqlx::Error> {
        sqlx::query_as::<_, LegacyLayoutSummary>(
            "SELECT l.filename, l.name, l.saved_at, \
                    OCTET_LENGTH(l.data::text)::BIGINT AS size, \
                    p.name AS project_name, l.project_id \
             FROM layouts l \
             LEFT JOIN projects p ON p.id = l.project_id \
             ORDER BY l.saved_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}
