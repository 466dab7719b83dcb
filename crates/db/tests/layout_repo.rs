//! Integration tests for `LayoutRepo` against a real database.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use floorplan_db::models::layout::NewLayout;
use floorplan_db::models::project::CreateProject;
use floorplan_db::repositories::{LayoutRepo, ProjectRepo};
use sqlx::PgPool;

async fn seed_project(pool: &PgPool, name: &str) -> i64 {
    let input = CreateProject {
        name: Some(name.to_string()),
        description: None,
    };
    ProjectRepo::create(pool, &input).await.unwrap().id
}

fn layout(filename: &str, data: serde_json::Value) -> NewLayout {
    NewLayout {
        filename: filename.to_string(),
        name: "Plan".to_string(),
        data,
        saved_at: Utc::now(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_summary(pool: PgPool) {
    let pid = seed_project(&pool, "P").await;
    let data = serde_json::json!({"name": "Plan", "shapes": [1, 2, 3]});
    let expected_size = data.to_string().len() as i64;

    let summary = LayoutRepo::create(&pool, pid, &layout("plan.json", data))
        .await
        .unwrap();

    assert_eq!(summary.filename, "plan.json");
    assert_eq!(summary.name, "Plan");
    // JSONB text output normalizes whitespace, so only sanity-check the size.
    assert!(summary.size >= expected_size);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_data_returns_document(pool: PgPool) {
    let pid = seed_project(&pool, "P").await;
    let data = serde_json::json!({"name": "Plan", "walls": [{"x": 1, "y": 2}]});
    LayoutRepo::create(&pool, pid, &layout("plan.json", data.clone()))
        .await
        .unwrap();

    let stored = LayoutRepo::find_data(&pool, pid, "plan.json")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, data);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_data_scoped_to_project(pool: PgPool) {
    let a = seed_project(&pool, "A").await;
    let b = seed_project(&pool, "B").await;
    LayoutRepo::create(&pool, a, &layout("plan.json", serde_json::json!({})))
        .await
        .unwrap();

    assert!(LayoutRepo::find_data(&pool, b, "plan.json").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_filename_is_unique_violation(pool: PgPool) {
    let pid = seed_project(&pool, "P").await;
    LayoutRepo::create(&pool, pid, &layout("same.json", serde_json::json!({})))
        .await
        .unwrap();

    let err = LayoutRepo::create(&pool, pid, &layout("same.json", serde_json::json!({})))
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(db_err) => {
        assert_eq!(db_err.code().as_deref(), Some("23505"));
        assert_eq!(db_err.constraint(), Some("uq_layouts_project_filename"));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_same_filename_in_other_project_allowed(pool: PgPool) {
    let a = seed_project(&pool, "A").await;
    let b = seed_project(&pool, "B").await;
    LayoutRepo::create(&pool, a, &layout("same.json", serde_json::json!({})))
        .await
        .unwrap();
    LayoutRepo::create(&pool, b, &layout("same.json", serde_json::json!({})))
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_project_is_foreign_key_violation(pool: PgPool) {
    let err = LayoutRepo::create(&pool, 999_999, &layout("x.json", serde_json::json!({})))
        .await
        .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(db_err) => {
        assert_eq!(db_err.code().as_deref(), Some("23503"));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_project_newest_first(pool: PgPool) {
    let pid = seed_project(&pool, "P").await;
    let now = Utc::now();

    let mut older = layout("older.json", serde_json::json!({}));
    older.saved_at = now - Duration::minutes(5);
    let mut newer = layout("newer.json", serde_json::json!({}));
    newer.saved_at = now;

    LayoutRepo::create(&pool, pid, &older).await.unwrap();
    LayoutRepo::create(&pool, pid, &newer).await.unwrap();

    let list = LayoutRepo::list_by_project(&pool, pid).await.unwrap();
    let names: Vec<_> = list.iter().map(|l| l.filename.as_str()).collect();
    assert_eq!(names, ["newer.json", "older.json"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_is_idempotent(pool: PgPool) {
    let pid = seed_project(&pool, "P").await;
    LayoutRepo::create(&pool, pid, &layout("gone.json", serde_json::json!({})))
        .await
        .unwrap();

    assert!(LayoutRepo::delete(&pool, pid, "gone.json").await.unwrap());
    assert!(!LayoutRepo::delete(&pool, pid, "gone.json").await.unwrap());
    assert!(LayoutRepo::find_data(&pool, pid, "gone.json").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_includes_orphans(pool: PgPool) {
    let pid = seed_project(&pool, "Office").await;
    LayoutRepo::create(&pool, pid, &layout("owned.json", serde_json::json!({})))
        .await
        .unwrap();

    // A layout from the single-project era has no project.
    sqlx::query(
        "INSERT INTO layouts (filename, name, data, saved_at) \
         VALUES ('orphan.json', 'Old', '{}'::jsonb, NOW() - INTERVAL '1 day')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let all = LayoutRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);

    assert_eq!(all[0].filename, "owned.json");
    assert_eq!(all[0].project_id, Some(pid));
    assert_eq!(all[0].project_name.as_deref(), Some("Office"));

    assert_eq!(all[1].filename, "orphan.json");
    assert!(all[1].project_id.is_none());
    assert!(all[1].project_name.is_none());
}
