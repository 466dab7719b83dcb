//! PostgreSQL access layer: pool setup, migrations, models and repositories.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Hosted Railway databases require TLS; when the URL points at one and does
/// not choose an `sslmode` itself, the pool connects with `sslmode=require`.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(database_url)?;
    let force_tls = requires_tls(database_url);
    if force_tls {
        options = options.ssl_mode(PgSslMode::Require);
    }
    tracing::debug!(force_tls, "Connecting to database");

    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

fn requires_tls(database_url: &str) -> bool {
    database_url.contains("railway") && !database_url.contains("sslmode=")
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations. Every statement is idempotent, so this is
/// safe against databases created before migrations were tracked.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
