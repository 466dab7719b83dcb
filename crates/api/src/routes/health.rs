//! Liveness endpoint for the floor-plan service, mounted at `/health`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` when Postgres answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn for_database(db_healthy: bool) -> (StatusCode, Self) {
        let (code, status) = if db_healthy {
            (StatusCode::OK, "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        };
        let body = Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        };
        (code, body)
    }
}

/// GET /health
///
/// Answers 503 while the project store is unreachable so load balancers
/// stop routing saves to this instance.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = match floorplan_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Project store unreachable");
            false
        }
    };
    let (code, body) = HealthResponse::for_database(db_healthy);
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
