//! Liveness probe for the gallery API, mounted at the root rather than
//! under `/api/v1` so load balancers need no API prefix.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

const SERVICE_NAME: &str = "vernissage";

#[derive(Serialize)]
pub struct HealthStatus {
    pub service: &'static str,
    /// `ok` when the catalogue database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
async fn report(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_healthy = vernissage_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the catalogue database");
    }

    Json(HealthStatus {
        service: SERVICE_NAME,
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
