use axum::extract::State;
use axum::{routing::get, Json, Router};
use catalog_core::rpc::SERVICE_NAME;
use serde::Serialize;

use crate::state::AppState;

/// Liveness report for the catalog service.
#[derive(Serialize)]
pub struct HealthReport {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether this process also runs the scheduled export.
    pub export_enabled: bool,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = catalog_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check: catalog store unreachable");
    }

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        export_enabled: state.config.export_enabled,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
