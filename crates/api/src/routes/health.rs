use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Coarse service status. `Degraded` means the process is up but the
/// template store is unreachable, so every campaign route will fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health -- unauthenticated liveness plus a database round trip.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match textbee_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    let status = if db_healthy {
        HealthStatus::Ok
    } else {
        HealthStatus::Degraded
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, outside `/api/v1` and without auth.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
