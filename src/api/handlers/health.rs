use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::api::state::AppState;
use crate::api::types::HealthResponse;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = Utc::now();
    let uptime = (now - state.started_at).num_seconds().max(0) as u64;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now,
        uptime_seconds: uptime,
    })
}
