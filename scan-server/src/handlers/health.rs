//! Health check handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use fileshield_engine::IndicatorStats;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    indicators: IndicatorStats,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        indicators: state.engine.indicators().stats(),
    })
}
