//! Health check handler
//!
//! Liveness only: never calls the upstream feed.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use crate::predictor::ModelConfig;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    environment: String,
    upstream: String,
    model: ModelConfig,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        upstream: state.config.history_api_url.clone(),
        model: state.model,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
