//! GET /api/stats — in-process performance counters.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::app_state::{API_VERSION, AppState};

/// Counters accumulated since process start; reset on every restart.
#[derive(Debug, Serialize)]
pub struct LlmStats {
    pub total_requests: u64,
    pub average_response_time: f64,
    pub model: String,
}

/// Response payload for GET /api/stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub api_version: &'static str,
    pub llm_stats: LlmStats,
    pub timestamp: DateTime<Utc>,
}

/// Handler: GET /api/stats
pub async fn performance_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let snapshot = state.metrics.snapshot();

    Json(StatsResponse {
        api_version: API_VERSION,
        llm_stats: LlmStats {
            total_requests: snapshot.total_requests,
            average_response_time: snapshot.average_response_time,
            model: state.relay.model().to_string(),
        },
        timestamp: Utc::now(),
    })
}
