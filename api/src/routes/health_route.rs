//! GET /health — liveness and provider connectivity.
//!
//! This endpoint always answers 200 with a structured status; internal
//! problems become a status value, never an HTTP error. Suitable for load
//! balancer checks.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use groq_llm_service::LlmServiceStatus;
use serde::Serialize;

use crate::core::app_state::{API_VERSION, AppState};

/// Overall service health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    /// Provider reachable and answering.
    Healthy,
    /// Running without a provider credential; answers are canned.
    Degraded,
    /// Provider configured but the probe failed.
    Unhealthy,
}

/// Response payload for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthState,
    pub message: String,
    pub llm_service_status: LlmServiceStatus,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Handler: GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let probe = state.relay.health_check().await;

    let (status, message) = match probe.status {
        LlmServiceStatus::Connected => (HealthState::Healthy, "All systems operational".to_string()),
        LlmServiceStatus::Disconnected if !state.relay.is_configured() => {
            (HealthState::Degraded, probe.message.clone())
        }
        LlmServiceStatus::Disconnected => {
            (HealthState::Unhealthy, format!("LLM service issue: {}", probe.message))
        }
    };

    Json(HealthResponse {
        status,
        message,
        llm_service_status: probe.status,
        version: API_VERSION,
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_states_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&HealthState::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthState::Degraded).unwrap(),
            "\"degraded\""
        );
        assert_eq!(
            serde_json::to_string(&HealthState::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
        assert_eq!(
            serde_json::to_string(&LlmServiceStatus::Disconnected).unwrap(),
            "\"disconnected\""
        );
    }
}
