//! GET / — service banner.

use axum::Json;
use serde::Serialize;

use crate::core::app_state::API_VERSION;

/// Banner payload pointing callers at the useful endpoints.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub health: &'static str,
    pub ask: &'static str,
}

/// Handler: GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to Startup Business Guide API",
        description: "AI-powered Q&A service for entrepreneurs",
        version: API_VERSION,
        health: "/health",
        ask: "/api/ask",
    })
}
