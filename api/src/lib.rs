//! HTTP surface of the Startup Business Guide backend.
//!
//! One axum router serves the banner, health, ask, and stats endpoints.
//! CORS and request tracing are tower layers; preflight OPTIONS requests are
//! answered by the CORS layer itself.

use std::sync::Arc;

mod core;
mod error_handler;
mod routes;

pub use error_handler::{AppError, AppResult};

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tokio::signal;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::core::app_state::{AppState, ServerConfig};
use crate::routes::{
    ask::ask_route::ask_question, health_route::health_check, root_route::service_info,
    stats_route::performance_stats,
};

/// Builds the state, binds the listener, and serves until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);

    if state.relay.is_configured() {
        info!(model = state.relay.model(), "question relay ready");
    } else {
        warn!("running without GROQ_API_KEY; /api/ask returns a fixed notice");
    }

    let app = router(state.clone());

    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Assembles the router with CORS and tracing layers.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/api/ask", post(ask_question))
        .route("/api/stats", get(performance_stats))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&state.config))
        .with_state(state)
}

/// Maps `ALLOWED_ORIGINS` onto a CORS layer.
///
/// A literal `*` entry opens the API to any origin (no credentials);
/// otherwise the exact origin list is allowed with credentials.
fn build_cors(config: &ServerConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

    if config.allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(methods)
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{Json, extract::State};
    use groq_llm_service::{
        LlmModelConfig, LlmServiceStatus, QuestionRelay, RelayMetrics,
        relay_service::NOT_CONFIGURED_ANSWER,
    };

    use crate::routes::ask::ask_request::AskRequest;
    use crate::routes::health_route::HealthState;

    /// State with no provider credential: no network call can happen.
    fn degraded_state() -> Arc<AppState> {
        let metrics = Arc::new(RelayMetrics::new());
        let cfg = LlmModelConfig {
            model: "llama-3.1-8b-instant".to_string(),
            endpoint: "http://127.0.0.1:1".to_string(),
            api_key: None,
            max_tokens: Some(16),
            temperature: Some(0.0),
            top_p: None,
            timeout_secs: Some(1),
        };
        Arc::new(AppState {
            config: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                allowed_origins: vec!["*".to_string()],
            },
            relay: QuestionRelay::new(cfg, metrics.clone()).unwrap(),
            metrics,
        })
    }

    fn ask(question: &str) -> AskRequest {
        AskRequest {
            question: question.to_string(),
            context: None,
            user_id: None,
        }
    }

    #[test]
    fn cors_layer_builds_for_both_origin_modes() {
        let mut config = degraded_state().config.clone();
        let _ = build_cors(&config);

        config.allowed_origins = vec![
            "http://localhost:3000".to_string(),
            "https://app.example.com".to_string(),
        ];
        let _ = build_cors(&config);
    }

    #[test]
    fn router_assembles_with_all_routes() {
        let _ = router(degraded_state());
    }

    #[tokio::test]
    async fn empty_question_is_rejected_before_any_relay_call() {
        let state = degraded_state();

        let res = ask_question(State(state.clone()), Ok(Json(ask("   ")))).await;
        assert!(matches!(res, Err(AppError::Validation(_))));

        // Validation short-circuits: the relay never ran.
        assert_eq!(state.metrics.total_requests(), 0);
    }

    #[tokio::test]
    async fn degraded_mode_is_visible_on_every_endpoint() {
        let state = degraded_state();

        let Json(answer) = ask_question(State(state.clone()), Ok(Json(ask("Do I need a visa?"))))
            .await
            .unwrap();
        assert_eq!(answer.answer, NOT_CONFIGURED_ANSWER);
        assert_eq!(answer.confidence, 0.0);

        let Json(health) = health_check(State(state.clone())).await;
        assert_eq!(health.status, HealthState::Degraded);
        assert_eq!(health.llm_service_status, LlmServiceStatus::Disconnected);

        let Json(stats) = performance_stats(State(state.clone())).await;
        assert_eq!(stats.llm_stats.total_requests, 1);
        assert_eq!(stats.llm_stats.model, "llama-3.1-8b-instant");
    }

    #[tokio::test]
    async fn banner_lists_the_entry_points() {
        let Json(banner) = service_info().await;
        assert_eq!(banner.ask, "/api/ask");
        assert_eq!(banner.health, "/health");
        assert_eq!(banner.version, crate::core::app_state::API_VERSION);
    }
}
