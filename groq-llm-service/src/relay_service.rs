//! Question relay: validated question in, shaped answer out.
//!
//! One relay call means one outbound chat completion; there is no retry, no
//! caching of identical questions, and no partial result on failure. The
//! relay is constructed explicitly at process start so a missing credential
//! or malformed endpoint surfaces immediately instead of on the first
//! request.

use std::{sync::Arc, time::Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::model_config::LlmModelConfig,
    error_handler::GroqLlmError,
    metrics::RelayMetrics,
    prompt, scoring,
    services::groq_service::GroqChatClient,
};

/// Deterministic answer returned when no provider credential is configured.
pub const NOT_CONFIGURED_ANSWER: &str = "The AI assistant is not configured: GROQ_API_KEY is \
     missing. Live answers are disabled until a provider credential is supplied.";

const HEALTH_PROBE_SYSTEM: &str = "You are a helpful assistant.";
const HEALTH_PROBE_USER: &str = "Respond with exactly: 'Health check successful'";

/// A shaped relay answer, ready for the HTTP layer to wrap.
#[derive(Debug, Clone)]
pub struct RelayAnswer {
    /// Model answer (plain text).
    pub answer: String,
    /// Display-only confidence in `[0, 1]`.
    pub confidence: f64,
    /// Wall-clock seconds spent on this relay call.
    pub processing_time: f64,
    /// Model identifier that produced the answer.
    pub model_used: String,
    /// Likely sources scanned out of the answer, if any.
    pub sources: Option<Vec<String>>,
}

/// Connectivity of the LLM provider as seen from this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmServiceStatus {
    Connected,
    Disconnected,
}

/// Result of one health probe. Never an error: failures fold into
/// [`LlmServiceStatus::Disconnected`] plus a message.
#[derive(Debug, Clone)]
pub struct LlmHealth {
    pub status: LlmServiceStatus,
    pub model: String,
    pub latency_ms: u128,
    pub message: String,
}

/// The one component of this system: forwards a question to the provider and
/// shapes the response.
///
/// Holds the chat client (present iff a credential was configured) and the
/// shared metrics it mutates on every completed call.
pub struct QuestionRelay {
    cfg: LlmModelConfig,
    system_prompt: String,
    client: Option<GroqChatClient>,
    metrics: Arc<RelayMetrics>,
}

impl QuestionRelay {
    /// Builds the relay at process start.
    ///
    /// With no `api_key` in the config the relay still constructs — it then
    /// answers every question with [`NOT_CONFIGURED_ANSWER`] and reports the
    /// provider as disconnected, without network calls.
    ///
    /// # Errors
    /// Propagates client construction failures (bad endpoint, malformed key).
    pub fn new(cfg: LlmModelConfig, metrics: Arc<RelayMetrics>) -> Result<Self, GroqLlmError> {
        let system_prompt = prompt::system_prompt_from_env();

        let client = if cfg.api_key.is_some() {
            Some(GroqChatClient::new(cfg.clone())?)
        } else {
            warn!("GROQ_API_KEY is not set; relay answers in degraded mode");
            None
        };

        info!(
            model = %cfg.model,
            configured = client.is_some(),
            "question relay initialized"
        );

        Ok(Self {
            cfg,
            system_prompt,
            client,
            metrics,
        })
    }

    /// Whether a provider credential is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Model identifier the relay is configured for.
    pub fn model(&self) -> &str {
        &self.cfg.model
    }

    /// Relays one question to the provider.
    ///
    /// `context`, when present, is prepended to the user message; `user_id`
    /// is used for logging only. Every completed call (including the
    /// not-configured answer) bumps the shared counters.
    ///
    /// # Errors
    /// Provider failures pass through untranslated; the HTTP boundary maps
    /// them to status codes.
    pub async fn ask(
        &self,
        question: &str,
        context: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<RelayAnswer, GroqLlmError> {
        let started = Instant::now();

        info!(
            user = user_id.unwrap_or("anonymous"),
            question_len = question.len(),
            has_context = context.is_some(),
            "processing question"
        );

        let Some(client) = &self.client else {
            let elapsed = started.elapsed();
            self.metrics.record(elapsed);
            return Ok(RelayAnswer {
                answer: NOT_CONFIGURED_ANSWER.to_string(),
                confidence: 0.0,
                processing_time: elapsed.as_secs_f64(),
                model_used: self.cfg.model.clone(),
                sources: None,
            });
        };

        let user_message = prompt::build_user_message(question, context);
        let content = client.chat(&self.system_prompt, &user_message).await?;

        let elapsed = started.elapsed();
        self.metrics.record(elapsed);

        info!(
            user = user_id.unwrap_or("anonymous"),
            latency_ms = elapsed.as_millis() as u64,
            answer_len = content.len(),
            "answer generated"
        );

        Ok(RelayAnswer {
            confidence: scoring::confidence(&content),
            sources: scoring::extract_sources(&content),
            processing_time: elapsed.as_secs_f64(),
            model_used: self.cfg.model.clone(),
            answer: content,
        })
    }

    /// One minimal provider round trip.
    ///
    /// Without a credential this reports disconnected immediately and makes
    /// no network call. Probe failures are folded into the status rather
    /// than returned, so `/health` can never surface a hard error.
    pub async fn health_check(&self) -> LlmHealth {
        let Some(client) = &self.client else {
            return LlmHealth {
                status: LlmServiceStatus::Disconnected,
                model: self.cfg.model.clone(),
                latency_ms: 0,
                message: "GROQ_API_KEY is not set".to_string(),
            };
        };

        let started = Instant::now();
        match client.chat(HEALTH_PROBE_SYSTEM, HEALTH_PROBE_USER).await {
            Ok(_) => LlmHealth {
                status: LlmServiceStatus::Connected,
                model: self.cfg.model.clone(),
                latency_ms: started.elapsed().as_millis(),
                message: "Groq API is reachable".to_string(),
            },
            Err(err) => {
                warn!(error = %err, "health probe failed");
                LlmHealth {
                    status: LlmServiceStatus::Disconnected,
                    model: self.cfg.model.clone(),
                    latency_ms: started.elapsed().as_millis(),
                    message: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    const FIXED_ANSWER: &str = "For travel from Kenya to Ireland you will need a valid \
         passport, an Irish short stay visa, proof of accommodation, evidence of sufficient \
         funds, a return ticket, and travel insurance. Apply through the official visa office \
         well in advance and confirm current requirements with the Irish embassy before your \
         departure.";

    /// Serves a canned chat-completions payload on an ephemeral port and
    /// returns the base URL to point the relay at.
    async fn spawn_stub(status: StatusCode, body: Value) -> String {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move || {
                let body = body.clone();
                async move { (status, Json(body)) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn completion_body(content: &str) -> Value {
        json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        })
    }

    fn test_config(endpoint: String, api_key: Option<&str>) -> LlmModelConfig {
        LlmModelConfig {
            model: "llama-3.1-8b-instant".to_string(),
            endpoint,
            api_key: api_key.map(str::to_string),
            max_tokens: Some(1000),
            temperature: Some(0.7),
            top_p: Some(0.9),
            timeout_secs: Some(5),
        }
    }

    fn test_relay(endpoint: String, api_key: Option<&str>) -> (QuestionRelay, Arc<RelayMetrics>) {
        let metrics = Arc::new(RelayMetrics::new());
        let relay = QuestionRelay::new(test_config(endpoint, api_key), metrics.clone()).unwrap();
        (relay, metrics)
    }

    #[tokio::test]
    async fn round_trip_returns_answer_verbatim() {
        let base = spawn_stub(StatusCode::OK, completion_body(FIXED_ANSWER)).await;
        let (relay, metrics) = test_relay(base, Some("test-key"));

        let out = relay
            .ask(
                "What documents do I need to travel from Kenya to Ireland?",
                None,
                None,
            )
            .await
            .unwrap();

        assert_eq!(out.answer, FIXED_ANSWER);
        assert_eq!(out.model_used, "llama-3.1-8b-instant");
        assert!((0.0..=1.0).contains(&out.confidence));
        assert!(out.confidence > 0.0);
        assert!(out.processing_time > 0.0);
        assert!(out.sources.is_some());
        assert_eq!(metrics.total_requests(), 1);
    }

    #[tokio::test]
    async fn counters_match_completed_calls() {
        let base = spawn_stub(StatusCode::OK, completion_body("short answer")).await;
        let (relay, metrics) = test_relay(base, Some("test-key"));

        for _ in 0..3 {
            relay.ask("How do I incorporate?", None, None).await.unwrap();
        }

        assert_eq!(metrics.total_requests(), 3);
        assert!(metrics.snapshot().average_response_time >= 0.0);
    }

    #[tokio::test]
    async fn provider_error_status_is_surfaced_as_unavailable() {
        let base = spawn_stub(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": { "message": "boom" } }),
        )
        .await;
        let (relay, metrics) = test_relay(base, Some("test-key"));

        let err = relay.ask("anything", None, None).await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(matches!(
            err,
            GroqLlmError::HttpStatus { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
        // A failed relay is not a completed one.
        assert_eq!(metrics.total_requests(), 0);
    }

    #[tokio::test]
    async fn malformed_payload_is_a_decode_error() {
        let base = spawn_stub(StatusCode::OK, json!({ "unexpected": true })).await;
        let (relay, _) = test_relay(base, Some("test-key"));

        let err = relay.ask("anything", None, None).await.unwrap_err();
        assert!(matches!(err, GroqLlmError::Decode(_)));
        assert!(!err.is_unavailable());
    }

    #[tokio::test]
    async fn missing_credential_answers_deterministically_without_network() {
        // Nothing listens on this endpoint; a network attempt would error.
        let (relay, metrics) = test_relay("http://127.0.0.1:1".to_string(), None);

        assert!(!relay.is_configured());

        let out = relay.ask("Do I need a visa?", None, None).await.unwrap();
        assert_eq!(out.answer, NOT_CONFIGURED_ANSWER);
        assert_eq!(out.confidence, 0.0);
        assert!(out.sources.is_none());
        assert_eq!(metrics.total_requests(), 1);

        let health = relay.health_check().await;
        assert_eq!(health.status, LlmServiceStatus::Disconnected);
        assert_eq!(health.latency_ms, 0);
    }

    #[tokio::test]
    async fn health_probe_reports_connected_against_live_provider() {
        let base = spawn_stub(StatusCode::OK, completion_body("Health check successful")).await;
        let (relay, _) = test_relay(base, Some("test-key"));

        let health = relay.health_check().await;
        assert_eq!(health.status, LlmServiceStatus::Connected);
    }

    #[tokio::test]
    async fn health_probe_folds_failures_into_disconnected() {
        let base = spawn_stub(StatusCode::SERVICE_UNAVAILABLE, json!({})).await;
        let (relay, _) = test_relay(base, Some("test-key"));

        let health = relay.health_check().await;
        assert_eq!(health.status, LlmServiceStatus::Disconnected);
        assert!(!health.message.is_empty());
    }
}
