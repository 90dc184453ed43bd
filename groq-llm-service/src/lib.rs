//! Groq-backed question relay for the Startup Business Guide backend.
//!
//! The crate owns everything that talks to (or reasons about) the LLM
//! provider:
//! - [`services::groq_service::GroqChatClient`] — thin non-streaming client
//!   for the Groq chat-completions API
//! - [`relay_service::QuestionRelay`] — validated question in, shaped answer
//!   out, with graceful degradation when no credential is configured
//! - [`metrics::RelayMetrics`] — process-lifetime request counters
//! - [`scoring`] — display-only confidence and source heuristics
//!
//! Errors are normalized via the unified types in [`error_handler`].

pub mod config;
pub mod error_handler;
pub mod metrics;
pub mod prompt;
pub mod relay_service;
pub mod scoring;
pub mod services;
pub mod telemetry;

pub use config::model_config::LlmModelConfig;
pub use error_handler::GroqLlmError;
pub use metrics::{MetricsSnapshot, RelayMetrics};
pub use relay_service::{LlmHealth, LlmServiceStatus, QuestionRelay, RelayAnswer};
