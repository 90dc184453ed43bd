//! Default Groq config loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `GROQ_API_KEY`  = bearer credential (optional; absence degrades the
//!   relay to a fixed "not configured" answer instead of failing startup)
//! - `GROQ_API_URL`  = API base (optional, default `https://api.groq.com/openai`)
//! - `MODEL_NAME`    = model identifier (optional, default `llama-3.1-8b-instant`)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32, default 1000)
//! - `LLM_TEMPERATURE`  = optional sampling temperature (f32, default 0.7)
//! - `LLM_TOP_P`        = optional nucleus cutoff (f32, default 0.9)
//! - `LLM_TIMEOUT_SECS` = optional outbound timeout (u64, default 30)

use crate::{
    config::model_config::LlmModelConfig,
    error_handler::{
        ConfigError, GroqLlmError, env_opt_f32, env_opt_u32, env_opt_u64, validate_http_endpoint,
        validate_range_f32,
    },
};

/// Groq API base used when `GROQ_API_URL` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";

/// Model used when `MODEL_NAME` is not set.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

const DEFAULT_MAX_TOKENS: u32 = 1000;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TOP_P: f32 = 0.9;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builds the relay's [`LlmModelConfig`] from the environment.
///
/// Missing optional variables fall back to defaults; set-but-invalid values
/// fail with a typed [`ConfigError`] so a misconfigured process stops at
/// startup instead of at the first request.
///
/// # Errors
///
/// - [`ConfigError::InvalidFormat`] if `GROQ_API_URL` is not http(s)
/// - [`ConfigError::EmptyModel`] if `MODEL_NAME` is set to whitespace
/// - [`ConfigError::InvalidNumber`] for unparsable numeric variables
/// - [`ConfigError::OutOfRange`] for `LLM_TEMPERATURE` / `LLM_TOP_P`
pub fn config_groq_from_env() -> Result<LlmModelConfig, GroqLlmError> {
    let endpoint = env_nonempty("GROQ_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    validate_http_endpoint("GROQ_API_URL", &endpoint)?;

    let model = match std::env::var("MODEL_NAME") {
        Ok(v) if v.trim().is_empty() => return Err(ConfigError::EmptyModel.into()),
        Ok(v) => v,
        Err(_) => DEFAULT_MODEL.to_string(),
    };

    let api_key = env_nonempty("GROQ_API_KEY");

    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS);

    let temperature = env_opt_f32("LLM_TEMPERATURE")?.unwrap_or(DEFAULT_TEMPERATURE);
    validate_range_f32("temperature", temperature, 0.0, 2.0)?;

    let top_p = env_opt_f32("LLM_TOP_P")?.unwrap_or(DEFAULT_TOP_P);
    validate_range_f32("top_p", top_p, 0.0, 1.0)?;

    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key,
        max_tokens: Some(max_tokens),
        temperature: Some(temperature),
        top_p: Some(top_p),
        timeout_secs: Some(timeout_secs),
    })
}

/// Reads an env var, treating unset and whitespace-only the same way.
fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
