use std::sync::Arc;

use groq_llm_service::{QuestionRelay, RelayMetrics, config::default_config::config_groq_from_env};

use crate::error_handler::AppError;

/// Version reported by the banner, health, and stats endpoints.
pub const API_VERSION: &str = "1.0.0";

/// HTTP server settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host, e.g. "0.0.0.0".
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// CORS origins; a literal "*" entry allows any origin.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load server settings from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = match std::env::var("PORT") {
            Ok(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a u16, got {v:?}")))?,
            Err(_) => 8001,
        };

        let allowed_origins =
            parse_origins(&std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into()));

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }
}

/// Splits the comma-separated `ALLOWED_ORIGINS` value.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

/// Shared state for all HTTP handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// The question relay, constructed once at startup.
    pub relay: QuestionRelay,
    /// Counters shared between the relay and the stats endpoint.
    pub metrics: Arc<RelayMetrics>,
}

impl AppState {
    /// Builds the full application state from the environment.
    ///
    /// The relay is constructed here, at process start, so a bad endpoint or
    /// credential fails the boot instead of the first request.
    pub fn from_env() -> Result<Self, AppError> {
        let config = ServerConfig::from_env()?;
        let metrics = Arc::new(RelayMetrics::new());
        let relay = QuestionRelay::new(config_groq_from_env()?, metrics.clone())?;

        Ok(Self {
            config,
            relay,
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_trimmed() {
        let origins = parse_origins("http://localhost:3000, https://app.example.com ,");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn wildcard_origin_survives_parsing() {
        assert_eq!(parse_origins("*"), vec!["*"]);
    }
}
