//! Public application error type and its HTTP mapping.
//!
//! Three request-time classes: validation (400), provider unavailable (503),
//! internal (500). Every error response body carries the same stable shape
//! `{error, message, timestamp}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use groq_llm_service::GroqLlmError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("invalid configuration: {0}")]
    Config(String),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request-time taxonomy ---
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,

            // startup-only
            AppError::Config(_) | AppError::Bind(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::Bind(_) | AppError::Server(_) => "server_error",
            AppError::Validation(_) => "validation_error",
            AppError::ServiceUnavailable(_) => "llm_service_error",
            AppError::Internal(_) => "internal_server_error",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    timestamp: DateTime<Utc>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
            timestamp: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Malformed request bodies map to the validation class.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Provider failures map onto the 503/500 split; client-facing messages stay
/// generic, the service layer has already logged the details.
impl From<GroqLlmError> for AppError {
    fn from(err: GroqLlmError) -> Self {
        match err {
            GroqLlmError::Config(e) => AppError::Config(e.to_string()),
            e if e.is_unavailable() => AppError::ServiceUnavailable(
                "The AI service is temporarily unavailable. Please try again.".to_string(),
            ),
            _ => AppError::Internal(
                "Failed to process your question. Please try again.".to_string(),
            ),
        }
    }
}
