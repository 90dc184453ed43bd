//! POST /api/ask — relays a business question to the LLM provider.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /api/ask
///
/// Validates the payload, relays the question, and wraps the shaped answer.
/// Validation failures never reach the provider.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8001/api/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What documents do I need to travel from Kenya to Ireland?"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let Json(body) = payload?;
    body.validate().map_err(crate::error_handler::AppError::Validation)?;

    info!(
        user = body.user_id.as_deref().unwrap_or("anonymous"),
        "question accepted"
    );

    let answer = state
        .relay
        .ask(
            &body.question,
            body.context.as_deref(),
            body.user_id.as_deref(),
        )
        .await?;

    Ok(Json(AskResponse {
        answer: answer.answer,
        confidence: answer.confidence,
        processing_time: answer.processing_time,
        model_used: answer.model_used,
        sources: answer.sources,
        timestamp: Utc::now(),
    }))
}
