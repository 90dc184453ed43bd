use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted question, in characters.
pub const MAX_QUESTION_LEN: usize = 2000;
/// Longest accepted context, in characters.
pub const MAX_CONTEXT_LEN: usize = 1000;
/// Longest accepted user identifier, in characters.
pub const MAX_USER_ID_LEN: usize = 100;

/// Request payload for POST /api/ask.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// The question to ask the assistant.
    pub question: String,
    /// Optional additional context to help answer the question.
    #[serde(default)]
    pub context: Option<String>,
    /// Optional user identifier, used for logging only.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl AskRequest {
    /// Field-bound validation; runs before any provider call.
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("question must not be empty".to_string());
        }
        if self.question.chars().count() > MAX_QUESTION_LEN {
            return Err(format!(
                "question must be at most {MAX_QUESTION_LEN} characters"
            ));
        }
        if let Some(ctx) = &self.context {
            if ctx.chars().count() > MAX_CONTEXT_LEN {
                return Err(format!(
                    "context must be at most {MAX_CONTEXT_LEN} characters"
                ));
            }
        }
        if let Some(id) = &self.user_id {
            if id.chars().count() > MAX_USER_ID_LEN {
                return Err(format!(
                    "user_id must be at most {MAX_USER_ID_LEN} characters"
                ));
            }
        }
        Ok(())
    }
}

/// Response payload for POST /api/ask.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// The generated answer (plain text).
    pub answer: String,
    /// Display-only confidence in `[0, 1]`.
    pub confidence: f64,
    /// Seconds spent generating the answer.
    pub processing_time: f64,
    /// Model that produced the answer.
    pub model_used: String,
    /// Likely sources, when any were recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    /// When the response was generated.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(question: &str) -> AskRequest {
        AskRequest {
            question: question.to_string(),
            context: None,
            user_id: None,
        }
    }

    #[test]
    fn accepts_a_normal_question() {
        assert!(request("How do I register a company in Ireland?")
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace_questions() {
        assert!(request("").validate().is_err());
        assert!(request("   \n\t ").validate().is_err());
    }

    #[test]
    fn rejects_oversized_fields() {
        assert!(request(&"q".repeat(MAX_QUESTION_LEN + 1)).validate().is_err());

        let mut req = request("ok");
        req.context = Some("c".repeat(MAX_CONTEXT_LEN + 1));
        assert!(req.validate().is_err());

        let mut req = request("ok");
        req.user_id = Some("u".repeat(MAX_USER_ID_LEN + 1));
        assert!(req.validate().is_err());
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let mut req = request(&"q".repeat(MAX_QUESTION_LEN));
        req.context = Some("c".repeat(MAX_CONTEXT_LEN));
        req.user_id = Some("u".repeat(MAX_USER_ID_LEN));
        assert!(req.validate().is_ok());
    }
}
