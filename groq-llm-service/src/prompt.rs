//! Prompt construction for the startup-advisor relay.

/// Advisor persona sent as the system message on every relay call.
///
/// Override with the `SYSTEM_PROMPT` environment variable.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are an expert startup business advisor and guide. Your role is to provide accurate, \
helpful, and actionable advice for entrepreneurs and startup founders.

Key areas of expertise:
- Business plan development
- Legal requirements and documentation
- Funding and investment strategies
- Market research and validation
- Regulatory compliance
- International business and travel requirements
- Financial planning and management

**Key Guidelines:**
- Provide accurate, actionable advice for entrepreneurs
- Include specific requirements, documents, or steps when applicable
- Mention regulatory considerations and legal requirements
- Suggest reliable sources or official websites when relevant
- Be comprehensive but concise
- Use bullet points and clear formatting for readability

**Response Format:**
- Start with a direct answer
- Provide detailed steps or requirements
- Include important considerations or warnings
- End with additional resources if applicable";

/// Returns the configured system prompt, falling back to the default.
pub fn system_prompt_from_env() -> String {
    std::env::var("SYSTEM_PROMPT")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string())
}

/// Builds the user message, prepending context when the caller supplied any.
pub fn build_user_message(question: &str, context: Option<&str>) -> String {
    match context {
        Some(ctx) if !ctx.trim().is_empty() => {
            format!("**Context:** {ctx}\n\n**Question:** {question}")
        }
        _ => question.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_question_passes_through() {
        assert_eq!(build_user_message("How do I incorporate?", None), "How do I incorporate?");
    }

    #[test]
    fn context_is_prepended() {
        let msg = build_user_message("Which visa do I need?", Some("Attending a conference"));
        assert!(msg.starts_with("**Context:** Attending a conference"));
        assert!(msg.ends_with("**Question:** Which visa do I need?"));
    }

    #[test]
    fn blank_context_is_ignored() {
        assert_eq!(build_user_message("q", Some("   ")), "q");
    }
}
