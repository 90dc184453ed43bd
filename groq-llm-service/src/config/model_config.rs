/// Configuration for one Groq model invocation.
///
/// Everything the chat client needs to issue a request: the model, the
/// endpoint base, the credential, and the fixed sampling parameters.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"llama-3.1-8b-instant"`).
/// - `endpoint`: Provider API base (the client appends `/v1/chat/completions`).
/// - `api_key`: Optional bearer credential. Absence means the relay runs in
///   degraded, no-network mode rather than failing at startup.
/// - `max_tokens`: Maximum number of tokens to generate.
/// - `temperature`: Sampling temperature.
/// - `top_p`: Nucleus sampling cutoff.
/// - `timeout_secs`: Outbound request timeout in seconds.
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// Model identifier string.
    pub model: String,

    /// Provider API base URL.
    pub endpoint: String,

    /// Optional bearer credential for the provider.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
