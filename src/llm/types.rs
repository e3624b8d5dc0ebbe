//! LLM types — errors, decoding parameters, and the backend trait.

use serde::Serialize;
use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by text-generation backend calls.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the backend failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The backend returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Short stable code for logs and JSON error bodies.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

// =============================================================================
// DECODING PARAMETERS
// =============================================================================

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodingParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
    pub return_full_text: bool,
    pub stop: Vec<String>,
}

impl Default for DecodingParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 500,
            temperature: 0.7,
            top_p: 0.95,
            do_sample: true,
            return_full_text: false,
            stop: ["Human:", "User:", "Question:", "You:"].map(String::from).to_vec(),
        }
    }
}

// =============================================================================
// RESPONSE EXTRACTION
// =============================================================================

/// Pull the generated text out of a backend response.
///
/// Accepts both `[{"generated_text": …}, …]` (first element wins) and
/// `{"generated_text": …}`. Anything else yields an empty string.
#[must_use]
pub fn extract_generated_text(response: &Value) -> String {
    let generation = match response {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(response),
        _ => None,
    };
    generation
        .and_then(|g| g.get("generated_text"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Hosted text-generation backend. Enables mocking in tests.
#[async_trait::async_trait]
pub trait TextGeneration: Send + Sync {
    /// Send a fully formatted prompt and return the backend's raw JSON.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the backend answers
    /// with a non-success status, or the body is not JSON.
    async fn generate(&self, inputs: &str) -> Result<Value, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
