//! Hugging Face inference API client.
//!
//! Thin HTTP wrapper for `POST /models/{model}`. The response body is
//! returned as raw JSON so the proxy route can relay it verbatim and the
//! generation client can tolerate both response shapes.

use serde::Serialize;
use serde_json::Value;

use super::config::GenerationConfig;
use super::types::{DecodingParameters, LlmError, TextGeneration};

pub struct HuggingFaceClient {
    http: reqwest::Client,
    api_key: String,
    url: String,
    parameters: DecodingParameters,
}

impl HuggingFaceClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: GenerationConfig) -> Result<Self, LlmError> {
        let http = config
            .timeouts
            .build_client()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        let url = config.model_url();
        Ok(Self { http, api_key: config.api_key, url, parameters: DecodingParameters::default() })
    }
}

#[async_trait::async_trait]
impl TextGeneration for HuggingFaceClient {
    async fn generate(&self, inputs: &str) -> Result<Value, LlmError> {
        tracing::debug!(prompt_len = inputs.len(), "huggingface: generate");
        let body = ApiRequest { inputs, parameters: &self.parameters };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %text, "huggingface: upstream error");
            return Err(LlmError::ApiResponse { status: status.as_u16(), body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    inputs: &'a str,
    parameters: &'a DecodingParameters,
}

fn parse_response(body: &str) -> Result<Value, LlmError> {
    serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "huggingface_test.rs"]
mod tests;
