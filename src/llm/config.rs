//! Generation backend configuration parsed from environment variables.

use super::types::LlmError;
use crate::config::{HttpTimeouts, env_string};

pub const API_KEY_VAR: &str = "HUGGINGFACE_API_KEY";
pub const DEFAULT_HF_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_HF_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: HttpTimeouts,
}

impl GenerationConfig {
    /// Build typed generation config from environment variables.
    ///
    /// Required:
    /// - `HUGGINGFACE_API_KEY`
    ///
    /// Optional:
    /// - `HF_MODEL`: default `mistralai/Mistral-7B-Instruct-v0.2`
    /// - `HF_BASE_URL`: default inference API base URL
    /// - `HTTP_REQUEST_TIMEOUT_SECS` / `HTTP_CONNECT_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] when the key is unset or blank, and
    /// [`LlmError::ConfigParse`] when `HF_BASE_URL` is not an absolute URL.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = env_string(API_KEY_VAR).ok_or_else(|| LlmError::MissingApiKey { var: API_KEY_VAR.into() })?;
        let model = env_string("HF_MODEL").unwrap_or_else(|| DEFAULT_HF_MODEL.to_string());
        let base_url = env_string("HF_BASE_URL")
            .unwrap_or_else(|| DEFAULT_HF_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        reqwest::Url::parse(&base_url).map_err(|e| LlmError::ConfigParse(format!("HF_BASE_URL {base_url:?}: {e}")))?;
        Ok(Self { api_key, model, base_url, timeouts: HttpTimeouts::from_env() })
    }

    /// Full URL of the model's inference endpoint.
    #[must_use]
    pub fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
