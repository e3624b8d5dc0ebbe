//! LLM — generation client over a hosted text-generation backend.
//!
//! DESIGN
//! ======
//! `GenerationClient` wraps an optional [`TextGeneration`] backend. Trivial
//! persona questions are answered from the literal table before any backend
//! call. Otherwise the conversation context plus a transcript-formatted
//! prompt is sent, the continuation is extracted from either response
//! shape, and the result is sanitized. Blank output counts as a failure.
//!
//! The backend is `None` when no API key is configured; calls then fail
//! with [`LlmError::MissingApiKey`] and callers fall back.

pub mod config;
pub mod huggingface;
pub mod types;

use std::sync::Arc;

use rand::Rng;

pub use types::TextGeneration;
use types::{LlmError, extract_generated_text};

use crate::assistant::classify::{direct_answer, direct_category};
use crate::assistant::{mock_bank, sanitize};

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation backend error: {0}")]
    Backend(#[from] LlmError),
    #[error("generation backend returned empty output")]
    EmptyOutput,
}

#[derive(Clone)]
pub struct GenerationClient {
    backend: Option<Arc<dyn TextGeneration>>,
}

impl GenerationClient {
    #[must_use]
    pub fn new(backend: Option<Arc<dyn TextGeneration>>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Generate a reply for `input` given the rendered conversation context.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Backend`] when the backend is missing or
    /// fails, and [`GenerationError::EmptyOutput`] when it produces nothing
    /// usable after sanitizing.
    pub async fn try_generate(&self, input: &str, history: &str) -> Result<String, GenerationError> {
        if let Some(answer) = direct_category(input).and_then(direct_answer) {
            return Ok(answer.to_string());
        }

        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| LlmError::MissingApiKey { var: config::API_KEY_VAR.into() })?;

        let prompt = build_prompt(history, input);
        let response = backend.generate(&prompt).await?;

        let generated = extract_generated_text(&response);
        if generated.trim().is_empty() {
            return Err(GenerationError::EmptyOutput);
        }

        let cleaned = sanitize::sanitize(&generated);
        if cleaned.is_empty() {
            return Err(GenerationError::EmptyOutput);
        }
        tracing::debug!(raw_len = generated.len(), cleaned_len = cleaned.len(), "generation: reply extracted");
        Ok(cleaned)
    }

    /// Like [`Self::try_generate`], but any failure falls back to the mock
    /// response bank. Always non-empty.
    pub async fn generate<R>(&self, input: &str, history: &str, rng: &mut R) -> String
    where
        R: Rng + Send + ?Sized,
    {
        match self.try_generate(input, history).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "generation failed, using mock response");
                mock_bank::respond(input, rng).to_string()
            }
        }
    }
}

/// Transcript-formatted prompt: context, then the new human turn, then an
/// open assistant turn for the backend to complete.
#[must_use]
pub fn build_prompt(history: &str, input: &str) -> String {
    format!("{history}\nHuman: {input}\nAssistant:")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
