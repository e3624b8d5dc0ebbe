//! Search types — results, errors, and the backend trait.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One normalized search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

impl SearchResult {
    #[must_use]
    pub fn new(title: impl Into<String>, snippet: impl Into<String>, url: impl Into<String>) -> Self {
        Self { title: title.into(), snippet: snippet.into(), url: url.into() }
    }
}

/// Errors produced by search backend calls.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP request to the backend failed.
    #[error("search request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("search response error: status {status}")]
    Response { status: u16, body: String },

    /// The backend body was not JSON.
    #[error("search response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Web search backend returning its raw JSON payload. Enables mocking in tests.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run `query` against the backend.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] on transport failure, non-success status,
    /// or a body that is not JSON.
    async fn query(&self, query: &str) -> Result<Value, SearchError>;
}
