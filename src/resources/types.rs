//! Resource types — learning resources, errors, and the library backend trait.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry on the learning-resources list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Errors produced by library backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The HTTP request to the backend failed.
    #[error("library request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("library response error: status {status}")]
    Response { status: u16, body: String },

    /// The backend body was not JSON.
    #[error("library response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Book catalog browsed by subject. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LibraryBackend: Send + Sync {
    /// Fetch the raw subject listing for `subject` (e.g. `ecology`).
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] on transport failure, non-success status,
    /// or a body that is not JSON.
    async fn subject(&self, subject: &str) -> Result<Value, ResourceError>;
}
