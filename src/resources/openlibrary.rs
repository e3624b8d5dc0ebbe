//! Open Library subjects API client.

use serde_json::Value;

use super::config::ResourcesConfig;
use super::types::{LibraryBackend, ResourceError};

/// Works requested per subject listing.
const SUBJECT_LIMIT: &str = "12";

pub struct OpenLibraryClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    /// # Errors
    ///
    /// Returns [`ResourceError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: ResourcesConfig) -> Result<Self, ResourceError> {
        let http = config
            .timeouts
            .build_client()
            .map_err(|e| ResourceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url })
    }
}

#[async_trait::async_trait]
impl LibraryBackend for OpenLibraryClient {
    async fn subject(&self, subject: &str) -> Result<Value, ResourceError> {
        tracing::debug!(subject, "openlibrary: subject");
        let response = self
            .http
            .get(format!("{}/subjects/{subject}.json", self.base_url))
            .query(&[("limit", SUBJECT_LIMIT)])
            .send()
            .await
            .map_err(|e| ResourceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "openlibrary: upstream error");
            return Err(ResourceError::Response { status: status.as_u16(), body });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ResourceError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "openlibrary_test.rs"]
mod tests;
