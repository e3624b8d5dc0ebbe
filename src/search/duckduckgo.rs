//! DuckDuckGo instant-answer API client.

use serde_json::Value;

use super::config::SearchConfig;
use super::types::{SearchBackend, SearchError};

pub struct DuckDuckGoClient {
    http: reqwest::Client,
    base_url: String,
}

impl DuckDuckGoClient {
    /// # Errors
    ///
    /// Returns [`SearchError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let http = config
            .timeouts
            .build_client()
            .map_err(|e| SearchError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url })
    }
}

#[async_trait::async_trait]
impl SearchBackend for DuckDuckGoClient {
    async fn query(&self, query: &str) -> Result<Value, SearchError> {
        tracing::debug!(query, "duckduckgo: query");
        let response = self
            .http
            .get(format!("{}/", self.base_url))
            .query(&[("q", query), ("format", "json"), ("no_html", "1"), ("skip_disambig", "1")])
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "duckduckgo: upstream error");
            return Err(SearchError::Response { status: status.as_u16(), body: text });
        }

        // The API labels its JSON as `application/x-javascript`, so parse the text.
        serde_json::from_str(&text).map_err(|e| SearchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "duckduckgo_test.rs"]
mod tests;
