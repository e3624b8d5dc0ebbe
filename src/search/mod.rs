//! Search — current-information lookups against a web search backend.
//!
//! DESIGN
//! ======
//! `SearchClient` wraps a [`SearchBackend`] that returns raw instant-answer
//! JSON. The payload is flattened into [`SearchResult`]s. A backend that
//! answers but finds nothing yields topic-conditioned placeholder results;
//! a backend that fails propagates the error so callers can move on to
//! the next response source.

pub mod config;
pub mod duckduckgo;
pub mod results;
pub mod types;

use std::sync::Arc;

pub use results::summarize;
pub use types::{SearchBackend, SearchError, SearchResult};

#[derive(Clone)]
pub struct SearchClient {
    backend: Arc<dyn SearchBackend>,
}

impl SearchClient {
    #[must_use]
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Query the backend and normalize its answer. Never returns an empty
    /// list on success.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`SearchError`] unchanged.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let data = self.backend.query(query).await?;
        let found = results::normalize(&data);
        if found.is_empty() {
            tracing::info!(query, "search: no results, using placeholders");
            return Ok(results::placeholder_results(query));
        }
        tracing::debug!(query, count = found.len(), "search: results normalized");
        Ok(found)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
