//! Search backend configuration.

use crate::config::{HttpTimeouts, env_string};

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://api.duckduckgo.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub base_url: String,
    pub timeouts: HttpTimeouts,
}

impl SearchConfig {
    /// Read `SEARCH_BASE_URL` (default: the public instant-answer API) and
    /// the shared HTTP timeouts.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env_string("SEARCH_BASE_URL")
            .unwrap_or_else(|| DEFAULT_SEARCH_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self { base_url, timeouts: HttpTimeouts::from_env() }
    }
}
