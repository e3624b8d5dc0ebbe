//! Library backend configuration.

use crate::config::{HttpTimeouts, env_string};

pub const DEFAULT_OPEN_LIBRARY_BASE_URL: &str = "https://openlibrary.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcesConfig {
    pub base_url: String,
    pub timeouts: HttpTimeouts,
}

impl ResourcesConfig {
    /// Read `OPEN_LIBRARY_BASE_URL` (default: the public Open Library site)
    /// and the shared HTTP timeouts.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env_string("OPEN_LIBRARY_BASE_URL")
            .unwrap_or_else(|| DEFAULT_OPEN_LIBRARY_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self { base_url, timeouts: HttpTimeouts::from_env() }
    }
}
