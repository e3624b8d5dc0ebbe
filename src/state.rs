//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It is immutable after startup. The router drives `/api/chat`; the raw
//! backends are kept alongside it for the proxy endpoints, which relay
//! upstream JSON without normalizing it. The resource catalog memoizes its
//! first fetch, so it is shared rather than rebuilt per request.

use std::sync::Arc;

use crate::assistant::router::ResponseRouter;
use crate::llm::{GenerationClient, TextGeneration};
use crate::resources::{LibraryBackend, ResourceCatalog};
use crate::search::{SearchBackend, SearchClient};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum, so every field is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ResponseRouter>,
    /// Optional generation backend. `None` if no API key is configured.
    pub generator: Option<Arc<dyn TextGeneration>>,
    pub search: Arc<dyn SearchBackend>,
    pub resources: Arc<ResourceCatalog>,
}

impl AppState {
    #[must_use]
    pub fn new(
        generator: Option<Arc<dyn TextGeneration>>,
        search: Arc<dyn SearchBackend>,
        library: Arc<dyn LibraryBackend>,
    ) -> Self {
        let generation = GenerationClient::new(generator.clone());
        tracing::info!(generation_configured = generation.is_configured(), "response router ready");
        let router = ResponseRouter::new(SearchClient::new(search.clone()), generation);
        Self {
            router: Arc::new(router),
            generator,
            search,
            resources: Arc::new(ResourceCatalog::new(library)),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
