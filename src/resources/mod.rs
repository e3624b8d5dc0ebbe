//! Resources — curated and fetched environmental learning material.
//!
//! DESIGN
//! ======
//! `ResourceCatalog` wraps a [`LibraryBackend`] that returns raw subject
//! listings. The first request picks a subject, keeps the environmentally
//! relevant works and pads the list from the curated set; any backend
//! failure yields the full curated set instead. The outcome is memoized
//! for the life of the process, so the backend is asked at most once.

pub mod config;
pub mod learning;
pub mod openlibrary;
pub mod types;

use std::sync::Arc;

use rand::Rng;
use tokio::sync::OnceCell;

pub use learning::curated_learning_resources;
pub use types::{LearningResource, LibraryBackend, ResourceError};

pub struct ResourceCatalog {
    backend: Arc<dyn LibraryBackend>,
    learning: OnceCell<Vec<LearningResource>>,
}

impl ResourceCatalog {
    #[must_use]
    pub fn new(backend: Arc<dyn LibraryBackend>) -> Self {
        Self { backend, learning: OnceCell::new() }
    }

    /// Learning resources, fetched on first use and memoized afterwards.
    /// Never empty.
    pub async fn learning_resources<R>(&self, rng: &mut R) -> &[LearningResource]
    where
        R: Rng + Send + ?Sized,
    {
        let subject = learning::pick_subject(rng);
        self.learning.get_or_init(|| self.fetch_learning(subject)).await
    }

    async fn fetch_learning(&self, subject: &str) -> Vec<LearningResource> {
        match self.backend.subject(subject).await {
            Ok(data) => {
                let mut found = learning::relevant_works(&data, subject);
                tracing::info!(subject, relevant = found.len(), "resources: subject fetched");
                learning::pad_with_curated(&mut found);
                found
            }
            Err(e) => {
                tracing::warn!(subject, error = %e, "resources: fetch failed, using curated list");
                curated_learning_resources()
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
