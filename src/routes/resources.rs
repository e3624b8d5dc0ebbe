//! Learning-resource routes.

use axum::extract::State;
use axum::response::Json;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::resources::LearningResource;
use crate::state::AppState;

/// `GET /api/resources/learning` — books and guides for the resources page.
/// Always succeeds; backend trouble is absorbed by the curated list.
pub async fn learning(State(state): State<AppState>) -> Json<Vec<LearningResource>> {
    let mut rng = StdRng::from_os_rng();
    let resources = state.resources.learning_resources(&mut rng).await;
    Json(resources.to_vec())
}

#[cfg(test)]
#[path = "resources_test.rs"]
mod tests;
