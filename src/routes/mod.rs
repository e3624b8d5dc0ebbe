//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API under a single Axum router: the chat
//! endpoint, the two upstream proxies, the learning-resources list, and a
//! health check. When a static UI directory is configured it is served as
//! the fallback for every other path.

pub mod chat;
pub mod proxy;
pub mod resources;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes plus the optional static UI.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/api/generate", post(proxy::generate))
        .route("/api/search", get(proxy::search))
        .route("/api/chat", post(chat::chat))
        .route("/api/chat/suggestions", get(chat::suggestions))
        .route("/api/resources/learning", get(resources::learning))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true)),
        None => router,
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
