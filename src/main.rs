use std::sync::Arc;

use adghal::llm::TextGeneration;
use adghal::llm::config::GenerationConfig;
use adghal::llm::huggingface::HuggingFaceClient;
use adghal::resources::config::ResourcesConfig;
use adghal::resources::openlibrary::OpenLibraryClient;
use adghal::search::config::SearchConfig;
use adghal::search::duckduckgo::DuckDuckGoClient;
use adghal::{config, routes, state};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server = config::ServerConfig::from_env().expect("invalid server configuration");

    // Initialize generation backend (non-fatal: mock answers only if config missing).
    let generator: Option<Arc<dyn TextGeneration>> =
        match GenerationConfig::from_env().and_then(|config| {
            let model = config.model.clone();
            HuggingFaceClient::new(config).map(|client| (model, client))
        }) {
            Ok((model, client)) => {
                tracing::info!(%model, "generation client initialized");
                Some(Arc::new(client) as Arc<dyn TextGeneration>)
            }
            Err(e) => {
                tracing::warn!(error = %e, "generation client not configured, using mock answers");
                None
            }
        };

    let search_config = SearchConfig::from_env();
    tracing::info!(base_url = %search_config.base_url, "search client initialized");
    let search = DuckDuckGoClient::new(search_config).expect("search client init failed");

    let resources_config = ResourcesConfig::from_env();
    tracing::info!(base_url = %resources_config.base_url, "library client initialized");
    let library = OpenLibraryClient::new(resources_config).expect("library client init failed");

    let state = state::AppState::new(generator, Arc::new(search), Arc::new(library));
    let app = routes::app(state, server.static_dir.as_deref());

    let port = server.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, static_dir = ?server.static_dir, "adghal listening");
    axum::serve(listener, app).await.expect("server failed");
}
