mod builder;
mod config;
mod editor;
mod errors;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod store;
mod suggest;
mod workspace;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{FileStore, MemoryStore, ResumeStore};
use crate::suggest::{CannedSuggester, LlmSuggester, SuggestionGenerator};
use crate::workspace::Workspace;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn ResumeStore> = match config.store_backend {
        StoreBackend::File => {
            let file = FileStore::new(config.store_path.clone());
            info!("Resume store: {}", file.path().display());
            Arc::new(file)
        }
        StoreBackend::Memory => {
            info!("Resume store: in-memory");
            Arc::new(MemoryStore::new())
        }
    };

    let suggester: Arc<dyn SuggestionGenerator> = match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone())?;
            info!("Suggestions: LLM (model: {})", llm_client::MODEL);
            Arc::new(LlmSuggester::new(client))
        }
        None => {
            info!(
                "Suggestions: canned ({}ms delay)",
                config.suggestion_delay.as_millis()
            );
            Arc::new(CannedSuggester::new(config.suggestion_delay))
        }
    };

    let workspace = Arc::new(Workspace::open(store).await?);
    let state = AppState::new(workspace, suggester);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
