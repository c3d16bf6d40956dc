mod assist;
mod config;
mod design;
mod errors;
mod export;
mod llm_client;
mod models;
mod preview;
mod render;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::preview::PreviewLayout;
use crate::render::registry::TemplateRegistry;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::RedisStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Redis-backed resume store
    let redis = redis::Client::open(config.redis_url.clone())?;
    let store = Arc::new(RedisStore::new(redis));
    info!("Redis client initialized");

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Template registry and preview layout tunables
    let registry = Arc::new(TemplateRegistry::with_defaults());
    let preview_layout = PreviewLayout {
        narrow_viewport_px: config.narrow_viewport_px,
        ..PreviewLayout::default()
    };
    info!("Templates registered: {:?}", registry.keys());

    // Build app state
    let state = AppState {
        store,
        llm,
        config: config.clone(),
        registry,
        preview_layout,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
