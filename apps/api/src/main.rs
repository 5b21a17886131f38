mod adapter;
mod config;
mod errors;
mod generator;
mod models;
mod portfolio;
mod registry;
mod routes;
mod selection;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::registry::ComponentRegistry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Load the component registry (built-in unless COMPONENT_REGISTRY_PATH is set)
    let registry = match &config.component_registry_path {
        Some(path) => ComponentRegistry::load(path)
            .with_context(|| format!("Failed to load component registry from {path}"))?,
        None => ComponentRegistry::builtin().context("Built-in component registry is invalid")?,
    };
    info!("Component registry loaded ({} components)", registry.len());

    // Build app state
    let state = AppState::new(config.clone(), registry);
    info!(
        "Selector strategy: {} (merge sparse sections: {})",
        state.selector.strategy_name(),
        config.merge_sparse_sections
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
