//! Album Catalog Service - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Seed the album store
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use album_catalog_service::{AppState, Config, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let state = AppState::from_config(&config);
    tracing::info!(albums = state.store.len().await, "Album store seeded");

    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Each connection is served on its own tokio task
    axum::serve(listener, app).await?;

    Ok(())
}
