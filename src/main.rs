//! Insurance API - Main Entry Point

use insurance_api::{ApiState, ServerConfig, SystemClock, build_router};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".into());
    let loaded = ServerConfig::load(&config_path);
    let config = loaded
        .as_ref()
        .cloned()
        .unwrap_or_default()
        .with_env_overrides();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Insurance API v{}", env!("CARGO_PKG_VERSION"));
    if let Err(err) = &loaded {
        tracing::warn!("Config not loaded from {} ({}), using defaults", config_path, err);
    }

    let state = ApiState::in_memory(Arc::new(SystemClock));
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Insurance API listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
