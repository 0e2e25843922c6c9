//! Verdict Decision Service HTTP Server
//!
//! Provides REST API for evaluating decision models.

use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verdict_server::{api, config::ServerConfig, engine};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let loaded = ServerConfig::load()?;
    let config = loaded.config;

    // Initialize tracing
    init_tracing(&config)?;
    if let Some(reason) = &loaded.fallback_reason {
        info!("No usable config sources ({}), using default configuration", reason);
    }
    info!("Loaded configuration: {:?}", config);

    // Initialize decision service
    let service = engine::init_service(&config).await?;
    info!("Decision service initialized");

    let app = api::create_router(Arc::new(service));

    // Start server
    let addr = config.addr();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/dmn/health", addr);
    info!("  Evaluate API: POST http://{}/dmn/evaluate", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &ServerConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
