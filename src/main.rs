use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snip::config::Config;
use snip::shortener::ThreadRngCodeSource;
use snip::{create_app, storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // Initialize storage
    info!(
        backend = ?config.database.backend,
        "Connecting to storage: {}", config.database.url
    );
    let storage = storage::connect(&config.database).await?;

    info!("Initializing database...");
    storage.init().await?;
    info!("Database initialized successfully");

    let app = create_app(
        storage,
        Arc::new(ThreadRngCodeSource),
        &config.base_url,
        config.allocation.max_attempts,
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);
    info!("   - Short links are served as {}/<code>", config.base_url.trim_end_matches('/'));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
