//! SBV to WebVTT Conversion Server
//!
//! Accepts SBV (SubViewer) subtitles over HTTP and returns a downloadable
//! WebVTT document, optionally italicizing caller-supplied phrases.

mod config;
mod config_file;
mod error;
mod http;
mod metrics;
mod state;

#[cfg(test)]
mod integration;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::config_file::ConfigFile;
use crate::error::{Result, ServerError};
use crate::http::create_router;
use crate::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "sbv-vtt-server";

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let first = args.next();

    if first.as_deref() == Some("--generate-config") {
        let path = args.next().unwrap_or_else(|| "config.toml".to_string());
        crate::config_file::generate_default_config(&path)?;
        println!("Wrote default configuration to {}", path);
        return Ok(());
    }

    // Load configuration before logging so the log level can come from it
    let config_path = first.unwrap_or_else(|| "config.toml".to_string());
    let loaded = Path::new(&config_path)
        .exists()
        .then(|| ConfigFile::from_file(&config_path));
    let config = match &loaded {
        Some(Ok(file)) => file.clone().into_server_config(),
        _ => ServerConfig::default(),
    };

    init_logging(&config);

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    if let Some(Err(e)) = &loaded {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            config_path,
            e
        );
    }
    tracing::info!("Configuration loaded: {:?}", config);

    let state = Arc::new(AppState::new(config.clone()));
    let app = create_router(state);

    let addr: SocketAddr = config.socket_addr().parse().map_err(|e| {
        ServerError::Config(format!("Invalid listen address {}: {}", config.socket_addr(), e))
    })?;
    tracing::info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize logging with tracing
fn init_logging(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_filter().into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
