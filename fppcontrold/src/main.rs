//! FPPControl Server
//!
//! HTTP gateway in front of a Falcon Player (FPP) device. Serves a touch
//! control page and a small REST API, and forwards each action to the
//! device's GET-based HTTP API.
//!
//! # Configuration
//!
//! Settings are resolved in this order, later sources winning:
//!
//! 1. Built-in defaults
//! 2. The TOML config file (`--config`, `FPPCONTROL_CONFIG`, or
//!    `~/.config/fppcontrol/config.toml`)
//! 3. `FPPCONTROL_SERVER_PORT` and `FPP_URL`
//! 4. Command-line flags

mod api;
mod config;
mod device;
mod sequencer;
#[cfg(test)]
mod test_utils;
mod ui;

use anyhow::Result;
use api::AppState;
use clap::Parser;
use device::HttpTransport;
use fppcontrol_core::default_config_path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

/// FPPControl gateway server
#[derive(Parser, Debug)]
#[command(name = "fppcontrold")]
#[command(version, about = "FPP web control gateway", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Base URL of the FPP device (e.g., http://fpp.local)
    #[arg(long)]
    device_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose);

    info!("FPPControl Server starting...");

    // Determine config path: CLI flag > env var > default
    let config_path = args.config.unwrap_or_else(|| {
        std::env::var(config::ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path())
    });
    info!("Configuration file: {}", config_path.display());

    let mut static_config = config::load_config(&config_path).await?;
    config::apply_env_overrides(&mut static_config, |key| std::env::var(key).ok())?;

    if let Some(bind) = args.bind {
        static_config.server.bind = bind;
    }
    if let Some(port) = args.port {
        static_config.server.port = port;
    }
    if let Some(url) = args.device_url {
        static_config.device.url = url;
    }

    static_config.validate()?;
    info!("Configuration validated successfully");
    info!(
        "  Device: {} (timeout {}ms)",
        static_config.device.url, static_config.device.timeout_ms
    );
    info!(
        "  Buttons: {}, presets: {}",
        static_config.buttons.len(),
        static_config.presets.len()
    );

    let bind_addr = format!(
        "{}:{}",
        static_config.server.bind, static_config.server.port
    );

    let transport = HttpTransport::new(Duration::from_millis(static_config.device.timeout_ms))?;
    let app_state = AppState::new(static_config, Arc::new(transport));

    // Set up API router
    let app = api::create_router(app_state);

    // Start server
    info!("Starting server on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

/// Initialize tracing subscriber for logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
