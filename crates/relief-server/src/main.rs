//! Relief Server
//!
//! Disaster-information backend: alert, helpline, safe-location, and
//! volunteer endpoints over a configurable store (embedded SQLite or
//! in-memory).

use anyhow::{Context, Result};
use relief_server::{config, create_app, storage, AppState};
use std::net::SocketAddr;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting relief server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = config::load_config().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, backend={:?}",
        config.bind_address, config.backend
    );

    // An unreachable store is fatal; never serve without one.
    let store = storage::connect(&config)
        .await
        .context("Failed to initialize store")?;

    let state = AppState { store };
    let app = create_app(state, &config.static_dir);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
