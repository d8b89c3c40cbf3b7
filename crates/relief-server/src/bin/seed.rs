//! One-shot sample-data seeding tool.
//!
//! Run once against a fresh store; kinds that already hold records are left
//! untouched. Never run concurrently with the live service.

use anyhow::Result;
use clap::Parser;
use relief_server::{config, seed, storage, StoreBackend};

#[derive(Debug, Parser)]
#[command(
    about = "Populate the relief store with fixed sample records. Kinds that already have data are skipped."
)]
struct Args {
    /// Store backend to seed (overrides STORE_BACKEND)
    #[arg(long)]
    backend: Option<StoreBackend>,

    /// SQLite database path (overrides DATABASE_PATH)
    #[arg(long)]
    database_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let mut config = config::load_config()?;
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    if let Some(path) = args.database_path {
        config.database_path = path;
    }

    let store = storage::connect(&config).await?;
    seed::run(store.as_ref()).await
}
