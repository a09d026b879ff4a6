//! autos-service - serves the vehicle collection in `./autos.json` over HTTP.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use autos_service::{http, AutoStore, Config, InMemoryAutoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG takes precedence, fallback to info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    tracing::info!(
        port = config.port,
        host = %config.host,
        data = %config.data.display(),
        "Starting autos-service"
    );

    let store = InMemoryAutoStore::load(&config.data)
        .with_context(|| format!("loading seed collection from {}", config.data.display()))?;
    tracing::info!(count = store.len()?, "collection ready");

    http::serve(Arc::new(store), &config.bind_addr(), http::shutdown_signal())
        .await
        .with_context(|| format!("serving on {}", config.bind_addr()))
}
