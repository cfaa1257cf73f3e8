//! DeFi Agent Backend server
//!
//! Loads settings, then serves the liveness endpoint until shutdown.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use defi_agent_backend::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "defi_agent_backend=debug,server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a bad value stops us before anything is bound.
    let settings = Settings::load().context("Failed to load settings")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting DeFi Agent Backend"
    );
    tracing::info!("Chain: {}", settings.chain_id);
    tracing::info!("RPC endpoints configured: {}", settings.rpc_endpoints().len());
    tracing::debug!(?settings, "Settings loaded");

    // Start server
    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    defi_agent_backend::serve(listener, defi_agent_backend::shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
