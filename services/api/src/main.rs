//! marquee API server
//!
//! Serves read-only actor return analytics over a movie-cast dataset that is
//! loaded once at startup.

use std::sync::Arc;

use anyhow::{Context, Result};
use marquee_api::{api, config, state::AppState};
use marquee_dataset::DatasetStore;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to MARQUEE_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting marquee API");
    info!(listen_addr = %config.listen_addr, "Configuration loaded");

    // A partial dataset is never served.
    let store = match DatasetStore::load(&config.dataset) {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, relation = %e.relation(), "Failed to load dataset");
            return Err(e).context("dataset load failed");
        }
    };

    let mismatches = store.directory_mismatches();
    if mismatches > 0 {
        warn!(
            mismatches,
            "Cast actors missing from the actor directory; serving anyway"
        );
    }

    let state = AppState::new(Arc::new(store), config.public_url.clone());
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("marquee API shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
