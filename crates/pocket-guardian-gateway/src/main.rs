//! Pocket Guardian Gateway - HTTP API for the item checklist service
//!
//! This is the main entry point for the gateway service.
//!
//! # Configuration
//!
//! Read from the environment: `HOST`, `PORT` (or `LISTEN_ADDR`),
//! `CORS_ORIGINS`, `MAX_BODY_BYTES`, `REQUEST_TIMEOUT_SECONDS`.
//!
//! Set `SCAN_SEED` to make scan results reproducible across runs.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pocket_guardian_control::ChecklistService;
use pocket_guardian_core::{RandomSource, SeededRandom, ThreadRandom};
use pocket_guardian_gateway::{create_router, GatewayConfig, GatewayState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pocket_guardian=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pocket Guardian Gateway");

    let config = GatewayConfig::from_env()?;
    let listen_addr = config.listen_addr();

    tracing::info!(
        listen_addr = %listen_addr,
        cors_origins = ?config.cors_origins,
        max_body_bytes = config.max_body_bytes,
        request_timeout_seconds = config.request_timeout_seconds,
        scan_seed = ?config.scan_seed,
        "Gateway configuration loaded"
    );

    let rng: Arc<dyn RandomSource> = match config.scan_seed {
        Some(seed) => {
            tracing::warn!(seed, "Using seeded scan results");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    let checklist = Arc::new(ChecklistService::with_random(rng));
    tracing::info!(
        modes = checklist.catalog().len(),
        "Checklist service initialized"
    );

    let state = GatewayState::new(checklist, config);
    let app = create_router(state);

    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
