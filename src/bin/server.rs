//! CCA HTTP Server Binary
//!
//! This is the main entry point for the CCA REST API server.
//! It loads the channel dataset, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the dataset path from cca.toml (or the built-in default)
//! cargo run --bin cca-server
//!
//! # Point at a specific dataset file
//! CCA_DATASET=data/channel_metrics.csv cargo run --bin cca-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CCA_DATASET`: Path to the channel metrics CSV file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cca_rust::config::ServerConfig;
use cca_rust::http::{create_router, AppState};
use cca_rust::io::load_dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting CCA HTTP Server");

    // Resolve configuration: file first, then environment overrides
    let config = ServerConfig::from_default_location()?.apply_env_overrides();

    // Load the dataset once; it is shared read-only for the process lifetime
    let dataset = load_dataset(&config.dataset.path)?;
    info!(
        rows = dataset.len(),
        checksum = %dataset.checksum(),
        "Dataset initialized successfully"
    );

    // Create application state
    let state = AppState::new(Arc::new(dataset));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let addr: SocketAddr = config.bind_addr().parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
