//! HTTP server for hood-resolver
//!
//! Provides REST API endpoints for neighborhood resolution.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::GeoBackend;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server
///
/// Loads the polygon data once, then serves until shut down.
pub async fn run(config: Config) -> Result<()> {
    let addr = config.server_addr();
    let state = AppState::from_config(config)?;
    run_on(&addr, state).await
}

/// Start the HTTP server on a specific address with prepared state
pub async fn run_on(addr: &str, state: AppState) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| Error::Server(format!("Invalid server address: {}", e)))?;

    info!(
        features = state.features.len(),
        geocoder = state.geocoder.name(),
        "Starting server on {}",
        addr
    );
    let app = create_router(Arc::new(state));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
