//! Serve command handler
//!
//! Starts the HTTP server in foreground mode.

use crate::cli::init_logging;
use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// GeoJSON file of neighborhood polygons
    #[arg(long, short = 'd')]
    pub data: Option<PathBuf>,
}

/// Run the serve command
pub async fn run(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    init_logging("info");

    // Load config, then environment, then flags
    let mut config = Config::load_with_env(config_path)?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data) = args.data {
        config.data.geojson_path = data;
    }

    info!(
        "Starting hood-resolver server v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );

    server::run(config).await
}
