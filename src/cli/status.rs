//! Status command handler
//!
//! Summarises the polygon data file and optionally checks a running server.

use crate::config::Config;
use crate::enrich::Enricher;
use crate::error::Result;
use crate::neighborhood::FeatureSet;
use clap::Args;
use std::path::{Path, PathBuf};

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// GeoJSON file to check (defaults to data.geojson_path)
    #[arg(long, short = 'd')]
    pub data: Option<PathBuf>,

    /// Check if server is running (tries to connect)
    #[arg(long)]
    pub server: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_with_env(config_path)?;

    println!("hood-resolver v{}", env!("CARGO_PKG_VERSION"));
    println!();

    // Check server status if requested
    if args.server {
        check_server_status(&config).await;
    }

    let data_path = args.data.unwrap_or_else(|| config.data.geojson_path.clone());
    println!("Data: {}", data_path.display());

    match FeatureSet::load(&data_path) {
        Ok(features) => {
            let invalid = features.validate();
            println!("  Features: {}", features.len());
            println!("  Untitled: {}", features.iter().filter(|f| f.title.is_none()).count());
            if invalid.is_empty() {
                println!("  Geometry: OK");
            } else {
                println!("  Geometry: {} malformed", invalid.len());
                for (index, err) in invalid {
                    println!("    #{}: {}", index, err);
                }
            }
        }
        Err(e) => {
            println!("  Error: {}", e);
        }
    }
    println!();

    let enricher = Enricher::from_config(&config)?;
    println!("Geocoder: {}", config.geocoder.provider);
    println!("CMS: {}", store_state(enricher.cms_enabled()));
    println!("Database: {}", store_state(enricher.database_enabled()));

    Ok(())
}

fn store_state(enabled: bool) -> &'static str {
    if enabled {
        "configured"
    } else {
        "disabled"
    }
}

/// Check if the server is running
async fn check_server_status(config: &Config) {
    let url = format!("http://{}/api/status", config.server_addr());

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!("Server: RUNNING on {}", config.server_addr());
                if let Ok(status) = response.json::<serde_json::Value>().await {
                    if let Some(version) = status.get("version").and_then(|v| v.as_str()) {
                        println!("  Version: {}", version);
                    }
                    if let Some(features) = status.get("features").and_then(|v| v.as_u64()) {
                        println!("  Features: {}", features);
                    }
                    if let Some(uptime) = status.get("uptime_secs").and_then(|v| v.as_u64()) {
                        println!("  Uptime: {}s", uptime);
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
        }
    }
    println!();
}
