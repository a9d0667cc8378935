//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod resolve;
pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve addresses and coordinates to neighborhoods
#[derive(Parser)]
#[command(name = "hood-resolver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Resolve a single address or coordinate
    Resolve(resolve::ResolveArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Show data file and server status
    Status(status::StatusArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Serve(args) => serve::run(args, config_path).await,
        Commands::Resolve(args) => resolve::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path),
        Commands::Status(args) => status::run(args, config_path).await,
    }
}

/// Initialize logging to stderr, honouring `RUST_LOG`
pub(crate) fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
