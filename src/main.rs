//! hood-resolver CLI entry point
//!
//! Neighborhood resolver - CLI + web API

use hood_resolver::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
