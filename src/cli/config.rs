//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;
use std::path::Path;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "geocoder.provider")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    // Show path
    if args.path {
        println!("{}", path.display());
        return Ok(());
    }

    // Reset config
    if args.reset {
        Config::default().save_to(&path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = if path.exists() {
        Config::load_from(&path)?
    } else {
        Config::default()
    };

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            print!("{}", render_masked(&config)?);
        }

        // Key only: show that value
        (Some(key), None) => {
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                eprintln!("Unknown config key: {}", key);
                eprintln!("\nAvailable keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                std::process::exit(1);
            }
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save_to(&path)?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            eprintln!("Error: Must specify a key to set a value");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Render the config as TOML with API keys masked
fn render_masked(config: &Config) -> Result<String> {
    let mut shown = config.clone();
    for key in [
        &mut shown.api_keys.mapbox,
        &mut shown.api_keys.webflow,
        &mut shown.api_keys.supabase,
    ] {
        if !key.is_empty() {
            *key = "***".to_string();
        }
    }

    toml::to_string_pretty(&shown)
        .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_masks_keys() {
        let mut config = Config::default();
        config.api_keys.mapbox = "pk.secret".to_string();

        let rendered = render_masked(&config).unwrap();
        assert!(!rendered.contains("pk.secret"));
        assert!(rendered.contains("mapbox = \"***\""));
        assert!(rendered.contains("webflow = \"\""));
    }

    #[test]
    fn test_set_writes_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        run(
            ConfigArgs {
                key: Some("server.port".to_string()),
                value: Some("8081".to_string()),
                path: false,
                reset: false,
            },
            Some(&path),
        )
        .unwrap();

        assert_eq!(Config::load_from(&path).unwrap().server.port, 8081);
    }
}
