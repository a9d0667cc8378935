//! Resolve command handler
//!
//! Resolves one address or coordinate without starting the server.

use crate::cli::init_logging;
use crate::config::Config;
use crate::coord::Coordinates;
use crate::enrich::Enricher;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::geo::Geocoder;
use crate::lookup::{Lookup, LookupQuery};
use crate::neighborhood::FeatureSet;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve command arguments
#[derive(Args)]
pub struct ResolveArgs {
    /// Longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Latitude
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Free-text address (geocoded)
    #[arg(long, short = 'a', conflicts_with_all = ["lat", "lng"])]
    pub address: Option<String>,

    /// GeoJSON file of neighborhood polygons
    #[arg(long, short = 'd')]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,

    /// Query the configured enrichment stores
    #[arg(long)]
    pub enrich: bool,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

impl ResolveArgs {
    fn query(&self) -> Option<LookupQuery> {
        match (self.lng, self.lat, &self.address) {
            (Some(lng), Some(lat), _) => Some(LookupQuery::Coordinates(Coordinates::new(lng, lat))),
            (_, _, Some(address)) => Some(LookupQuery::Address(address.clone())),
            _ => None,
        }
    }
}

/// Run the resolve command
pub async fn run(args: ResolveArgs, config_path: Option<&Path>) -> Result<()> {
    init_logging("warn");

    if args.list_formats {
        println!("Available formats:");
        for f in available_formats() {
            println!("  {:8} {}", f.name, f.description);
        }
        return Ok(());
    }

    let formatter = get_formatter(&args.format)
        .ok_or_else(|| Error::Config(format!("Unknown output format: {}", args.format)))?;

    let query = args.query().ok_or_else(|| {
        Error::InvalidCoordinates("Provide --lng and --lat, or --address".to_string())
    })?;

    let config = Config::load_with_env(config_path)?;
    let data_path = args.data.as_deref().unwrap_or(config.data.geojson_path.as_path());
    let features = FeatureSet::load(data_path)?;

    let geocoder = Geocoder::from_config(&config)?;
    let enricher = if args.enrich {
        Some(Enricher::from_config(&config)?)
    } else {
        None
    };

    let lookup = Lookup {
        features: &features,
        labels: &config.labels,
        geocoder: &geocoder,
        enricher: enricher.as_ref(),
    };
    let response = lookup.run(query).await?;

    let output = formatter.format(&response)?;

    if let Some(path) = &args.output {
        fs::write(path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        print!("{}", output);
    }

    Ok(())
}
