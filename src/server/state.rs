//! Server shared state
//!
//! Everything here is built once at startup and only read afterwards.

use crate::config::Config;
use crate::enrich::Enricher;
use crate::error::Result;
use crate::geo::Geocoder;
use crate::neighborhood::FeatureSet;
use std::time::{Duration, Instant};

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Neighborhood polygons, in resolution order
    pub features: FeatureSet,

    pub geocoder: Geocoder,

    pub enricher: Enricher,

    started_at: Instant,
}

impl AppState {
    /// Create application state from already-loaded parts
    pub fn new(config: Config, features: FeatureSet, geocoder: Geocoder, enricher: Enricher) -> Self {
        Self {
            config,
            features,
            geocoder,
            enricher,
            started_at: Instant::now(),
        }
    }

    /// Load the polygon file and build the upstream clients named in `config`
    pub fn from_config(config: Config) -> Result<Self> {
        let features = FeatureSet::load(&config.data.geojson_path)?;
        features.warn_invalid();

        let geocoder = Geocoder::from_config(&config)?;
        let enricher = Enricher::from_config(&config)?;

        Ok(Self::new(config, features, geocoder, enricher))
    }

    /// Time since the state was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
