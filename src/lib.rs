//! hood-resolver: Neighborhood Resolver
//!
//! A library and CLI tool that maps an address or coordinate to the
//! neighborhood polygon containing it, using a static GeoJSON file whose
//! feature descriptions carry `city`, `province_state` and `country` lines.
//!
//! ## Features
//!
//! - First-match point-in-polygon resolution over an ordered feature set
//! - Description field parsing with configurable fallback labels
//! - Mapbox or Nominatim geocoding for free-text addresses
//! - Optional Webflow CMS and Supabase enrichment with partial results
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use hood_resolver::coord::Coordinates;
//! use hood_resolver::neighborhood::{resolve, FeatureSet};
//!
//! let geojson = r#"{
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "properties": { "title": "Riverside", "description": "city: Metropolis" },
//!         "geometry": {
//!             "type": "Polygon",
//!             "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
//!         }
//!     }]
//! }"#;
//!
//! let features = FeatureSet::from_geojson_str(geojson).unwrap();
//! let result = resolve(Coordinates::new(0.5, 0.5), &features).unwrap();
//! assert_eq!(result.title, "Riverside");
//! assert_eq!(result.city, "Metropolis");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod enrich;
pub mod error;
pub mod format;
pub mod geo;
mod http;
pub mod lookup;
pub mod neighborhood;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use neighborhood::{FeatureSet, Labels, ResolutionResult};
