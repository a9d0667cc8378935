//! Geocoding module
//!
//! Turns a free-text address into a coordinate. Two interchangeable
//! providers are supported; the resolver only ever sees the resulting
//! longitude/latitude pair.

pub mod mapbox;
pub mod nominatim;

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geocoded location result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Display name (matched address or place name)
    pub display_name: String,
}

impl GeoLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lng, self.lat)
    }
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Provider name as used in config
    fn name(&self) -> &'static str;

    /// Geocode a location string to coordinates
    ///
    /// Returns the best match for the query, or None if not found
    fn geocode(&self, query: &str) -> impl std::future::Future<Output = Result<Option<GeoLocation>>> + Send;
}

/// Geocoder selected by configuration
#[derive(Debug, Clone)]
pub enum Geocoder {
    Mapbox(mapbox::MapboxBackend),
    Nominatim(nominatim::NominatimBackend),
}

impl Geocoder {
    /// Build the provider named in `config.geocoder.provider`
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.geocoder.provider.to_lowercase().as_str() {
            "mapbox" => {
                if config.api_keys.mapbox.is_empty() {
                    return Err(Error::Config(
                        "Mapbox geocoder selected but api_keys.mapbox is empty".to_string(),
                    ));
                }
                Ok(Self::Mapbox(mapbox::MapboxBackend::new(
                    &config.geocoder.mapbox_url,
                    &config.api_keys.mapbox,
                )?))
            }
            "nominatim" => Ok(Self::Nominatim(nominatim::NominatimBackend::new(
                &config.geocoder.nominatim_url,
            )?)),
            other => Err(Error::Config(format!("Unknown geocoder: {}", other))),
        }
    }
}

impl GeoBackend for Geocoder {
    fn name(&self) -> &'static str {
        match self {
            Self::Mapbox(b) => b.name(),
            Self::Nominatim(b) => b.name(),
        }
    }

    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>> {
        match self {
            Self::Mapbox(b) => b.geocode(query).await,
            Self::Nominatim(b) => b.geocode(query).await,
        }
    }
}

/// List the provider names accepted by `geocoder.provider`
pub fn available_geocoders() -> Vec<&'static str> {
    vec!["mapbox", "nominatim"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_location_serialization() {
        let loc = GeoLocation {
            lat: 43.6532,
            lng: -79.3832,
            display_name: "Toronto, Ontario, Canada".to_string(),
        };

        let json = serde_json::to_string(&loc).unwrap();
        let parsed: GeoLocation = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, loc);
        assert_eq!(parsed.coordinates(), Coordinates::new(-79.3832, 43.6532));
    }

    #[test]
    fn test_from_config_default_is_nominatim() {
        let geocoder = Geocoder::from_config(&Config::default()).unwrap();
        assert_eq!(geocoder.name(), "nominatim");
    }

    #[test]
    fn test_from_config_mapbox_requires_token() {
        let mut config = Config::default();
        config.geocoder.provider = "mapbox".to_string();
        assert!(matches!(Geocoder::from_config(&config), Err(Error::Config(_))));

        config.api_keys.mapbox = "pk.test".to_string();
        assert_eq!(Geocoder::from_config(&config).unwrap().name(), "mapbox");
    }

    #[test]
    fn test_from_config_unknown() {
        let mut config = Config::default();
        config.geocoder.provider = "bing".to_string();
        assert!(Geocoder::from_config(&config).is_err());
    }
}
