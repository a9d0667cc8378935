//! Mapbox Places geocoding backend
//!
//! Requires an access token. The best match is `features[0]`, whose
//! `center` is `[lng, lat]`.

use crate::error::{Error, Result};
use crate::geo::{GeoBackend, GeoLocation};
use serde::Deserialize;
use tracing::debug;

/// Mapbox geocoding backend
#[derive(Clone)]
pub struct MapboxBackend {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl std::fmt::Debug for MapboxBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxBackend")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Mapbox forward geocoding response
#[derive(Debug, Deserialize)]
struct MapboxResponse {
    #[serde(default)]
    features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize)]
struct MapboxFeature {
    center: [f64; 2],
    #[serde(default)]
    place_name: Option<String>,
}

impl MapboxBackend {
    /// Create a new Mapbox backend against `base_url`
    pub fn new(base_url: &str, access_token: &str) -> Result<Self> {
        let client = crate::http::client()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/{}.json?limit=1&access_token={}",
            self.base_url,
            urlencoding::encode(query),
            urlencoding::encode(&self.access_token)
        )
    }

    fn parse_response(response: MapboxResponse) -> Option<GeoLocation> {
        let feature = response.features.into_iter().next()?;
        let [lng, lat] = feature.center;

        Some(GeoLocation {
            lat,
            lng,
            display_name: feature.place_name.unwrap_or_default(),
        })
    }
}

impl GeoBackend for MapboxBackend {
    fn name(&self) -> &'static str {
        "mapbox"
    }

    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>> {
        debug!(query, "Mapbox search");

        let response = self
            .client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Mapbox request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "Mapbox returned status: {}",
                response.status()
            )));
        }

        let body: MapboxResponse = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Mapbox response: {}", e)))?;

        Ok(Self::parse_response(body))
    }
}
