//! End-to-end lookup
//!
//! Geocodes when needed, resolves the neighborhood, then optionally asks the
//! enrichment stores for records. Shared by the HTTP handlers and the CLI.

use crate::coord::Coordinates;
use crate::enrich::{Enricher, Enrichment, EnrichmentKey};
use crate::error::{Error, Result};
use crate::geo::{GeoBackend, GeoLocation};
use crate::neighborhood::{resolve_feature, FeatureSet, Labels, ResolutionResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What to resolve
#[derive(Debug, Clone, PartialEq)]
pub enum LookupQuery {
    /// Free-text address, geocoded first
    Address(String),
    Coordinates(Coordinates),
}

/// Resolution result plus what surrounded it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(flatten)]
    pub result: ResolutionResult,

    /// Geocoder match, for address queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,

    /// Present when a polygon matched and a store is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<Enrichment>,
}

/// Borrowed pieces a lookup needs
pub struct Lookup<'a, G: GeoBackend> {
    pub features: &'a FeatureSet,
    pub labels: &'a Labels,
    pub geocoder: &'a G,
    pub enricher: Option<&'a Enricher>,
}

impl<G: GeoBackend> Lookup<'_, G> {
    /// Run one query
    ///
    /// Fails with [`Error::AddressNotFound`] when the geocoder has no match.
    pub async fn run(&self, query: LookupQuery) -> Result<LookupResponse> {
        let (point, location) = match query {
            LookupQuery::Coordinates(point) => (point, None),
            LookupQuery::Address(address) => {
                let location = self
                    .geocoder
                    .geocode(&address)
                    .await?
                    .ok_or_else(|| Error::AddressNotFound(address.clone()))?;
                debug!(address = %address, name = %location.display_name, "Geocoded address");
                (location.coordinates(), Some(location))
            }
        };
        point.validate()?;

        let matched = resolve_feature(point, self.features)?;
        let result = match matched {
            Some(feature) => ResolutionResult::from_feature(feature, self.labels),
            None => ResolutionResult::not_found(self.labels),
        };
        info!(point = %point, title = %result.title, found = matched.is_some(), "Resolved neighborhood");

        let enrichment = match self.enricher {
            Some(enricher) if matched.is_some() && enricher.is_enabled() => Some(
                enricher
                    .enrich(&EnrichmentKey::new(&result.title, &result.city))
                    .await,
            ),
            _ => None,
        };

        Ok(LookupResponse {
            result,
            location,
            enrichment,
        })
    }
}
