//! Neighborhood resolution
//!
//! Maps a coordinate to the first polygon in an ordered feature set that
//! contains it, and pulls `city`, `province_state` and `country` out of that
//! polygon's free-text description.
//!
//! Everything in here is synchronous and free of I/O apart from
//! [`FeatureSet::load`], which the surrounding service calls once at startup.

pub mod containment;
pub mod description;
pub mod feature;
pub mod resolver;

pub use containment::contains;
pub use description::{parse_location_fields, parse_location_fields_with, LocationFields};
pub use feature::{Boundary, FeatureSet, NeighborhoodFeature};
pub use resolver::{resolve, resolve_feature, resolve_with_labels};

use crate::constants::labels::*;
use serde::{Deserialize, Serialize};

/// Placeholder strings used when nothing matches or a field is missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_neighborhood")]
    pub neighborhood: String,

    #[serde(default = "default_city")]
    pub city: String,

    #[serde(default = "default_province_state")]
    pub province_state: String,

    #[serde(default = "default_country")]
    pub country: String,
}

fn default_neighborhood() -> String {
    UNKNOWN_NEIGHBORHOOD.to_string()
}
fn default_city() -> String {
    UNKNOWN_CITY.to_string()
}
fn default_province_state() -> String {
    UNKNOWN_PROVINCE_STATE.to_string()
}
fn default_country() -> String {
    UNKNOWN_COUNTRY.to_string()
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            neighborhood: default_neighborhood(),
            city: default_city(),
            province_state: default_province_state(),
            country: default_country(),
        }
    }
}

/// Structured output of resolving one coordinate
///
/// Built fresh for every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub title: String,
    pub city: String,
    pub province_state: String,
    pub country: String,
}

impl ResolutionResult {
    /// The "nothing contains this point" result
    pub fn not_found(labels: &Labels) -> Self {
        Self {
            title: labels.neighborhood.clone(),
            city: labels.city.clone(),
            province_state: labels.province_state.clone(),
            country: labels.country.clone(),
        }
    }

    /// Build a result from a matched feature
    pub fn from_feature(feature: &NeighborhoodFeature, labels: &Labels) -> Self {
        let fields = parse_location_fields_with(feature.description.as_deref(), labels);
        Self {
            title: feature
                .title
                .clone()
                .unwrap_or_else(|| labels.neighborhood.clone()),
            city: fields.city,
            province_state: fields.province_state,
            country: fields.country,
        }
    }
}
