//! Neighborhood resolver
//!
//! Linear, first-match scan over the feature set in source order. When
//! polygons overlap, the one that appears first in the data wins.

use crate::coord::Coordinates;
use crate::error::Result;
use crate::neighborhood::{contains, FeatureSet, Labels, NeighborhoodFeature, ResolutionResult};

/// Find the first feature whose boundary contains `point`
///
/// An empty set resolves to `None`. A malformed boundary met before a match
/// fails the whole call.
pub fn resolve_feature(point: Coordinates, features: &FeatureSet) -> Result<Option<&NeighborhoodFeature>> {
    for feature in features {
        if contains(&feature.boundary, point)? {
            return Ok(Some(feature));
        }
    }
    Ok(None)
}

/// Resolve a point using the default labels
pub fn resolve(point: Coordinates, features: &FeatureSet) -> Result<ResolutionResult> {
    resolve_with_labels(point, features, &Labels::default())
}

/// Resolve a point, using `labels` for anything missing
pub fn resolve_with_labels(
    point: Coordinates,
    features: &FeatureSet,
    labels: &Labels,
) -> Result<ResolutionResult> {
    Ok(match resolve_feature(point, features)? {
        Some(feature) => ResolutionResult::from_feature(feature, labels),
        None => ResolutionResult::not_found(labels),
    })
}
