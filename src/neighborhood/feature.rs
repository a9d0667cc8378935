//! Polygon feature set
//!
//! Loads neighborhood polygons from GeoJSON. The set keeps the source order
//! of the features because resolution is first-match.

use crate::error::{Error, Result};
use crate::neighborhood::containment;
use geojson::{GeoJson, PolygonType};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Polygon boundary with raw GeoJSON positions
///
/// Positions are checked when a containment test runs, not when loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary {
    /// Outer ring followed by optional hole rings
    Polygon(PolygonType),
    MultiPolygon(Vec<PolygonType>),
}

/// One neighborhood polygon with its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborhoodFeature {
    pub title: Option<String>,
    pub description: Option<String>,
    pub boundary: Boundary,
}

impl NeighborhoodFeature {
    pub fn new(title: Option<String>, description: Option<String>, boundary: Boundary) -> Self {
        Self {
            title,
            description,
            boundary,
        }
    }

    /// Convert a GeoJSON feature, or `None` if it has no polygonal geometry
    fn from_geojson(feature: geojson::Feature) -> Option<Self> {
        let boundary = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::Polygon(rings)) => Boundary::Polygon(rings.clone()),
            Some(geojson::Value::MultiPolygon(polygons)) => Boundary::MultiPolygon(polygons.clone()),
            _ => return None,
        };

        let string_property = |key: &str| {
            feature
                .property(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        let title = string_property("title").or_else(|| string_property("name"));
        let description = string_property("description");

        Some(Self::new(title, description, boundary))
    }
}

/// Ordered, read-only collection of neighborhood features
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    features: Vec<NeighborhoodFeature>,
}

impl FeatureSet {
    /// Build a set from features already in resolution order
    pub fn new(features: Vec<NeighborhoodFeature>) -> Self {
        Self { features }
    }

    /// Read and parse a GeoJSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Data(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let set = Self::from_geojson_str(&content)?;
        info!(
            count = set.len(),
            path = %path.display(),
            "Loaded neighborhood features"
        );
        Ok(set)
    }

    /// Parse a GeoJSON `FeatureCollection` or single `Feature`
    ///
    /// Features without Polygon/MultiPolygon geometry are skipped.
    pub fn from_geojson_str(content: &str) -> Result<Self> {
        let geojson: GeoJson = content
            .parse()
            .map_err(|e: geojson::Error| Error::Data(format!("Invalid GeoJSON: {}", e)))?;

        let raw = match geojson {
            GeoJson::FeatureCollection(collection) => collection.features,
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::Geometry(_) => {
                return Err(Error::Data(
                    "Expected a Feature or FeatureCollection, found a bare Geometry".to_string(),
                ))
            }
        };

        let total = raw.len();
        let features: Vec<_> = raw
            .into_iter()
            .filter_map(NeighborhoodFeature::from_geojson)
            .collect();

        if features.len() < total {
            debug!(
                skipped = total - features.len(),
                "Skipped features without polygon geometry"
            );
        }

        Ok(Self { features })
    }

    /// Iterate features in resolution order
    pub fn iter(&self) -> std::slice::Iter<'_, NeighborhoodFeature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Check every boundary, returning the index and error of each bad one
    pub fn validate(&self) -> Vec<(usize, Error)> {
        self.features
            .iter()
            .enumerate()
            .filter_map(|(i, f)| containment::check_boundary(&f.boundary).err().map(|e| (i, e)))
            .collect()
    }

    /// Log every malformed feature without failing
    pub fn warn_invalid(&self) -> usize {
        let invalid = self.validate();
        for (index, err) in &invalid {
            let title = self.features[*index].title.as_deref().unwrap_or("<untitled>");
            warn!(index, title, "Malformed neighborhood geometry: {}", err);
        }
        invalid.len()
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = &'a NeighborhoodFeature;
    type IntoIter = std::slice::Iter<'a, NeighborhoodFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "title": "Riverside", "description": "city: Metropolis" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "name": "Old Town" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[2, 2], [3, 2], [3, 3], [2, 2]]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "title": "A pin" },
                "geometry": { "type": "Point", "coordinates": [0.5, 0.5] }
            },
            {
                "type": "Feature",
                "properties": { "title": "Nowhere" },
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let set = FeatureSet::from_geojson_str(SAMPLE).unwrap();
        assert_eq!(set.len(), 2);

        let first = set.iter().next().unwrap();
        assert_eq!(first.title.as_deref(), Some("Riverside"));
        assert_eq!(first.description.as_deref(), Some("city: Metropolis"));
        assert!(matches!(first.boundary, Boundary::Polygon(_)));
    }

    #[test]
    fn test_name_fallback_and_order() {
        let set = FeatureSet::from_geojson_str(SAMPLE).unwrap();
        let titles: Vec<_> = set.iter().map(|f| f.title.as_deref()).collect();

        assert_eq!(titles, vec![Some("Riverside"), Some("Old Town")]);
        assert!(matches!(set.iter().nth(1).unwrap().boundary, Boundary::MultiPolygon(_)));
    }

    #[test]
    fn test_single_feature() {
        let json = r#"{
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]] }
        }"#;
        let set = FeatureSet::from_geojson_str(json).unwrap();

        assert_eq!(set.len(), 1);
        assert!(set.iter().next().unwrap().title.is_none());
    }

    #[test]
    fn test_bare_geometry_rejected() {
        let json = r#"{ "type": "Point", "coordinates": [0, 0] }"#;
        assert!(matches!(FeatureSet::from_geojson_str(json), Err(Error::Data(_))));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(FeatureSet::from_geojson_str("not json"), Err(Error::Data(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let set = FeatureSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            FeatureSet::load("/nonexistent/map.geojson"),
            Err(Error::Data(_))
        ));
    }

    #[test]
    fn test_validate_reports_bad_features() {
        let set = FeatureSet::new(vec![
            NeighborhoodFeature::new(
                Some("ok".to_string()),
                None,
                Boundary::Polygon(vec![vec![
                    vec![0.0, 0.0],
                    vec![1.0, 0.0],
                    vec![1.0, 1.0],
                    vec![0.0, 0.0],
                ]]),
            ),
            NeighborhoodFeature::new(
                Some("sliver".to_string()),
                None,
                Boundary::Polygon(vec![vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![0.0, 0.0]]]),
            ),
        ]);

        let invalid = set.validate();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].0, 1);
        assert_eq!(set.warn_invalid(), 1);
    }
}
