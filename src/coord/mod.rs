//! Geographic coordinates
//!
//! Coordinates are WGS84 degrees, longitude first, matching GeoJSON
//! position order. No reprojection is performed anywhere in the crate.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (longitude, latitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinates {
    /// Create new coordinates, longitude first
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Validate that coordinates are finite and within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// `[lng, lat]`, as found in GeoJSON and in request bodies
impl From<[f64; 2]> for Coordinates {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self::new(lng, lat)
    }
}

impl From<Coordinates> for geo::Coord<f64> {
    fn from(c: Coordinates) -> Self {
        geo::Coord { x: c.lng, y: c.lat }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lng, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_is_longitude_first() {
        let c = Coordinates::from([-79.38, 43.65]);
        assert_eq!(c.lng, -79.38);
        assert_eq!(c.lat, 43.65);
    }

    #[test]
    fn test_validate_ranges() {
        assert!(Coordinates::new(-79.38, 43.65).validate().is_ok());
        assert!(Coordinates::new(180.0, -90.0).validate().is_ok());
        assert!(Coordinates::new(0.0, 91.0).validate().is_err());
        assert!(Coordinates::new(-181.0, 0.0).validate().is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_into_geo_coord() {
        let coord: geo::Coord<f64> = Coordinates::new(1.5, 2.5).into();
        assert_eq!(coord.x, 1.5);
        assert_eq!(coord.y, 2.5);
    }
}
