//! Point-in-polygon containment
//!
//! Rings are converted from raw GeoJSON positions on every test, which is
//! also where malformed geometry is detected. Classification is delegated
//! to `geo`'s `CoordinatePosition`.
//!
//! Boundary rule: a point on any ring edge or vertex is contained. This
//! includes the edges of holes, so a point on a hole's rim is still inside
//! the polygon.

use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::neighborhood::Boundary;
use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Coord, LineString, Polygon};
use geojson::{PolygonType, Position};

/// Minimum number of distinct vertices in a ring
const MIN_RING_VERTICES: usize = 3;

/// Test whether `point` lies inside `boundary`
///
/// Fails with [`Error::Geometry`] if any ring is malformed, even when an
/// earlier polygon of a multi-polygon already contains the point.
pub fn contains(boundary: &Boundary, point: Coordinates) -> Result<bool> {
    let coord: Coord<f64> = point.into();
    let polygons = to_polygons(boundary)?;

    Ok(polygons
        .iter()
        .any(|polygon| polygon.coordinate_position(&coord) != CoordPos::Outside))
}

/// Check a boundary for malformed rings without testing a point
pub fn check_boundary(boundary: &Boundary) -> Result<()> {
    to_polygons(boundary).map(|_| ())
}

fn to_polygons(boundary: &Boundary) -> Result<Vec<Polygon<f64>>> {
    match boundary {
        Boundary::Polygon(rings) => Ok(vec![to_polygon(rings)?]),
        Boundary::MultiPolygon(polygons) => {
            if polygons.is_empty() {
                return Err(Error::Geometry("MultiPolygon has no polygons".to_string()));
            }
            polygons.iter().map(|rings| to_polygon(rings)).collect()
        }
    }
}

fn to_polygon(rings: &PolygonType) -> Result<Polygon<f64>> {
    let (exterior, holes) = rings
        .split_first()
        .ok_or_else(|| Error::Geometry("Polygon has no rings".to_string()))?;

    let exterior = to_ring(exterior)?;
    let holes = holes.iter().map(|r| to_ring(r)).collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, holes))
}

fn to_ring(positions: &[Position]) -> Result<LineString<f64>> {
    let mut coords = positions
        .iter()
        .map(|p| to_coord(p))
        .collect::<Result<Vec<_>>>()?;

    // GeoJSON rings repeat the first vertex at the end
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }

    let distinct = distinct_vertices(&coords);
    if distinct < MIN_RING_VERTICES {
        return Err(Error::Geometry(format!(
            "Ring has {} distinct vertices, need at least {}",
            distinct, MIN_RING_VERTICES
        )));
    }

    // Polygon::new closes the ring again
    Ok(LineString::from(coords))
}

/// Count distinct vertices, stopping once the minimum is reached
fn distinct_vertices(coords: &[Coord<f64>]) -> usize {
    let mut seen: Vec<Coord<f64>> = Vec::with_capacity(MIN_RING_VERTICES);
    for coord in coords {
        if !seen.contains(coord) {
            seen.push(*coord);
            if seen.len() == MIN_RING_VERTICES {
                break;
            }
        }
    }
    seen.len()
}

fn to_coord(position: &Position) -> Result<Coord<f64>> {
    match position.as_slice() {
        [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Coord { x: *x, y: *y }),
        [_, _, ..] => Err(Error::Geometry(format!(
            "Non-numeric position {:?}",
            position
        ))),
        _ => Err(Error::Geometry(format!(
            "Position needs at least 2 values, got {}",
            position.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Vec<Position> {
        points.iter().map(|&(x, y)| vec![x, y]).collect()
    }

    fn square(min: f64, max: f64) -> Vec<Position> {
        ring(&[(min, min), (max, min), (max, max), (min, max), (min, min)])
    }

    fn unit_square() -> Boundary {
        Boundary::Polygon(vec![square(0.0, 1.0)])
    }

    #[test]
    fn test_points_strictly_inside() {
        let b = unit_square();
        for &(x, y) in &[(0.5, 0.5), (0.01, 0.01), (0.99, 0.5), (0.25, 0.75)] {
            assert!(contains(&b, Coordinates::new(x, y)).unwrap(), "({x}, {y})");
        }
    }

    #[test]
    fn test_points_outside_bounding_box() {
        let b = unit_square();
        for &(x, y) in &[(5.0, 5.0), (-0.01, 0.5), (0.5, 1.01), (-3.0, -3.0)] {
            assert!(!contains(&b, Coordinates::new(x, y)).unwrap(), "({x}, {y})");
        }
    }

    #[test]
    fn test_concave_polygon() {
        // U shape opening upwards
        let b = Boundary::Polygon(vec![ring(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
            (0.0, 0.0),
        ])]);

        assert!(contains(&b, Coordinates::new(0.5, 2.0)).unwrap());
        assert!(!contains(&b, Coordinates::new(1.5, 2.0)).unwrap());
    }

    #[test]
    fn test_boundary_points_are_contained() {
        let b = unit_square();
        assert!(contains(&b, Coordinates::new(0.0, 0.5)).unwrap());
        assert!(contains(&b, Coordinates::new(1.0, 1.0)).unwrap());
        assert!(contains(&b, Coordinates::new(0.5, 0.0)).unwrap());
    }

    #[test]
    fn test_holes_exclude_interior() {
        let b = Boundary::Polygon(vec![square(0.0, 10.0), square(4.0, 6.0)]);

        assert!(contains(&b, Coordinates::new(1.0, 1.0)).unwrap());
        assert!(!contains(&b, Coordinates::new(5.0, 5.0)).unwrap());
        // on the rim of the hole
        assert!(contains(&b, Coordinates::new(4.0, 5.0)).unwrap());
    }

    #[test]
    fn test_unclosed_ring_accepted() {
        let b = Boundary::Polygon(vec![ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])]);
        assert!(contains(&b, Coordinates::new(0.5, 0.5)).unwrap());
    }

    #[test]
    fn test_multipolygon_any_member() {
        let b = Boundary::MultiPolygon(vec![vec![square(0.0, 1.0)], vec![square(5.0, 6.0)]]);

        assert!(contains(&b, Coordinates::new(5.5, 5.5)).unwrap());
        assert!(!contains(&b, Coordinates::new(3.0, 3.0)).unwrap());
    }

    #[test]
    fn test_short_ring_is_error() {
        let b = Boundary::Polygon(vec![ring(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)])]);
        assert!(matches!(
            contains(&b, Coordinates::new(0.5, 0.5)),
            Err(Error::Geometry(_))
        ));
    }

    #[test]
    fn test_repeated_vertices_are_not_distinct() {
        // Five positions tracing a line segment back and forth
        let b = Boundary::Polygon(vec![ring(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (0.0, 0.0)])]);
        assert!(matches!(
            contains(&b, Coordinates::new(0.5, 0.5)),
            Err(Error::Geometry(_))
        ));
        assert!(check_boundary(&b).is_err());
    }

    #[test]
    fn test_doubled_vertex_ring_is_error() {
        let sliver = Boundary::Polygon(vec![ring(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (0.0, 0.0)])]);
        assert!(contains(&sliver, Coordinates::new(0.5, 0.5)).is_err());
        assert!(contains(&unit_square(), Coordinates::new(0.5, 0.5)).unwrap());
    }

    #[test]
    fn test_short_position_is_error() {
        let b = Boundary::Polygon(vec![vec![vec![0.0, 0.0], vec![1.0], vec![1.0, 1.0], vec![0.0, 1.0]]]);
        assert!(matches!(
            contains(&b, Coordinates::new(0.5, 0.5)),
            Err(Error::Geometry(_))
        ));
    }

    #[test]
    fn test_non_finite_position_is_error() {
        let b = Boundary::Polygon(vec![ring(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0), (0.0, 1.0)])]);
        assert!(matches!(
            contains(&b, Coordinates::new(0.5, 0.5)),
            Err(Error::Geometry(_))
        ));
    }

    #[test]
    fn test_empty_polygon_is_error() {
        assert!(check_boundary(&Boundary::Polygon(vec![])).is_err());
        assert!(check_boundary(&Boundary::MultiPolygon(vec![])).is_err());
    }

    #[test]
    fn test_bad_member_fails_even_after_match() {
        let b = Boundary::MultiPolygon(vec![
            vec![square(0.0, 1.0)],
            vec![ring(&[(5.0, 5.0), (6.0, 6.0)])],
        ]);
        assert!(contains(&b, Coordinates::new(0.5, 0.5)).is_err());
    }

    #[test]
    fn test_third_ordinate_ignored() {
        let b = Boundary::Polygon(vec![vec![
            vec![0.0, 0.0, 100.0],
            vec![1.0, 0.0, 100.0],
            vec![1.0, 1.0, 100.0],
            vec![0.0, 1.0, 100.0],
            vec![0.0, 0.0, 100.0],
        ]]);
        assert!(contains(&b, Coordinates::new(0.5, 0.5)).unwrap());
    }
}
