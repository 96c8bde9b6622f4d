//! Interoperability with the [`geo_types`](::geo_types) crate.
//!
//! `geo_types` geometries are two-dimensional, so the `z` coordinate is dropped when converting into them, and
//! geometries converted from them always have rank 2.

use ::geo_types::{Coord, LineString};

use crate::adapter::GeometryAdapter;
use crate::point::Point;

mod convert;

/// [`GeometryAdapter`] producing `geo_types` geometries with `f64` coordinates.
///
/// ```
/// use karta_types::{GeoTypesAdapter, Polygon, ToExternal};
///
/// let square = Polygon::from_coords([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]).unwrap();
/// let converted = square.to_external(Some(&GeoTypesAdapter)).unwrap();
/// assert_eq!(converted.exterior().0.len(), 5);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeoTypesAdapter;

fn coord(point: &Point) -> Coord<f64> {
    Coord {
        x: point.x(),
        y: point.y(),
    }
}

impl GeometryAdapter for GeoTypesAdapter {
    type Point = ::geo_types::Point<f64>;
    type LineString = LineString<f64>;
    type Polygon = ::geo_types::Polygon<f64>;

    fn point(&self, point: &Point) -> Self::Point {
        ::geo_types::Point(coord(point))
    }

    fn line_string(&self, vertices: &[Point]) -> Self::LineString {
        LineString::new(vertices.iter().map(coord).collect())
    }

    fn polygon(&self, ring: &[Point]) -> Self::Polygon {
        ::geo_types::Polygon::new(self.line_string(ring), vec![])
    }
}
