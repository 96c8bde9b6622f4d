//! Conversion of geometries into types of other geometry libraries.
//!
//! The target library is represented by a [`GeometryAdapter`] that is passed to the conversion call. If no adapter is
//! given, the conversion fails with [`KartaTypesError::ConversionUnavailable`]. With the `geo-types` feature enabled,
//! [`GeoTypesAdapter`](crate::GeoTypesAdapter) converts into [`geo_types`](https://docs.rs/geo-types) geometries.

use crate::error::{KartaTypesError, Result};
use crate::multipoint::Multipoint;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::polyline::Polyline;

/// Builder of geometries of an external library.
pub trait GeometryAdapter {
    /// External point type.
    type Point;
    /// External open line type.
    type LineString;
    /// External polygon type.
    type Polygon;

    /// Converts a point.
    fn point(&self, point: &Point) -> Self::Point;
    /// Converts a sequence of vertices into a line.
    fn line_string(&self, vertices: &[Point]) -> Self::LineString;
    /// Converts a closed ring of vertices into a polygon.
    fn polygon(&self, ring: &[Point]) -> Self::Polygon;
}

/// Conversion into an external geometry using a [`GeometryAdapter`].
pub trait ToExternal<A: GeometryAdapter + ?Sized> {
    /// External geometry type.
    type Output;

    /// Converts `self` with the given `adapter`. Fails if the adapter is `None`.
    fn to_external(&self, adapter: Option<&A>) -> Result<Self::Output>;
}

fn require<'a, A: ?Sized>(adapter: Option<&'a A>, target: &'static str) -> Result<&'a A> {
    adapter.ok_or(KartaTypesError::ConversionUnavailable { target })
}

impl<A: GeometryAdapter + ?Sized> ToExternal<A> for Point {
    type Output = A::Point;

    fn to_external(&self, adapter: Option<&A>) -> Result<A::Point> {
        Ok(require(adapter, "point")?.point(self))
    }
}

impl<A: GeometryAdapter + ?Sized> ToExternal<A> for Polyline {
    type Output = A::LineString;

    fn to_external(&self, adapter: Option<&A>) -> Result<A::LineString> {
        Ok(require(adapter, "line string")?.line_string(self.vertices()))
    }
}

impl<A: GeometryAdapter + ?Sized> ToExternal<A> for Polygon {
    type Output = A::Polygon;

    fn to_external(&self, adapter: Option<&A>) -> Result<A::Polygon> {
        Ok(require(adapter, "polygon")?.polygon(self.vertices()))
    }
}
