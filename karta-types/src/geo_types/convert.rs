use ::geo_types::{Coord, LineString};

use crate::error::{KartaTypesError, Result};
use crate::point::Point;
use crate::polygon::Polygon;
use crate::polyline::Polyline;

impl From<Coord<f64>> for Point {
    fn from(value: Coord<f64>) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<::geo_types::Point<f64>> for Point {
    fn from(value: ::geo_types::Point<f64>) -> Self {
        value.0.into()
    }
}

impl TryFrom<&LineString<f64>> for Polyline {
    type Error = KartaTypesError;

    fn try_from(value: &LineString<f64>) -> Result<Self> {
        Polyline::new(value.0.iter().copied().map(Point::from).collect())
    }
}

impl TryFrom<&::geo_types::Polygon<f64>> for Polygon {
    type Error = KartaTypesError;

    /// Converts the exterior ring of the polygon. Holes are not supported and are dropped.
    fn try_from(value: &::geo_types::Polygon<f64>) -> Result<Self> {
        if !value.interiors().is_empty() {
            log::warn!(
                "Dropping {} interior rings of a geo-types polygon",
                value.interiors().len()
            );
        }

        Polygon::new(value.exterior().0.iter().copied().map(Point::from).collect())
    }
}
