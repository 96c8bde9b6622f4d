use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{KartaTypesError, Result};
use crate::point::Point;

/// Radius of the sphere used for great circle distances, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Unit of the longitude (`x`) and latitude (`y`) coordinates of the input points.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngularUnit {
    /// Degrees.
    #[default]
    Degrees,
    /// Radians.
    Radians,
}

impl AngularUnit {
    /// Converts a value in this unit into radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngularUnit::Degrees => value.to_radians(),
            AngularUnit::Radians => value,
        }
    }
}

impl FromStr for AngularUnit {
    type Err = KartaTypesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "deg" | "degrees" => Ok(Self::Degrees),
            "rad" | "radians" => Ok(Self::Radians),
            _ => Err(KartaTypesError::UnknownOption {
                kind: "angular unit",
                value: s.to_string(),
            }),
        }
    }
}

/// Unit of the returned distances.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceUnit {
    /// Kilometers.
    #[default]
    Kilometers,
    /// Meters.
    Meters,
    /// Statute miles.
    Miles,
    /// Feet.
    Feet,
    /// Nautical miles.
    NauticalMiles,
}

impl SpaceUnit {
    /// Number of units in one kilometer.
    pub fn per_kilometer(self) -> f64 {
        match self {
            SpaceUnit::Kilometers => 1.0,
            SpaceUnit::Meters => 1000.0,
            SpaceUnit::Miles => 0.6213712,
            SpaceUnit::Feet => 3280.840,
            SpaceUnit::NauticalMiles => 0.5399568,
        }
    }
}

impl FromStr for SpaceUnit {
    type Err = KartaTypesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "km" => Ok(Self::Kilometers),
            "m" => Ok(Self::Meters),
            "mi" => Ok(Self::Miles),
            "ft" => Ok(Self::Feet),
            "nm" | "nmi" => Ok(Self::NauticalMiles),
            _ => Err(KartaTypesError::UnknownOption {
                kind: "space unit",
                value: s.to_string(),
            }),
        }
    }
}

/// Formula used to compute the central angle between two points on the sphere.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceMethod {
    /// Vincenty formula for the sphere. Numerically stable for all point pairs, including antipodal ones.
    #[default]
    Vincenty,
    /// Haversine formula. Uses fewer operations than Vincenty, but loses precision for nearly antipodal points.
    Haversine,
}

impl DistanceMethod {
    /// Central angle in radians between two points given as `(longitude, latitude)` in radians.
    pub fn central_angle(self, from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lon1, lat1) = from;
        let (lon2, lat2) = to;
        let dlon = lon2 - lon1;
        let dlat = lat2 - lat1;

        match self {
            DistanceMethod::Vincenty => {
                let a = (lat2.cos() * dlon.sin()).powi(2)
                    + (lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos()).powi(2);
                let b = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
                a.sqrt().atan2(b)
            }
            DistanceMethod::Haversine => {
                let h = (dlat / 2.0).sin().powi(2)
                    + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
                2.0 * h.sqrt().min(1.0).asin()
            }
        }
    }
}

impl FromStr for DistanceMethod {
    type Err = KartaTypesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vincenty" | "vicenty" => Ok(Self::Vincenty),
            "haversine" => Ok(Self::Haversine),
            _ => Err(KartaTypesError::UnknownOption {
                kind: "distance method",
                value: s.to_string(),
            }),
        }
    }
}

/// Great circle distance between two points. `x` of the points is the longitude, `y` is the latitude.
pub fn great_circle_distance(
    from: &Point,
    to: &Point,
    angular_unit: AngularUnit,
    space_unit: SpaceUnit,
    method: DistanceMethod,
) -> f64 {
    let from = (angular_unit.to_radians(from.x()), angular_unit.to_radians(from.y()));
    let to = (angular_unit.to_radians(to.x()), angular_unit.to_radians(to.y()));
    method.central_angle(from, to) * EARTH_RADIUS_KM * space_unit.per_kilometer()
}

/// Great circle distances between each pair of consecutive points. Returns one value less than the number of points.
///
/// ```
/// use karta_types::geo::{great_circle_distances, AngularUnit, DistanceMethod, SpaceUnit};
/// use karta_types::Point;
///
/// let distances = great_circle_distances(
///     &[Point::new(0.0, 0.0), Point::new(0.0, 90.0)],
///     AngularUnit::Degrees,
///     SpaceUnit::Kilometers,
///     DistanceMethod::Vincenty,
/// );
/// assert!((distances[0] - 10007.5).abs() < 0.1);
/// ```
pub fn great_circle_distances(
    points: &[Point],
    angular_unit: AngularUnit,
    space_unit: SpaceUnit,
    method: DistanceMethod,
) -> Vec<f64> {
    points
        .windows(2)
        .map(|pair| great_circle_distance(&pair[0], &pair[1], angular_unit, space_unit, method))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn km(points: &[Point], method: DistanceMethod) -> Vec<f64> {
        great_circle_distances(points, AngularUnit::Degrees, SpaceUnit::Kilometers, method)
    }

    #[test]
    fn equator_to_pole() {
        let points = [Point::new(0.0, 0.0), Point::new(0.0, 90.0)];
        let expected = FRAC_PI_2 * EARTH_RADIUS_KM;

        assert_abs_diff_eq!(km(&points, DistanceMethod::Vincenty)[0], expected, epsilon = 1e-6);
        assert_abs_diff_eq!(km(&points, DistanceMethod::Haversine)[0], expected, epsilon = 1e-6);
    }

    #[test]
    fn returns_one_less_than_points() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 10.0),
        ];
        let distances = km(&points, DistanceMethod::Vincenty);
        assert_eq!(distances.len(), 3);
        assert_abs_diff_eq!(distances[0], 10f64.to_radians() * EARTH_RADIUS_KM, epsilon = 1e-6);
        assert_abs_diff_eq!(distances[1], 10f64.to_radians() * EARTH_RADIUS_KM, epsilon = 1e-6);
        assert_eq!(distances[2], 0.0);

        assert!(km(&points[..1], DistanceMethod::Vincenty).is_empty());
        assert!(km(&[], DistanceMethod::Vincenty).is_empty());
    }

    #[test]
    fn methods_agree_away_from_antipodes() {
        let points = [
            Point::new(-122.4, 37.8),
            Point::new(2.35, 48.86),
            Point::new(139.7, 35.7),
            Point::new(151.2, -33.9),
        ];
        let vincenty = km(&points, DistanceMethod::Vincenty);
        let haversine = km(&points, DistanceMethod::Haversine);
        for (v, h) in vincenty.iter().zip(&haversine) {
            assert_abs_diff_eq!(*v, *h, epsilon = 1e-6);
        }
    }

    #[test]
    fn antipodal_points() {
        let points = [Point::new(0.0, 0.0), Point::new(180.0, 0.0)];
        assert_abs_diff_eq!(
            km(&points, DistanceMethod::Vincenty)[0],
            PI * EARTH_RADIUS_KM,
            epsilon = 1e-6
        );
        assert!(!km(&points, DistanceMethod::Haversine)[0].is_nan());
    }

    #[test]
    fn radians_input() {
        let points = [Point::new(0.0, 0.0), Point::new(FRAC_PI_2, 0.0)];
        let distances = great_circle_distances(
            &points,
            AngularUnit::Radians,
            SpaceUnit::Kilometers,
            DistanceMethod::Vincenty,
        );
        assert_abs_diff_eq!(distances[0], FRAC_PI_2 * EARTH_RADIUS_KM, epsilon = 1e-6);
    }

    #[test]
    fn space_units() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(1.0, 1.0);
        let base = great_circle_distance(
            &from,
            &to,
            AngularUnit::Degrees,
            SpaceUnit::Kilometers,
            DistanceMethod::Vincenty,
        );

        for (unit, factor) in [
            (SpaceUnit::Meters, 1000.0),
            (SpaceUnit::Miles, 0.6213712),
            (SpaceUnit::Feet, 3280.840),
            (SpaceUnit::NauticalMiles, 0.5399568),
        ] {
            let value =
                great_circle_distance(&from, &to, AngularUnit::Degrees, unit, DistanceMethod::Vincenty);
            assert_abs_diff_eq!(value, base * factor, epsilon = 1e-6);
        }
    }

    #[test]
    fn parse_options() {
        assert_eq!("deg".parse::<AngularUnit>(), Ok(AngularUnit::Degrees));
        assert_eq!("rad".parse::<AngularUnit>(), Ok(AngularUnit::Radians));
        assert_eq!("nm".parse::<SpaceUnit>(), Ok(SpaceUnit::NauticalMiles));
        assert_eq!("ft".parse::<SpaceUnit>(), Ok(SpaceUnit::Feet));
        assert_eq!("haversine".parse::<DistanceMethod>(), Ok(DistanceMethod::Haversine));
        assert_eq!("vincenty".parse::<DistanceMethod>(), Ok(DistanceMethod::Vincenty));

        assert_matches!(
            "grad".parse::<AngularUnit>(),
            Err(KartaTypesError::UnknownOption {
                kind: "angular unit",
                ..
            })
        );
        assert_matches!(
            "furlong".parse::<SpaceUnit>(),
            Err(KartaTypesError::UnknownOption { kind: "space unit", .. })
        );
        assert_matches!(
            "euclid".parse::<DistanceMethod>(),
            Err(KartaTypesError::UnknownOption {
                kind: "distance method",
                ..
            })
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(AngularUnit::default(), AngularUnit::Degrees);
        assert_eq!(SpaceUnit::default(), SpaceUnit::Kilometers);
        assert_eq!(DistanceMethod::default(), DistanceMethod::Vincenty);
    }
}
