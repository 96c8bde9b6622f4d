use std::f64::consts::{FRAC_PI_2, PI};

use approx::AbsDiffEq;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::cartesian::walk;
use crate::error::{KartaTypesError, Result};

/// Reference surface used to measure directions between points.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    /// Flat cartesian plane.
    #[default]
    Planar,
    /// Sphere. Directions on a sphere are not implemented yet.
    Spherical,
}

/// A point with `x`, `y` and an optional `z` coordinate.
///
/// The rank of the point is 2 when it has no vertical component and 3 otherwise. Since the rank is derived from the
/// presence of `z`, it cannot change independently of the coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z: Option<f64>,
}

impl Point {
    /// Creates a new rank 2 point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a new rank 3 point.
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Creates a point from a slice of 2 or 3 coordinates.
    ///
    /// ```
    /// use karta_types::Point;
    ///
    /// let point = Point::from_coords(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(point.rank(), 3);
    /// assert!(Point::from_coords(&[1.0]).is_err());
    /// ```
    pub fn from_coords(coords: &[f64]) -> Result<Self> {
        match *coords {
            [x, y] => Ok(Self::new(x, y)),
            [x, y, z] => Ok(Self::new_3d(x, y, z)),
            _ => Err(KartaTypesError::InvalidRank { rank: coords.len() }),
        }
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Vertical coordinate, if the point has one.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Number of coordinates of the point: 2 or 3.
    pub fn rank(&self) -> usize {
        if self.z.is_some() {
            3
        } else {
            2
        }
    }

    /// Coordinates of the point, `rank` values long.
    pub fn coords(&self) -> Vec<f64> {
        match self.z {
            Some(z) => vec![self.x, self.y, z],
            None => vec![self.x, self.y],
        }
    }

    /// Horizontal projection of the point.
    pub fn xy(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Distance to the `other` point in the horizontal plane.
    pub fn planar_distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Cartesian distance to the `other` point.
    ///
    /// If both points have a vertical component, the distance is measured in 3d, otherwise in the horizontal plane.
    pub fn distance(&self, other: &Point) -> f64 {
        match (self.z, other.z) {
            (Some(z1), Some(z2)) => {
                let dx = other.x - self.x;
                let dy = other.y - self.y;
                let dz = z2 - z1;
                (dx * dx + dy * dy + dz * dz).sqrt()
            }
            _ => self.planar_distance(other),
        }
    }

    /// Horizontal direction from `self` to `other` in radians, measured clockwise from the positive `y` axis.
    ///
    /// Returns `None` if the points have equal `x` and `y`. The result lies in `[-π/2, 3π/2)`. See
    /// [`Point::azimuth`] for the vertical direction.
    pub fn bearing(&self, other: &Point) -> Option<f64> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;

        if dx == 0.0 {
            return if dy > 0.0 {
                Some(0.0)
            } else if dy < 0.0 {
                Some(PI)
            } else {
                None
            };
        }

        // dy == 0 divides into a signed infinity, giving ±π/2.
        let angle = (dx / dy).atan();
        if dy < 0.0 {
            Some(angle + PI)
        } else {
            Some(angle)
        }
    }

    /// Same as [`Point::bearing`], but on the given reference `surface`.
    pub fn bearing_on(&self, other: &Point, surface: Surface) -> Result<Option<f64>> {
        match surface {
            Surface::Planar => Ok(self.bearing(other)),
            Surface::Spherical => Err(KartaTypesError::Unimplemented {
                operation: "spherical bearing",
            }),
        }
    }

    /// Vertical angle from `self` to `other` in radians, positive when `other` is higher.
    ///
    /// Both points must be of rank 3. Returns `None` if the points are coincident.
    pub fn azimuth(&self, other: &Point) -> Result<Option<f64>> {
        let (Some(z1), Some(z2)) = (self.z, other.z) else {
            return Err(KartaTypesError::Dimension {
                operation: "azimuth",
            });
        };

        let flat = self.planar_distance(other);
        let dz = z2 - z1;

        if flat == 0.0 {
            return Ok(if dz > 0.0 {
                Some(FRAC_PI_2)
            } else if dz < 0.0 {
                Some(-FRAC_PI_2)
            } else {
                None
            });
        }

        Ok(Some((dz / flat).atan()))
    }

    /// Same as [`Point::azimuth`], but on the given reference `surface`.
    pub fn azimuth_on(&self, other: &Point, surface: Surface) -> Result<Option<f64>> {
        match surface {
            Surface::Planar => self.azimuth(other),
            Surface::Spherical => Err(KartaTypesError::Unimplemented {
                operation: "spherical azimuth",
            }),
        }
    }

    /// Moves the point by `vector` in place. The vector must have `rank` components.
    pub fn shift(&mut self, vector: &[f64]) -> Result<()> {
        if vector.len() != self.rank() {
            return Err(KartaTypesError::ShiftLength {
                expected: self.rank(),
                found: vector.len(),
            });
        }

        self.x += vector[0];
        self.y += vector[1];
        if let Some(z) = self.z.as_mut() {
            *z += vector[2];
        }

        Ok(())
    }

    /// Returns a copy of the point moved by `vector`.
    pub fn shifted(&self, vector: &[f64]) -> Result<Self> {
        let mut moved = *self;
        moved.shift(vector)?;
        Ok(moved)
    }

    /// Point reached by moving `distance` from this point in the direction given by `bearing` and `azimuth`.
    ///
    /// See [`walk`] for details.
    pub fn walk(&self, distance: f64, bearing: f64, azimuth: f64) -> Point {
        walk(self, distance, bearing, azimuth)
    }
}

impl From<Point2<f64>> for Point {
    fn from(value: Point2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let z_eq = match (self.z, other.z) {
            (Some(z1), Some(z2)) => z1.abs_diff_eq(&z2, epsilon),
            (None, None) => true,
            _ => false,
        };

        z_eq && self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
