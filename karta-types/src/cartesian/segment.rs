use nalgebra::{Point2, Vector2};

use crate::point::Point;

/// A straight line segment between two vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a>(pub &'a Point, pub &'a Point);

impl Segment<'_> {
    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.0.distance(self.1)
    }

    /// Nearest point of the segment to `point` in the horizontal plane, and the distance to it.
    pub fn nearest_to(&self, point: &Point) -> (Point, f64) {
        let (nearest, distance) = nearest_on_segment(point.xy(), self.0.xy(), self.1.xy());
        (nearest.into(), distance)
    }

    /// Point where a ray cast from `origin` in `direction` crosses the segment. See [`ray_intersection`].
    pub fn ray_intersection(&self, origin: &Point, direction: f64) -> Option<Point> {
        ray_intersection(origin.xy(), self.0.xy(), self.1.xy(), direction).map(Point::from)
    }

    /// Cheap check whether a ray cast east from `origin` can cross the segment at all.
    ///
    /// The segment must straddle the `y` level of the origin (counting the upper end only) and must not lie entirely
    /// behind it.
    pub fn possible_crossing(&self, origin: &Point) -> bool {
        let (a, b) = (self.0, self.1);
        (origin.y() > a.y()) != (origin.y() > b.y()) && (origin.x() < a.x() || origin.x() < b.x())
    }
}

/// Finds the point where a ray crosses the segment `a`-`b`.
///
/// The ray starts at `origin` and points in `direction`, given in radians counterclockwise from the positive `x`
/// axis. Returns `None` if the ray is parallel to the segment, misses it, or the crossing lies behind the origin.
///
/// ```
/// use karta_types::cartesian::ray_intersection;
/// use nalgebra::Point2;
///
/// let hit = ray_intersection(
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, -1.0),
///     Point2::new(1.0, 1.0),
///     0.0,
/// );
/// assert_eq!(hit, Some(Point2::new(1.0, 0.0)));
/// ```
pub fn ray_intersection(
    origin: Point2<f64>,
    a: Point2<f64>,
    b: Point2<f64>,
    direction: f64,
) -> Option<Point2<f64>> {
    let cos_dir = direction.cos();
    let sin_dir = direction.sin();
    // Rounding error of cos/sin grows with the magnitude of the angle.
    let tolerance = f64::EPSILON * direction.abs().max(1.0);
    let vertical_ray = cos_dir.abs() <= tolerance;
    let horizontal_ray = sin_dir.abs() <= tolerance;
    let m_ray = if horizontal_ray { 0.0 } else { direction.tan() };

    let intersection = if a.x != b.x {
        let m_seg = (b.y - a.y) / (b.x - a.x);
        if vertical_ray {
            // tan() does not reach infinity, so a vertical ray is solved on the segment line instead.
            Point2::new(origin.x, a.y + m_seg * (origin.x - a.x))
        } else {
            if m_ray == m_seg {
                return None;
            }
            if horizontal_ray && origin.y == b.y {
                // The general formula can round past the endpoint.
                b
            } else {
                let x_int = a.x + (m_ray * (origin.x - a.x) - (origin.y - a.y)) / (m_ray - m_seg);
                Point2::new(x_int, origin.y + m_ray * (x_int - origin.x))
            }
        }
    } else {
        if vertical_ray {
            return None;
        }
        Point2::new(a.x, origin.y + m_ray * (a.x - origin.x))
    };

    let on_segment = if a.x != b.x {
        is_between(intersection.x, a.x, b.x)
    } else {
        is_between(intersection.y, a.y, b.y)
    };

    let ahead = if vertical_ray {
        (intersection.y - origin.y > 0.0) == (sin_dir > 0.0)
    } else {
        (intersection.x - origin.x > 0.0) == (cos_dir > 0.0)
    };

    (on_segment && ahead).then_some(intersection)
}

/// Finds the point of the segment `a`-`b` nearest to `point`. Returns the point and the distance to it.
///
/// The point is first projected onto the line through the segment. A projection that falls outside of the segment
/// snaps to the endpoint on that side.
pub fn nearest_on_segment(
    point: Point2<f64>,
    a: Point2<f64>,
    b: Point2<f64>,
) -> (Point2<f64>, f64) {
    let along: Vector2<f64> = b - a;
    let len_sq = along.norm_squared();
    if len_sq == 0.0 {
        return (a, nalgebra::distance(&a, &point));
    }

    let candidate = a + along * ((point - a).dot(&along) / len_sq);

    let vertical = a.x == b.x;
    let axis = |p: &Point2<f64>| if vertical { p.y } else { p.x };
    let (value, a_value, b_value) = (axis(&candidate), axis(&a), axis(&b));

    let nearest = if value > a_value.max(b_value) {
        if a_value > b_value {
            a
        } else {
            b
        }
    } else if value < a_value.min(b_value) {
        if a_value < b_value {
            a
        } else {
            b
        }
    } else {
        candidate
    };

    (nearest, nalgebra::distance(&nearest, &point))
}

fn is_between(value: f64, a: f64, b: f64) -> bool {
    value >= a.min(b) && value <= a.max(b)
}
