use serde::{Deserialize, Serialize};

use crate::cartesian::Segment;
use crate::error::{KartaTypesError, Result};
use crate::multipoint::{points_from_coords, shift_vertices, validate_vertices, Multipoint};
use crate::point::Point;
use crate::polyline::Polyline;

/// Closed ring of vertices.
///
/// The last vertex of a polygon is always equal to the first one. If the vertices given to the constructor do not
/// form a closed ring, the first vertex is appended to the end.
///
/// Area and containment are computed in the horizontal plane, the `z` coordinates of rank 3 polygons are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    vertices: Vec<Point>,
    rank: usize,
}

impl Polygon {
    /// Creates a new polygon, closing the ring if needed.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        let rank = validate_vertices(&vertices)?;
        Ok(Self::from_validated(vertices, rank))
    }

    /// Creates a new polygon from slices of 2 or 3 coordinates each.
    ///
    /// ```
    /// use karta_types::Polygon;
    ///
    /// let square = Polygon::from_coords([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]).unwrap();
    /// assert_eq!(square.area(), 1.0);
    /// assert_eq!(square.perimeter(), 4.0);
    /// ```
    pub fn from_coords<I, C>(coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[f64]>,
    {
        Self::new(points_from_coords(coords)?)
    }

    pub(crate) fn from_validated(mut vertices: Vec<Point>, rank: usize) -> Self {
        if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
            if first != last {
                vertices.push(*first);
            }
        }

        Self { vertices, rank }
    }

    /// Length of the ring.
    pub fn perimeter(&self) -> f64 {
        self.length()
    }

    /// Area enclosed by the ring, computed with the shoelace formula.
    pub fn area(&self) -> f64 {
        let sum: f64 = self
            .iter_edges()
            .map(|Segment(a, b)| (a.x() + b.x()) * (a.y() - b.y()))
            .sum();
        (0.5 * sum).abs()
    }

    /// Returns true if `point` lies inside the polygon.
    ///
    /// A ray is cast from the point to the east and its crossings with the edges are counted, an odd count meaning the
    /// point is inside. The ring is assumed to be simple (not self-intersecting). Points lying exactly on an edge may
    /// be classified either way.
    pub fn contains(&self, point: &Point) -> bool {
        let crossings = self
            .iter_edges()
            .filter(|segment| segment.possible_crossing(point))
            .filter(|segment| segment.ray_intersection(point, 0.0).is_some())
            .count();

        crossings % 2 == 1
    }

    /// Creates a polyline with the same vertices. The closing vertex is kept.
    pub fn to_polyline(&self) -> Polyline {
        Polyline::from_validated(self.vertices.clone(), self.rank)
    }

    /// Takes the vertices out of the polygon. The closing vertex is included.
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }
}

impl Multipoint for Polygon {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    fn rank(&self) -> usize {
        self.rank
    }

    fn shift(&mut self, vector: &[f64]) -> Result<()> {
        shift_vertices(&mut self.vertices, self.rank, vector)
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = KartaTypesError;

    fn try_from(value: Vec<Point>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(value: Polygon) -> Self {
        value.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn unit_square() -> Polygon {
        Polygon::from_coords([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]).unwrap()
    }

    fn concave() -> Polygon {
        // U shape opening to the north
        Polygon::from_coords([
            [0.0, 0.0],
            [3.0, 0.0],
            [3.0, 3.0],
            [2.0, 3.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 3.0],
            [0.0, 3.0],
        ])
        .unwrap()
    }

    #[test]
    fn new_closes_ring() {
        let square = unit_square();
        assert_eq!(square.len(), 5);
        assert_eq!(square.vertices()[4], Point::new(0.0, 0.0));

        let closed =
            Polygon::from_coords([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]])
                .unwrap();
        assert_eq!(closed, square);
    }

    #[test]
    fn new_validates_vertices() {
        assert_matches!(Polygon::new(vec![]), Err(KartaTypesError::Empty));
        assert_matches!(
            Polygon::new(vec![Point::new_3d(0.0, 0.0, 0.0), Point::new(1.0, 1.0)]),
            Err(KartaTypesError::MixedRank { index: 1, .. })
        );
    }

    #[test]
    fn area_and_perimeter() {
        let square = unit_square();
        assert_eq!(square.area(), 1.0);
        assert_eq!(square.perimeter(), 4.0);

        assert_eq!(concave().area(), 7.0);
        assert_eq!(concave().perimeter(), 16.0);

        let triangle = Polygon::from_coords([[0.0, 0.0, 5.0], [4.0, 0.0, 6.0], [0.0, 3.0, 7.0]])
            .unwrap();
        assert_eq!(triangle.area(), 6.0);
    }

    #[test]
    fn area_does_not_depend_on_winding() {
        let clockwise =
            Polygon::from_coords([[0.0, 0.0], [0.0, 2.0], [3.0, 2.0], [3.0, 0.0]]).unwrap();
        let counterclockwise =
            Polygon::from_coords([[0.0, 0.0], [3.0, 0.0], [3.0, 2.0], [0.0, 2.0]]).unwrap();
        assert_eq!(clockwise.area(), 6.0);
        assert_eq!(counterclockwise.area(), 6.0);
    }

    #[test]
    fn contains() {
        let square = unit_square();
        assert!(square.contains(&Point::new(0.5, 0.5)));
        assert!(!square.contains(&Point::new(2.0, 2.0)));
        assert!(!square.contains(&Point::new(0.5, -1.0)));
        assert!(!square.contains(&Point::new(-0.5, 0.5)));
    }

    #[test]
    fn contains_concave() {
        let shape = concave();
        assert!(shape.contains(&Point::new(0.5, 2.0)));
        assert!(shape.contains(&Point::new(2.5, 2.0)));
        assert!(shape.contains(&Point::new(1.5, 0.5)));
        assert!(!shape.contains(&Point::new(1.5, 2.0)));
        assert!(!shape.contains(&Point::new(4.0, 2.0)));
    }

    #[test]
    fn contains_with_ray_through_vertex() {
        let diamond = Polygon::from_coords([[0.0, -1.0], [1.0, 0.0], [0.0, 1.0], [-1.0, 0.0]]).unwrap();
        assert!(diamond.contains(&Point::new(0.0, 0.0)));
        assert!(diamond.contains(&Point::new(-0.5, 0.0)));
        assert!(!diamond.contains(&Point::new(-2.0, 0.0)));
        assert!(!diamond.contains(&Point::new(2.0, 0.0)));
    }

    #[test]
    fn contains_with_ray_through_upper_end_of_edge() {
        let triangle = Polygon::from_coords([[-2.5, -1.2], [0.2, 5.6], [-5.0, 10.0]]).unwrap();
        assert!(triangle.contains(&Point::new(-2.0, 5.6)));
        assert!(triangle.contains(&Point::new(-4.0, 5.6)));
        assert!(!triangle.contains(&Point::new(1.0, 5.6)));
        assert!(!triangle.contains(&Point::new(-6.0, 5.6)));
    }

    #[test]
    fn nearest_is_not_farther_than_any_vertex() {
        let shape = concave();
        for x in -5..=10 {
            for y in -5..=10 {
                let query = Point::new(x as f64 * 0.45, y as f64 * 0.45);
                let (nearest, distance) = shape.nearest_to_with_distance(&query);
                assert_abs_diff_eq!(query.distance(&nearest), distance, epsilon = 1e-12);
                for vertex in shape.vertices() {
                    assert!(distance <= query.distance(vertex) + 1e-12);
                }
            }
        }
    }

    #[test]
    fn nearest_to() {
        let square = unit_square();
        let (nearest, distance) = square.nearest_to_with_distance(&Point::new(0.5, -1.0));
        assert_eq!(nearest, Point::new(0.5, 0.0));
        assert_eq!(distance, 1.0);

        assert_abs_diff_eq!(
            square.nearest_to(&Point::new(0.5, 0.8)),
            Point::new(0.5, 1.0),
            epsilon = 1e-12
        );
        assert_eq!(square.nearest_to(&Point::new(2.0, 2.0)), Point::new(1.0, 1.0));
    }

    #[test]
    fn shift() {
        let mut square = unit_square();
        square.shift(&[1.0, 2.0]).unwrap();
        assert_eq!(square.vertices()[0], Point::new(1.0, 2.0));
        assert_eq!(square.vertices()[4], Point::new(1.0, 2.0));
        assert_eq!(square.area(), 1.0);
        assert!(square.contains(&Point::new(1.5, 2.5)));

        assert_matches!(
            square.shift(&[1.0, 2.0, 3.0]),
            Err(KartaTypesError::ShiftLength { .. })
        );
    }

    #[test]
    fn round_trip_through_polyline() {
        let square = unit_square();
        let line = square.to_polyline();
        assert_eq!(line.vertices(), square.vertices());
        assert_eq!(line.to_polygon(), square);
    }

    #[test]
    fn deserialized_polygon_is_closed() {
        let json = r#"[{"x":0.0,"y":0.0},{"x":0.0,"y":1.0},{"x":1.0,"y":1.0},{"x":1.0,"y":0.0}]"#;
        let polygon: Polygon = serde_json::from_str(json).unwrap();
        assert_eq!(polygon, unit_square());
    }
}
