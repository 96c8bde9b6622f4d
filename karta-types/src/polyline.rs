use serde::{Deserialize, Serialize};

use crate::error::{KartaTypesError, Result};
use crate::multipoint::{points_from_coords, shift_vertices, validate_vertices, Multipoint};
use crate::point::Point;
use crate::polygon::Polygon;

/// Open path through a sequence of vertices. The first and the last vertices may differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polyline {
    vertices: Vec<Point>,
    rank: usize,
}

impl Polyline {
    /// Creates a new polyline. All vertices must have the same rank and there must be at least one of them.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        let rank = validate_vertices(&vertices)?;
        Ok(Self { vertices, rank })
    }

    /// Creates a new polyline from slices of 2 or 3 coordinates each.
    ///
    /// ```
    /// use karta_types::{Multipoint, Polyline};
    ///
    /// let line = Polyline::from_coords([[0.0, 0.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(line.length(), 5.0);
    /// ```
    pub fn from_coords<I, C>(coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[f64]>,
    {
        Self::new(points_from_coords(coords)?)
    }

    pub(crate) fn from_validated(vertices: Vec<Point>, rank: usize) -> Self {
        Self { vertices, rank }
    }

    /// Appends a vertex to the end of the line.
    pub fn add_vertex(&mut self, vertex: Point) -> Result<()> {
        self.check_rank(&vertex, self.vertices.len())?;
        self.vertices.push(vertex);
        Ok(())
    }

    /// Inserts a vertex at position `index`, shifting all vertices after it.
    pub fn insert_vertex(&mut self, index: usize, vertex: Point) -> Result<()> {
        if index > self.vertices.len() {
            return Err(KartaTypesError::VertexIndex {
                index,
                len: self.vertices.len(),
            });
        }

        self.check_rank(&vertex, index)?;
        self.vertices.insert(index, vertex);
        Ok(())
    }

    /// Removes and returns the vertex at position `index`.
    ///
    /// The only vertex of a line cannot be removed.
    pub fn remove_vertex(&mut self, index: usize) -> Result<Point> {
        if index >= self.vertices.len() {
            return Err(KartaTypesError::VertexIndex {
                index,
                len: self.vertices.len(),
            });
        }

        if self.vertices.len() == 1 {
            return Err(KartaTypesError::Empty);
        }

        Ok(self.vertices.remove(index))
    }

    /// Distance between the first and the last vertices.
    pub fn displacement(&self) -> f64 {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first.distance(last),
            _ => 0.0,
        }
    }

    /// Creates a polygon with the same vertices, closing the ring if needed.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_validated(self.vertices.clone(), self.rank)
    }

    /// Takes the vertices out of the line.
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    fn check_rank(&self, vertex: &Point, index: usize) -> Result<()> {
        if vertex.rank() != self.rank {
            return Err(KartaTypesError::MixedRank {
                index,
                expected: self.rank,
                found: vertex.rank(),
            });
        }

        Ok(())
    }
}

impl Multipoint for Polyline {
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

impl TryFrom<Vec<Point>> for Polyline {
    type Error = KartaTypesError;

    fn try_from(value: Vec<Point>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Polyline> for Vec<Point> {
    fn from(value: Polyline) -> Self {
        value.vertices
    }
}
