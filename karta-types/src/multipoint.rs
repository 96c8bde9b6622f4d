//! Shared behaviour of geometries made of a sequence of vertices.
//!
//! Both [`Polyline`](crate::Polyline) and [`Polygon`](crate::Polygon) are sequences of points of the same rank,
//! implementing the [`Multipoint`] trait. The edges of a multipoint always form a closed cycle: the last edge
//! connects the last vertex back to the first one. For a polygon, which repeats its first vertex at the end, that
//! last edge has zero length.

use crate::cartesian::Segment;
use crate::error::{KartaTypesError, Result};
use crate::point::Point;

/// Ordered sequence of vertices of the same rank. See module level documentation for details.
pub trait Multipoint {
    /// Vertices of the geometry. Never empty.
    fn vertices(&self) -> &[Point];

    /// Rank shared by all the vertices: 2 or 3.
    fn rank(&self) -> usize;

    /// Moves every vertex by `vector` in place.
    ///
    /// The vector length is checked against the rank before any vertex is moved.
    fn shift(&mut self, vector: &[f64]) -> Result<()>;

    /// Number of vertices.
    fn len(&self) -> usize {
        self.vertices().len()
    }

    /// Returns true if the geometry has no vertices. Validated geometries are never empty.
    fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    /// Returns a copy of the geometry moved by `vector`.
    fn shifted(&self, vector: &[f64]) -> Result<Self>
    where
        Self: Sized + Clone,
    {
        let mut moved = self.clone();
        moved.shift(vector)?;
        Ok(moved)
    }

    /// Edge starting at the vertex with the given `index`. The edge at the last index wraps around to the first
    /// vertex.
    fn edge(&self, index: usize) -> Option<Segment<'_>> {
        let vertices = self.vertices();
        let start = vertices.get(index)?;
        Some(Segment(start, &vertices[(index + 1) % vertices.len()]))
    }

    /// Iterates over all edges, including the one from the last vertex back to the first.
    fn iter_edges(&self) -> EdgeIterator<'_> {
        EdgeIterator::new(self.vertices())
    }

    /// Sum of distances between consecutive vertices.
    fn length(&self) -> f64 {
        self.vertices()
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }

    /// Same as [`Multipoint::nearest_to`], also returning the distance to the found point.
    fn nearest_to_with_distance(&self, point: &Point) -> (Point, f64) {
        let mut best = (Point::new(point.x(), point.y()), f64::INFINITY);
        for segment in self.iter_edges() {
            let candidate = segment.nearest_to(point);
            if candidate.1 < best.1 {
                best = candidate;
            }
        }

        best
    }

    /// Point on the edges of the geometry nearest to `point`, measured in the horizontal plane.
    ///
    /// If several edges are equally close, the point on the first of them is returned.
    fn nearest_to(&self, point: &Point) -> Point {
        self.nearest_to_with_distance(point).0
    }
}

/// Iterator over the edges of a [`Multipoint`], wrapping around at the end.
#[derive(Debug, Clone)]
pub struct EdgeIterator<'a> {
    vertices: &'a [Point],
    index: usize,
}

impl<'a> EdgeIterator<'a> {
    fn new(vertices: &'a [Point]) -> Self {
        Self { vertices, index: 0 }
    }
}

impl<'a> Iterator for EdgeIterator<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.vertices.get(self.index)?;
        let end = &self.vertices[(self.index + 1) % self.vertices.len()];
        self.index += 1;
        Some(Segment(start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vertices.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EdgeIterator<'_> {}

/// Checks that `vertices` is not empty and all of its points have the same rank. Returns the rank.
pub(crate) fn validate_vertices(vertices: &[Point]) -> Result<usize> {
    let first = vertices.first().ok_or(KartaTypesError::Empty)?;
    let rank = first.rank();

    match vertices.iter().position(|v| v.rank() != rank) {
        Some(index) => Err(KartaTypesError::MixedRank {
            index,
            expected: rank,
            found: vertices[index].rank(),
        }),
        None => Ok(rank),
    }
}

pub(crate) fn points_from_coords<I, C>(coords: I) -> Result<Vec<Point>>
where
    I: IntoIterator<Item = C>,
    C: AsRef<[f64]>,
{
    coords
        .into_iter()
        .map(|c| Point::from_coords(c.as_ref()))
        .collect()
}

pub(crate) fn shift_vertices(vertices: &mut [Point], rank: usize, vector: &[f64]) -> Result<()> {
    if vector.len() != rank {
        return Err(KartaTypesError::ShiftLength {
            expected: rank,
            found: vector.len(),
        });
    }

    for vertex in vertices {
        vertex.shift(vector)?;
    }

    Ok(())
}
