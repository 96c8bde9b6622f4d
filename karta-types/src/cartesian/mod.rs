//! Kernel functions on raw coordinates in the cartesian plane.

mod segment;
mod walk;

pub use segment::{nearest_on_segment, ray_intersection, Segment};
pub use walk::walk;
