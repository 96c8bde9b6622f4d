//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KartaTypesError {
    /// Coordinates must have 2 or 3 components.
    #[error("coordinates must have 2 or 3 components, got {rank}")]
    InvalidRank {
        /// Number of components that was given.
        rank: usize,
    },
    /// A vertex does not have the rank of the rest of the geometry.
    #[error("vertex {index} has rank {found}, expected {expected}")]
    MixedRank {
        /// Position of the offending vertex.
        index: usize,
        /// Rank of the geometry.
        expected: usize,
        /// Rank of the vertex.
        found: usize,
    },
    /// A geometry must have at least one vertex.
    #[error("geometry must have at least one vertex")]
    Empty,
    /// Operation needs a vertical component on both points.
    #[error("{operation} requires rank 3 points")]
    Dimension {
        /// Name of the operation.
        operation: &'static str,
    },
    /// Unrecognized value of an enumerated option.
    #[error("unrecognized {kind}: '{value}'")]
    UnknownOption {
        /// Kind of the option (e.g. "angular unit").
        kind: &'static str,
        /// Value that could not be parsed.
        value: String,
    },
    /// Two input sequences were expected to have equal lengths.
    #[error("input lengths differ: {left} and {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },
    /// Shift vector length does not match geometry rank.
    #[error("shift vector has {found} components, geometry rank is {expected}")]
    ShiftLength {
        /// Rank of the geometry.
        expected: usize,
        /// Length of the shift vector.
        found: usize,
    },
    /// Vertex index is out of range.
    #[error("vertex index {index} is out of range for {len} vertices")]
    VertexIndex {
        /// Requested index.
        index: usize,
        /// Number of vertices.
        len: usize,
    },
    /// Conversion into an external geometry type was requested without an adapter.
    #[error("no adapter available for conversion into {target}")]
    ConversionUnavailable {
        /// Name of the target geometry type.
        target: &'static str,
    },
    /// The code path exists but has no implementation.
    #[error("{operation} is not implemented")]
    Unimplemented {
        /// Name of the operation.
        operation: &'static str,
    },
}

/// Result type with [`KartaTypesError`] as the error.
pub type Result<T> = std::result::Result<T, KartaTypesError>;
