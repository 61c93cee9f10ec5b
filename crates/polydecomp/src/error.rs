//! Error type shared by input validation, topology lookups, and the pipeline.
//!
//! All failures are terminal for the current run: the input is rejected before
//! any geometry runs, or a contract violation surfaces to the caller.

use thiserror::Error;

use crate::store::VertexId;

/// Errors raised while loading or decomposing a polygon.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecompError {
    /// The input text contained no tokens at all.
    #[error("empty input: expected a vertex count")]
    Empty,

    /// A token could not be parsed as the expected number.
    #[error("invalid token {token:?} at position {position}")]
    InvalidToken { position: usize, token: String },

    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    /// The input declared more coordinate pairs than it provided.
    #[error("declared {declared} vertices but found only {found} coordinate pairs")]
    MissingCoordinates { declared: usize, found: usize },

    /// A coordinate is NaN or infinite.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// Vertex `index` coincides with its cyclic successor.
    #[error("vertex {index} coincides with its successor (zero-length edge)")]
    ZeroLengthEdge { index: usize },

    /// All vertices lie on a single line (zero signed area).
    #[error("degenerate polygon: all vertices are collinear")]
    Collinear,

    /// `next`/`prev` was asked about a vertex the polygon does not contain.
    #[error("vertex {vertex:?} is not a member of the polygon")]
    VertexNotInPolygon { vertex: VertexId },
}
