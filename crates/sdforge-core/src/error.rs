//! Error types for sdforge

use thiserror::Error;

/// Result type alias using sdforge's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a shape tree.
///
/// Evaluation never fails; every error surfaces from a constructor so a bad
/// node can never make it into a tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Polygon with too few vertices
    #[error("Polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),

    /// Instancing operator asked for zero copies
    #[error("Instance count must be positive: {0}")]
    NonPositiveCount(String),

    /// A direction that must be normalized has zero length
    #[error("Zero-length vector: {0}")]
    ZeroLengthVector(&'static str),

    /// Transform matrix cannot be inverted
    #[error("Transform matrix is not invertible")]
    SingularTransform,

    /// Empty point set where at least one position is required
    #[error("Empty point set: {0}")]
    EmptyPointSet(&'static str),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
