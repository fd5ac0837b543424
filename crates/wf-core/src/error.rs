//! Error types shared by the geometry, collection and model layers

use thiserror::Error;

/// Errors raised by geometry primitives, collections and the model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Component, element or collection index past the end
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Point index past the arity of an element
    #[error("point index {index} out of range (element has {arity} points)")]
    PointIndexOverflow { index: usize, arity: usize },

    /// Two points of one element coincide
    #[error("element points are not pairwise distinct")]
    PointCollision,

    /// Value equals an element that is already stored
    #[error("element already exists")]
    ElementCollision,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
