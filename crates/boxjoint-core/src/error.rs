//! Error types for geometry operations.

use thiserror::Error;

/// Errors raised by point-sequence queries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A bounding-box query was made on a path with no points.
    #[error("Path has no points")]
    EmptyPath,
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
