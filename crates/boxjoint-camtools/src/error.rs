//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for box dimension and
//! process-parameter validation, panel generation and plan export.

use boxjoint_core::GeometryError;
use std::io;
use thiserror::Error;

/// Errors that can occur while generating or exporting box plans.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A box dimension is non-positive, non-finite, or too small to carry a joint.
    #[error("Invalid dimension '{name}' = {value}: {reason}")]
    InvalidDimension {
        name: String,
        value: f64,
        reason: String,
    },

    /// Invalid process parameters were provided.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// An unrecognized panel or panel-shape identifier was requested.
    #[error("Invalid panel kind: {0}")]
    InvalidPanelKind(String),

    /// A socket run had an odd number of positions.
    #[error("Malformed socket run for {role}: {len} positions (must be even)")]
    MalformedSocketRun { role: String, len: usize },

    /// A geometry query failed.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// I/O error while writing the plan.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;
