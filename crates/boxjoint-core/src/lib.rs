//! # Boxjoint Core
//!
//! Core types shared by the boxjoint crates:
//! - Point sequences with in-place transforms and bounding-box queries
//! - The single linear unit a plan is drawn in
//! - Geometry error types

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{GeometryError, GeometryResult};
pub use geometry::{clean_coordinate, Axis, BoundingBox, Path, Point};
pub use units::LinearUnit;
