//! # Boxjoint CAM Tools
//!
//! Turns box dimensions and material parameters into laser-cutter plans.
//!
//! ## Tools Included
//!
//! - **Finger-Joint Box Maker**: socket placement, panel outlines with kerf
//!   compensation, and vertical stacking of the five panels
//! - **SVG Export**: writes the stacked outlines as closed, stroked SVG paths

pub mod error;
pub mod finger_box;
pub mod svg_export;

// Re-export commonly used items
pub use error::{CamToolError, CamToolResult};
pub use finger_box::{
    reference_square, socket_positions, BoxDimensions, BoxJointMaker, BoxPlan, EdgeRole, Panel,
    PanelOutline, PanelShape, ProcessParameters, SocketRun,
};
pub use svg_export::SvgDocument;
