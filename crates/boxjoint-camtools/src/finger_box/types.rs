//! Type definitions for the finger-joint box maker

use crate::error::CamToolError;
use boxjoint_core::{LinearUnit, Path};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role an edge plays in the box, which selects its socket packing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeRole {
    /// Long bottom edges running the box's length.
    Length,
    /// Short bottom edges running the box's width.
    Width,
    /// Vertical edges.
    Height,
}

impl EdgeRole {
    pub const ALL: [EdgeRole; 3] = [EdgeRole::Length, EdgeRole::Width, EdgeRole::Height];
}

impl fmt::Display for EdgeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// Distinct outline shapes. Front and back share one, left and right another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelShape {
    /// width x height, notched on both vertical sides and the bottom
    FrontBack,
    /// length x height, tabbed on both vertical sides, notched on the bottom
    Side,
    /// length x width, tabbed on all four sides
    Bottom,
}

impl fmt::Display for PanelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrontBack => write!(f, "front_back"),
            Self::Side => write!(f, "side"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

impl FromStr for PanelShape {
    type Err = CamToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" | "back" | "front_back" => Ok(Self::FrontBack),
            "side" | "left" | "right" => Ok(Self::Side),
            "bottom" => Ok(Self::Bottom),
            _ => Err(CamToolError::InvalidPanelKind(s.to_string())),
        }
    }
}

/// The five physical pieces, in the order they are stacked on the drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Front,
    Back,
    Left,
    Right,
    Bottom,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Front,
        Panel::Back,
        Panel::Left,
        Panel::Right,
        Panel::Bottom,
    ];

    pub fn shape(&self) -> PanelShape {
        match self {
            Self::Front | Self::Back => PanelShape::FrontBack,
            Self::Left | Self::Right => PanelShape::Side,
            Self::Bottom => PanelShape::Bottom,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

impl FromStr for Panel {
    type Err = CamToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            _ => Err(CamToolError::InvalidPanelKind(s.to_string())),
        }
    }
}

/// Outside box dimensions, all in the run's linear unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxDimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    pub fn get(&self, role: EdgeRole) -> f64 {
        match role {
            EdgeRole::Length => self.length,
            EdgeRole::Width => self.width,
            EdgeRole::Height => self.height,
        }
    }
}

impl fmt::Display for BoxDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

/// Material and process constants, fixed for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessParameters {
    /// Material thickness (1/8" plywood is actually 0.106")
    pub thickness: f64,
    /// Subtracted from every notch and tab depth to absorb kerf
    pub depth_offset: f64,
    /// Trimmed from each end of every notch to absorb kerf
    pub length_offset: f64,
    /// Gap between stacked outlines
    pub spacing: f64,
    /// Distance between the outlines and the drawing's top-left edge
    pub margin: f64,
    /// Extra room added to the canvas right of and below the outlines
    pub canvas_padding: f64,
    /// Output units per linear unit (72 for points per inch)
    pub scale: f64,
    pub unit: LinearUnit,
}

impl Default for ProcessParameters {
    fn default() -> Self {
        Self {
            thickness: 0.106,
            depth_offset: 0.02,
            length_offset: 0.02,
            spacing: 0.1,
            margin: 0.1,
            canvas_padding: 1.0,
            scale: 72.0,
            unit: LinearUnit::Inch,
        }
    }
}

/// One placed panel outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOutline {
    pub panel: Panel,
    pub path: Path,
}
