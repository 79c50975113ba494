//! Linear unit a plan is drawn in.
//!
//! A run uses exactly one unit for every dimension and process parameter.
//! The unit only affects labelling; the geometry is unit-agnostic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinearUnit {
    /// Inches
    #[serde(alias = "in")]
    Inch,
    /// Millimeters
    #[serde(alias = "mm")]
    Millimeter,
}

impl Default for LinearUnit {
    fn default() -> Self {
        Self::Inch
    }
}

impl LinearUnit {
    /// Caption for a square of `size` units, e.g. `1" x 1"`.
    pub fn square_label(&self, size: f64) -> String {
        match self {
            Self::Inch => format!("{size}\" x {size}\""),
            Self::Millimeter => format!("{size} mm x {size} mm"),
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inch => write!(f, "in"),
            Self::Millimeter => write!(f, "mm"),
        }
    }
}

impl FromStr for LinearUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" | "imperial" => Ok(Self::Inch),
            "mm" | "millimeter" | "millimeters" | "metric" => Ok(Self::Millimeter),
            _ => Err(format!("Unknown linear unit: {}", s)),
        }
    }
}
