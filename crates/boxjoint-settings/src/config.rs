//! Configuration file handling for boxjoint
//!
//! Configuration is organized into logical sections:
//! - Material settings (stock thickness, cutter compensation, unit)
//! - Layout settings (panel spacing, drawing margin, output scale)
//! - Output settings (default plan name and directory)
//!
//! Files may be JSON or TOML; missing keys fall back to their defaults.

pub use boxjoint_core::LinearUnit;

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR_NAME: &str = "boxjoint";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Stock material and cutter compensation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
    /// Sheet thickness
    pub thickness: f64,
    /// Subtracted from the notch depth
    pub depth_offset: f64,
    /// Trimmed from each end of a notch
    pub length_offset: f64,
    /// Unit the dimensions are given in
    pub unit: LinearUnit,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            thickness: 0.106,
            depth_offset: 0.02,
            length_offset: 0.02,
            unit: LinearUnit::Inch,
        }
    }
}

/// Placement of panels on the drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Vertical gap between stacked panels
    pub spacing: f64,
    /// Offset from the top-left corner of the drawing
    pub margin: f64,
    /// Added to the right and bottom of the canvas
    pub canvas_padding: f64,
    /// Output units per dimension unit
    pub scale: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            spacing: 0.1,
            margin: 0.1,
            canvas_padding: 1.0,
            scale: 72.0,
        }
    }
}

/// Where plans are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Name used when none is given on the command line
    pub default_name: String,
    /// Directory plans are written to
    pub output_dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            default_name: "box".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub material: MaterialSettings,
    pub layout: LayoutSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/boxjoint/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let material = &self.material;
        if !material.thickness.is_finite() || material.thickness <= 0.0 {
            return Err(SettingsError::invalid(
                "material.thickness",
                "must be a positive number",
            ));
        }
        for (key, offset) in [
            ("material.depth_offset", material.depth_offset),
            ("material.length_offset", material.length_offset),
        ] {
            if !(0.0..material.thickness).contains(&offset) {
                return Err(SettingsError::invalid(
                    key,
                    format!("must be at least 0 and less than the thickness {}", material.thickness),
                ));
            }
        }

        let layout = &self.layout;
        for (key, value) in [
            ("layout.spacing", layout.spacing),
            ("layout.margin", layout.margin),
            ("layout.canvas_padding", layout.canvas_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::invalid(key, "must not be negative"));
            }
        }
        if !layout.scale.is_finite() || layout.scale <= 0.0 {
            return Err(SettingsError::invalid("layout.scale", "must be positive"));
        }

        if self.output.default_name.trim().is_empty() {
            return Err(SettingsError::invalid("output.default_name", "must not be empty"));
        }

        Ok(())
    }
}
