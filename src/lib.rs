//! # boxjoint
//!
//! Generates laser-cutter plans for open-topped boxes joined with finger
//! joints. A plan is one SVG holding a 1x1 reference square and the five
//! panel outlines (front, back, left, right, bottom) stacked vertically.
//!
//! ## Architecture
//!
//! 1. **boxjoint-core** - Points, paths, bounding boxes, units
//! 2. **boxjoint-camtools** - Socket placement, panel outlines, SVG export
//! 3. **boxjoint-settings** - Configuration file loading and validation
//! 4. **boxjoint** - This crate: plan files, logging and the CLI

use anyhow::{bail, Context};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub use boxjoint_camtools::{
    BoxDimensions, BoxJointMaker, BoxPlan, CamToolError, Panel, PanelShape, ProcessParameters,
    SvgDocument,
};
pub use boxjoint_core::LinearUnit;
pub use boxjoint_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Name used for plan files when none is given.
pub const DEFAULT_BOX_NAME: &str = "box";

/// Initialize logging with the default configuration
///
/// Logs go to stderr so they never mix with anything written to stdout.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Parse `"12x24x8"` (or `"12 X 24 X 8"`) into length, width and height.
pub fn parse_dimensions(text: &str) -> anyhow::Result<BoxDimensions> {
    let parts: Vec<&str> = text.trim().split(['x', 'X']).map(str::trim).collect();
    if parts.len() != 3 {
        bail!(
            "Expected dimensions as LENGTHxWIDTHxHEIGHT, got '{}'",
            text.trim()
        );
    }

    let mut values = [0.0; 3];
    for (value, (part, name)) in values
        .iter_mut()
        .zip(parts.iter().zip(["length", "width", "height"]))
    {
        *value = part
            .parse::<f64>()
            .with_context(|| format!("Invalid {} '{}' in '{}'", name, part, text.trim()))?;
    }

    Ok(BoxDimensions::new(values[0], values[1], values[2]))
}

/// `<name>-<L>x<W>x<H>.svg`
pub fn plan_file_name(name: &str, dimensions: &BoxDimensions) -> String {
    format!("{}-{}.svg", name, dimensions)
}

/// Process parameters described by `config`.
pub fn process_parameters(config: &Config) -> ProcessParameters {
    ProcessParameters {
        thickness: config.material.thickness,
        depth_offset: config.material.depth_offset,
        length_offset: config.material.length_offset,
        spacing: config.layout.spacing,
        margin: config.layout.margin,
        canvas_padding: config.layout.canvas_padding,
        scale: config.layout.scale,
        unit: config.material.unit,
    }
}

/// Load `path` if given, else the per-user config file if it exists, else
/// defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match Config::default_path().filter(|p| p.is_file()) {
            Some(path) => path,
            None => {
                debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let config = Config::load_from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Values given on the command line, applied over the loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub thickness: Option<f64>,
    pub depth_offset: Option<f64>,
    pub length_offset: Option<f64>,
    pub scale: Option<f64>,
    pub output_dir: Option<PathBuf>,
    pub name: Option<String>,
}

impl ConfigOverrides {
    /// Overwrite the fields of `config` that were given. A blank name keeps
    /// the configured one.
    pub fn apply(self, config: &mut Config) {
        if let Some(thickness) = self.thickness {
            config.material.thickness = thickness;
        }
        if let Some(depth_offset) = self.depth_offset {
            config.material.depth_offset = depth_offset;
        }
        if let Some(length_offset) = self.length_offset {
            config.material.length_offset = length_offset;
        }
        if let Some(scale) = self.scale {
            config.layout.scale = scale;
        }
        if let Some(output_dir) = self.output_dir {
            config.output.output_dir = output_dir;
        }
        if let Some(name) = self.name.filter(|n| !n.trim().is_empty()) {
            config.output.default_name = name;
        }
    }
}

/// Generate the plan for one box and write it to
/// `<output_dir>/<name>-<L>x<W>x<H>.svg`, returning the written path.
///
/// Nothing is written if the dimensions or parameters are rejected.
pub fn generate_box_plans(
    dimensions: BoxDimensions,
    name: &str,
    params: &ProcessParameters,
    use_offsets: bool,
    output_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let name = match name.trim() {
        "" => DEFAULT_BOX_NAME,
        trimmed => trimmed,
    };

    let maker = BoxJointMaker::new(dimensions, params.clone())?;
    let document = maker.generate(use_offsets)?.to_svg(params)?;

    let path = output_dir.join(plan_file_name(name, maker.dimensions()));
    document
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        path = %path.display(),
        width = document.width(),
        height = document.height(),
        "Wrote box plan"
    );
    Ok(path)
}
