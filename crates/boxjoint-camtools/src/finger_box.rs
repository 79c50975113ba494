//! Finger-Joint Box Maker
//!
//! Generates the five panels of an open-topped box whose edges meet in
//! square finger joints, then stacks them on one drawing.
//!
//! Front/back panels look like this:
//!
//! ```text
//!  ________________________
//! |                        |
//! |_                      _|
//!   |                    |   HEIGHT
//!  _|   ____      ____   |_
//! |____|    |____|    |____|
//!           WIDTH
//! ```
//!
//! Side panels look like this:
//!
//! ```text
//!    ______________________________
//!   |                              |
//!  _|                              |_
//! |                                  | HEIGHT
//! |_    ____      ____      ____    _|
//!   |__|    |____|    |____|    |__|
//!                LENGTH
//! ```
//!
//! The bottom panel is LENGTH x WIDTH with tabs on all four sides. Every
//! outline is generated with its bounding box at (0, 0), y pointing down,
//! and is walked down its left side first.

pub mod layout;
pub mod sockets;
pub mod types;

pub use layout::StackLayout;
pub use sockets::{
    notch_pair_count, role_pair_count, socket_positions, SocketRun, MAX_NOTCH_PAIRS,
    NOTCH_WIDTH_FACTOR,
};
pub use types::{BoxDimensions, EdgeRole, Panel, PanelOutline, PanelShape, ProcessParameters};

use crate::error::{CamToolError, CamToolResult};
use crate::svg_export::SvgDocument;
use boxjoint_core::Path;
use tracing::{debug, info};

/// Side length of the scale reference square, in linear units.
pub const REFERENCE_SQUARE_SIZE: f64 = 1.0;

/// Pixel position of the reference square's caption.
const REFERENCE_LABEL_POSITION: (f64, f64) = (10.0, 18.0);
const REFERENCE_LABEL_FILL: &str = "red";
const REFERENCE_LABEL_STYLE: &str = "font-size: 10px; font-family: \"Arial\";";

/// The 1x1 square printed beside the panels to check the cut scale.
pub fn reference_square() -> Path {
    let s = REFERENCE_SQUARE_SIZE;
    let mut path = Path::new();
    path.add_point(0.0, 0.0)
        .add_point(s, 0.0)
        .add_point(s, s)
        .add_point(0.0, s);
    path
}

/// Smallest dimension that still fits one notch pair for `role`.
pub fn minimum_dimension(role: EdgeRole, thickness: f64) -> f64 {
    let notch_width = NOTCH_WIDTH_FACTOR * thickness;
    match role {
        EdgeRole::Length => 2.0 * thickness + 3.0 * notch_width,
        EdgeRole::Width => 3.0 * notch_width,
        EdgeRole::Height => thickness + 2.0 * notch_width,
    }
}

#[derive(Clone, Copy, Debug)]
enum EdgeDirection {
    /// Edge runs along y; points are (across, along)
    Vertical,
    /// Edge runs along x; points are (along, across)
    Horizontal,
}

/// One jointed side of a panel walk.
struct JointEdge<'a> {
    run: &'a SocketRun,
    direction: EdgeDirection,
    /// Cross-edge coordinate of the straight stretches
    base: f64,
    /// Cross-edge coordinate the joints reach
    tip: f64,
    reversed: bool,
    /// Trimmed from each end of a notch; zero for tabs
    trim: f64,
}

impl JointEdge<'_> {
    fn push_onto(&self, path: &mut Path) {
        let pairs: Vec<(f64, f64)> = if self.reversed {
            self.run.pairs_reversed().collect()
        } else {
            self.run.pairs().collect()
        };
        let trim = if self.reversed { -self.trim } else { self.trim };

        let mut point = |along: f64, across: f64| match self.direction {
            EdgeDirection::Vertical => {
                path.add_point(across, along);
            }
            EdgeDirection::Horizontal => {
                path.add_point(along, across);
            }
        };

        for (start, end) in pairs {
            let start = start + trim;
            let end = end - trim;
            point(start, self.base);
            point(start, self.tip);
            point(end, self.tip);
            point(end, self.base);
        }
    }
}

/// Generates panel outlines for one box.
pub struct BoxJointMaker {
    dimensions: BoxDimensions,
    params: ProcessParameters,
    length_run: SocketRun,
    width_run: SocketRun,
    height_run: SocketRun,
}

impl BoxJointMaker {
    pub fn new(dimensions: BoxDimensions, params: ProcessParameters) -> CamToolResult<Self> {
        Self::validate_parameters(&params)?;
        Self::validate_dimensions(&dimensions, params.thickness)?;

        let t = params.thickness;
        let length_run = socket_positions(EdgeRole::Length, dimensions.length, t);
        let width_run = socket_positions(EdgeRole::Width, dimensions.width, t);
        let height_run = socket_positions(EdgeRole::Height, dimensions.height, t);

        // Every edge of an open-topped box joins another panel
        for run in [&length_run, &width_run, &height_run] {
            if run.is_empty() {
                let role = run.role();
                return Err(CamToolError::InvalidDimension {
                    name: role.to_string(),
                    value: dimensions.get(role),
                    reason: format!(
                        "too small for a finger joint in {} material (minimum {:.3})",
                        t,
                        minimum_dimension(role, t)
                    ),
                });
            }
            debug!(
                role = %run.role(),
                notches = run.notch_count(),
                "Placed sockets"
            );
        }

        Ok(Self {
            dimensions,
            params,
            length_run,
            width_run,
            height_run,
        })
    }

    fn validate_parameters(params: &ProcessParameters) -> CamToolResult<()> {
        let t = params.thickness;
        if !t.is_finite() || t <= 0.0 {
            return Err(CamToolError::InvalidParameters(format!(
                "Material thickness must be positive, got {}",
                t
            )));
        }

        for (name, offset) in [
            ("Depth offset", params.depth_offset),
            ("Length offset", params.length_offset),
        ] {
            if !offset.is_finite() || offset < 0.0 || offset >= t {
                return Err(CamToolError::InvalidParameters(format!(
                    "{} must be between 0 and the material thickness ({}), got {}",
                    name, t, offset
                )));
            }
        }

        for (name, value) in [
            ("Spacing", params.spacing),
            ("Margin", params.margin),
            ("Canvas padding", params.canvas_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CamToolError::InvalidParameters(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if !params.scale.is_finite() || params.scale <= 0.0 {
            return Err(CamToolError::InvalidParameters(format!(
                "Scale must be positive, got {}",
                params.scale
            )));
        }

        Ok(())
    }

    fn validate_dimensions(dimensions: &BoxDimensions, thickness: f64) -> CamToolResult<()> {
        for role in EdgeRole::ALL {
            let value = dimensions.get(role);
            if !value.is_finite() || value <= 0.0 {
                return Err(CamToolError::InvalidDimension {
                    name: role.to_string(),
                    value,
                    reason: "must be a positive number".to_string(),
                });
            }
            let pairs = role_pair_count(role, value, thickness);
            if pairs > MAX_NOTCH_PAIRS {
                return Err(CamToolError::InvalidDimension {
                    name: role.to_string(),
                    value,
                    reason: format!(
                        "too large for {} material (at most {} notch pairs per edge)",
                        thickness, MAX_NOTCH_PAIRS
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn dimensions(&self) -> &BoxDimensions {
        &self.dimensions
    }

    pub fn params(&self) -> &ProcessParameters {
        &self.params
    }

    pub fn socket_run(&self, role: EdgeRole) -> &SocketRun {
        match role {
            EdgeRole::Length => &self.length_run,
            EdgeRole::Width => &self.width_run,
            EdgeRole::Height => &self.height_run,
        }
    }

    /// How far notches and tabs reach into or out of a panel.
    pub fn cut_depth(&self, use_offsets: bool) -> f64 {
        if use_offsets {
            self.params.thickness - self.params.depth_offset
        } else {
            self.params.thickness
        }
    }

    fn notch_trim(&self, use_offsets: bool) -> f64 {
        if use_offsets {
            self.params.length_offset
        } else {
            0.0
        }
    }

    /// Closed outline for one panel shape, top-left of its bounds at (0, 0).
    pub fn panel_outline(&self, shape: PanelShape, use_offsets: bool) -> Path {
        let d = self.cut_depth(use_offsets);
        let trim = self.notch_trim(use_offsets);
        let BoxDimensions {
            length,
            width,
            height,
        } = self.dimensions;

        let mut path = Path::new();
        match shape {
            PanelShape::FrontBack => {
                path.add_point(0.0, 0.0);
                self.edge(EdgeRole::Height, EdgeDirection::Vertical, 0.0, d, false, trim)
                    .push_onto(&mut path);
                path.add_point(0.0, height);
                self.edge(EdgeRole::Width, EdgeDirection::Horizontal, height, height - d, false, trim)
                    .push_onto(&mut path);
                path.add_point(width, height);
                self.edge(EdgeRole::Height, EdgeDirection::Vertical, width, width - d, true, trim)
                    .push_onto(&mut path);
                path.add_point(width, 0.0);
            }
            PanelShape::Side => {
                path.add_point(d, 0.0);
                self.edge(EdgeRole::Height, EdgeDirection::Vertical, d, 0.0, false, 0.0)
                    .push_onto(&mut path);
                path.add_point(d, height);
                self.edge(EdgeRole::Length, EdgeDirection::Horizontal, height, height - d, false, trim)
                    .push_onto(&mut path);
                path.add_point(length - d, height);
                self.edge(EdgeRole::Height, EdgeDirection::Vertical, length - d, length, true, 0.0)
                    .push_onto(&mut path);
                path.add_point(length - d, 0.0);
            }
            PanelShape::Bottom => {
                path.add_point(d, d);
                self.edge(EdgeRole::Width, EdgeDirection::Vertical, d, 0.0, false, 0.0)
                    .push_onto(&mut path);
                path.add_point(d, width - d);
                self.edge(EdgeRole::Length, EdgeDirection::Horizontal, width - d, width, false, 0.0)
                    .push_onto(&mut path);
                path.add_point(length - d, width - d);
                self.edge(EdgeRole::Width, EdgeDirection::Vertical, length - d, length, true, 0.0)
                    .push_onto(&mut path);
                path.add_point(length - d, d);
                self.edge(EdgeRole::Length, EdgeDirection::Horizontal, d, 0.0, true, 0.0)
                    .push_onto(&mut path);
            }
        }

        debug!(shape = %shape, points = path.len(), use_offsets, "Generated panel outline");
        path
    }

    fn edge(
        &self,
        role: EdgeRole,
        direction: EdgeDirection,
        base: f64,
        tip: f64,
        reversed: bool,
        trim: f64,
    ) -> JointEdge<'_> {
        JointEdge {
            run: self.socket_run(role),
            direction,
            base,
            tip,
            reversed,
            trim,
        }
    }

    /// Generate the reference square and all five panels, stacked top to bottom.
    pub fn generate(&self, use_offsets: bool) -> CamToolResult<BoxPlan> {
        let mut layout = StackLayout::new(self.params.spacing);

        let mut reference = reference_square();
        layout.place(&mut reference)?;

        let mut panels = Vec::with_capacity(Panel::ALL.len());
        for panel in Panel::ALL {
            let mut path = self.panel_outline(panel.shape(), use_offsets);
            layout.place(&mut path)?;
            panels.push(PanelOutline { panel, path });
        }

        info!(
            dimensions = %self.dimensions,
            thickness = self.params.thickness,
            use_offsets,
            "Generated box plan"
        );

        Ok(BoxPlan { reference, panels })
    }
}

/// Reference square plus the five stacked panel outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlan {
    pub reference: Path,
    pub panels: Vec<PanelOutline>,
}

impl BoxPlan {
    pub fn panel(&self, panel: Panel) -> Option<&PanelOutline> {
        self.panels.iter().find(|outline| outline.panel == panel)
    }

    /// Drawing size in output units: the widest outline and the full stack,
    /// each with `canvas_padding` added.
    pub fn canvas_size(&self, params: &ProcessParameters) -> CamToolResult<(f64, f64)> {
        let mut max_x = self.reference.max_x()?;
        let mut max_y = self.reference.max_y()?;
        for outline in &self.panels {
            let bounds = outline.path.bounding_box()?;
            max_x = max_x.max(bounds.max_x);
            max_y = max_y.max(bounds.max_y);
        }
        Ok((
            (max_x + params.canvas_padding) * params.scale,
            (max_y + params.canvas_padding) * params.scale,
        ))
    }

    /// Outline moved off the drawing edge and converted to output units.
    fn finished(path: &Path, params: &ProcessParameters) -> Path {
        let mut path = path.clone();
        path.shift(params.margin, params.margin)
            .scale(params.scale)
            .clean_up();
        path
    }

    pub fn to_svg(&self, params: &ProcessParameters) -> CamToolResult<SvgDocument> {
        let (width, height) = self.canvas_size(params)?;
        let mut doc = SvgDocument::new(width, height);

        doc.add_closed_path(&Self::finished(&self.reference, params))?;
        let (label_x, label_y) = REFERENCE_LABEL_POSITION;
        doc.add_text(
            &params.unit.square_label(REFERENCE_SQUARE_SIZE),
            label_x,
            label_y,
            REFERENCE_LABEL_FILL,
            REFERENCE_LABEL_STYLE,
        );

        for outline in &self.panels {
            doc.add_closed_path(&Self::finished(&outline.path, params))?;
        }

        Ok(doc)
    }
}
