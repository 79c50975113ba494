//! Vertical stacking of outlines on the drawing.

use crate::error::CamToolResult;
use boxjoint_core::Path;

/// Places outlines top to bottom, each one `spacing` below the previous.
#[derive(Clone, Copy, Debug)]
pub struct StackLayout {
    y: f64,
    spacing: f64,
}

impl StackLayout {
    pub fn new(spacing: f64) -> Self {
        Self { y: 0.0, spacing }
    }

    /// Shift `path` down to the cursor and advance past its lowest point.
    ///
    /// Outlines are generated with their top edge at y = 0, so the path is
    /// shifted by the cursor value rather than re-anchored on its min y.
    pub fn place(&mut self, path: &mut Path) -> CamToolResult<()> {
        path.shift(0.0, self.y);
        self.y = path.max_y()? + self.spacing;
        Ok(())
    }

    /// Where the next outline will start.
    pub fn cursor(&self) -> f64 {
        self.y
    }
}
