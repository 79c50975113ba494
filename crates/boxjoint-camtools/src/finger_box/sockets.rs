//! Socket placement along a single box edge.
//!
//! Positions are measured from one end of the edge and never include the two
//! endpoints. Consecutive positions pair up as (notch start, notch end). The
//! kerf offsets are not applied here; the outline walk adds them.

use super::types::EdgeRole;
use crate::error::{CamToolError, CamToolResult};

/// Width of one notch, in multiples of material thickness.
pub const NOTCH_WIDTH_FACTOR: f64 = 2.0;

/// Most notch pairs one edge may carry.
pub const MAX_NOTCH_PAIRS: usize = 100_000;

/// Number of whole notch pairs (one notch plus one tooth) that fit in `span`.
///
/// Always rounds toward fewer notches: leftover length becomes extra solid
/// material at the ends of the pattern, never a partial notch. Spans that are
/// negative or not finite give zero.
pub fn notch_pair_count(span: f64, notch_width: f64) -> usize {
    if !span.is_finite() || notch_width.is_nan() || notch_width <= 0.0 || span <= 0.0 {
        return 0;
    }
    (span / (2.0 * notch_width)).floor() as usize
}

/// Notch boundary positions for one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct SocketRun {
    role: EdgeRole,
    positions: Vec<f64>,
}

impl SocketRun {
    /// Wrap raw positions, rejecting odd-length lists.
    pub fn from_positions(role: EdgeRole, positions: Vec<f64>) -> CamToolResult<Self> {
        if positions.len() % 2 != 0 {
            return Err(CamToolError::MalformedSocketRun {
                role: role.to_string(),
                len: positions.len(),
            });
        }
        Ok(Self { role, positions })
    }

    pub fn role(&self) -> EdgeRole {
        self.role
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn notch_count(&self) -> usize {
        self.positions.len() / 2
    }

    /// (start, end) pairs walking the edge forwards.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// (start, end) pairs walking the edge backwards, so `start > end`.
    pub fn pairs_reversed(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.chunks_exact(2).rev().map(|pair| (pair[1], pair[0]))
    }
}

/// Notch pairs an edge of length `dimension` playing `role` receives.
pub fn role_pair_count(role: EdgeRole, dimension: f64, thickness: f64) -> usize {
    let notch_width = NOTCH_WIDTH_FACTOR * thickness;
    match role {
        EdgeRole::Length => {
            notch_pair_count(dimension - 2.0 * thickness - notch_width, notch_width)
        }
        // Flanked by side-panel material, so no corner reservation
        EdgeRole::Width => notch_pair_count(dimension - notch_width, notch_width),
        EdgeRole::Height => notch_pair_count(dimension - thickness, notch_width),
    }
}

/// Socket positions for an edge of length `dimension` playing `role`.
///
/// Edges needing more than [`MAX_NOTCH_PAIRS`] get an empty run.
pub fn socket_positions(role: EdgeRole, dimension: f64, thickness: f64) -> SocketRun {
    let notch_width = NOTCH_WIDTH_FACTOR * thickness;
    let n = role_pair_count(role, dimension, thickness);
    let boundaries = match n.checked_mul(2) {
        Some(boundaries) if n <= MAX_NOTCH_PAIRS => boundaries,
        _ => 0,
    };

    let positions: Vec<f64> = match role {
        EdgeRole::Length | EdgeRole::Width => {
            centered_positions(dimension, notch_width, boundaries)
        }
        EdgeRole::Height => (0..boundaries)
            .map(|i| notch_width * (i as f64 + 1.0))
            .collect(),
    };

    SocketRun { role, positions }
}

fn centered_positions(dimension: f64, notch_width: f64, boundaries: usize) -> Vec<f64> {
    if boundaries == 0 {
        return Vec::new();
    }
    let shift = (dimension - (boundaries as f64 - 1.0) * notch_width) / 2.0;
    (0..boundaries)
        .map(|i| shift + notch_width * i as f64)
        .collect()
}
