//! Point sequences for panel outlines.
//!
//! A [`Path`] is an ordered list of points that is implicitly closed: the last
//! point connects back to the first. Transforms mutate the path in place and
//! return `&mut Self` so calls can be chained.

use crate::error::{GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};

/// Decimal digits kept by [`Path::clean_up`].
pub const CLEAN_UP_DECIMALS: usize = 12;

/// A 2D point in the plan's linear unit (or output units once scaled).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis to mirror across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Mirror across the x-axis (negates y).
    X,
    /// Mirror across the y-axis (negates x).
    Y,
}

/// Axis-aligned bounds of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Ordered, implicitly closed sequence of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Append a point.
    pub fn add_point(&mut self, x: f64, y: f64) -> &mut Self {
        self.points.push(Point::new(x, y));
        self
    }

    pub fn push(&mut self, point: Point) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Append every point of `other`, in order. Duplicates are kept.
    pub fn join(&mut self, other: &Path) -> &mut Self {
        self.points.extend_from_slice(&other.points);
        self
    }

    pub fn shift(&mut self, dx: f64, dy: f64) -> &mut Self {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
        self
    }

    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for p in &mut self.points {
            p.x *= factor;
            p.y *= factor;
        }
        self
    }

    pub fn mirror(&mut self, axis: Axis) -> &mut Self {
        for p in &mut self.points {
            match axis {
                Axis::X => p.y = -p.y,
                Axis::Y => p.x = -p.x,
            }
        }
        self
    }

    /// Round every coordinate to [`CLEAN_UP_DECIMALS`] digits so values like
    /// `12.999999999999998` come out as `13.0`.
    pub fn clean_up(&mut self) -> &mut Self {
        for p in &mut self.points {
            p.x = clean_coordinate(p.x);
            p.y = clean_coordinate(p.y);
        }
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_x(&self) -> GeometryResult<f64> {
        self.bounding_box().map(|b| b.min_x)
    }

    pub fn max_x(&self) -> GeometryResult<f64> {
        self.bounding_box().map(|b| b.max_x)
    }

    pub fn min_y(&self) -> GeometryResult<f64> {
        self.bounding_box().map(|b| b.min_y)
    }

    pub fn max_y(&self) -> GeometryResult<f64> {
        self.bounding_box().map(|b| b.max_y)
    }

    /// Bounds over all points. An empty path has no bounds and fails with
    /// [`GeometryError::EmptyPath`].
    pub fn bounding_box(&self) -> GeometryResult<BoundingBox> {
        let first = self.points.first().ok_or(GeometryError::EmptyPath)?;
        let init = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Ok(self.points.iter().fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Segments of the closed path, including the closing segment from the
    /// last point back to the first.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area; the sign gives the winding direction.
    pub fn signed_area(&self) -> f64 {
        self.segments()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum::<f64>()
            / 2.0
    }
}

/// Round one value to [`CLEAN_UP_DECIMALS`] digits, folding `-0.0` into `0.0`.
pub fn clean_coordinate(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = format!("{:.*}", CLEAN_UP_DECIMALS, value)
        .parse::<f64>()
        .unwrap_or(value);
    rounded + 0.0
}
