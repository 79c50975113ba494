//! Minimal SVG document writer for cut plans.
//!
//! Paths are written as closed, unfilled, black-stroked outlines. Coordinates
//! are emitted as-is, so callers scale and clean them up first.

use crate::error::CamToolResult;
use boxjoint_core::{clean_coordinate, GeometryError, Path};

const STROKE: &str = "black";
const STROKE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    elements: Vec<String>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: clean_coordinate(width),
            height: clean_coordinate(height),
            elements: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Add `path` as `M first L rest… Z`.
    pub fn add_closed_path(&mut self, path: &Path) -> CamToolResult<()> {
        let (first, rest) = path
            .points()
            .split_first()
            .ok_or(GeometryError::EmptyPath)?;

        let mut d = format!("M{},{}", first.x, first.y);
        if !rest.is_empty() {
            d.push_str(" L");
            for p in rest {
                d.push_str(&format!("{},{} ", p.x, p.y));
            }
            d.pop();
        }
        d.push_str(" Z");

        self.elements.push(format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" />",
            d, STROKE, STROKE_WIDTH
        ));
        Ok(())
    }

    pub fn add_text(&mut self, text: &str, x: f64, y: f64, fill: &str, style: &str) {
        self.elements.push(format!(
            "<text fill=\"{}\" style=\"{}\" x=\"{}\" y=\"{}\">{}</text>",
            escape_attribute(fill),
            escape_attribute(style),
            x,
            y,
            escape_text(text)
        ));
    }

    pub fn render(&self) -> String {
        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        svg.push_str(&format!(
            "<svg baseProfile=\"full\" height=\"{}\" version=\"1.1\" width=\"{}\" \
             xmlns=\"http://www.w3.org/2000/svg\" xmlns:ev=\"http://www.w3.org/2001/xml-events\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\">\n",
            self.height, self.width
        ));
        svg.push_str("<defs />\n");
        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn save(&self, path: &std::path::Path) -> CamToolResult<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
