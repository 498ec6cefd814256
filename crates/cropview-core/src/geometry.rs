//! Basic surface-space geometry: points and normalized rectangles.
//!
//! All values are in display-surface pixels (f64, origin top-left). The
//! selection gesture can be dragged in any direction, so rectangles are
//! always stored normalized with non-negative width and height.

use serde::{Deserialize, Serialize};

/// A point on the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with non-negative dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a normalized rectangle from the two endpoints of a drag.
    ///
    /// The result is independent of drag direction: dragging from (50, 50)
    /// to (10, 10) produces the same rectangle as (10, 10) to (50, 50).
    pub fn from_drag(start: Point, end: Point) -> Self {
        Self {
            x: start.x.min(end.x),
            y: start.y.min(end.y),
            width: (end.x - start.x).abs(),
            height: (end.y - start.y).abs(),
        }
    }

    /// A rectangle with zero width or height is treated as "no selection".
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
