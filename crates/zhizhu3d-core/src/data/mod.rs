//! Data models for editor geometry and catalogs
//!
//! This module provides:
//! - Points and axis-aligned rectangles in editor pixel space
//! - Furniture presets
//! - The catalog of room types and lighting styles
//! - Request/response types of the generation service

pub mod catalog;
pub mod generation;
pub mod presets;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in editor pixel space (origin top-left, y down).
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

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle in editor pixel space.
///
/// `x`/`y` is the top-left corner. Width and height are never negative
/// once a rectangle is built through [`Rect::new`] or [`Rect::from_corners`].
/// Deserialization goes through [`Rect::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RectFields")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Deserialize)]
struct RectFields {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl From<RectFields> for Rect {
    fn from(r: RectFields) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl Rect {
    /// Creates a rectangle, clamping negative extents to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Bounding box spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when `other` lies entirely within this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Moves the top-left corner, keeping the size.
    pub fn moved_to(&self, x: f64, y: f64) -> Self {
        Self { x, y, ..*self }
    }

    /// Position that keeps this rectangle inside `bounds` when moved to `(x, y)`.
    ///
    /// A rectangle larger than `bounds` is pinned to the bounds' top-left.
    pub fn clamp_position(&self, x: f64, y: f64, bounds: &Rect) -> Point {
        let max_x = (bounds.right() - self.width).max(bounds.x);
        let max_y = (bounds.bottom() - self.height).max(bounds.y);
        Point::new(x.clamp(bounds.x, max_x), y.clamp(bounds.y, max_y))
    }

    /// Intersection with `bounds`; an empty rectangle at the clamped
    /// origin when they do not overlap.
    pub fn clamped_to(&self, bounds: &Rect) -> Self {
        let x1 = self.x.clamp(bounds.x, bounds.right());
        let y1 = self.y.clamp(bounds.y, bounds.bottom());
        let x2 = self.right().clamp(bounds.x, bounds.right());
        let y2 = self.bottom().clamp(bounds.y, bounds.bottom());
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }
}
