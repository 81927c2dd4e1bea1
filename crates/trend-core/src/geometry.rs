// File: crates/trend-core/src/geometry.rs
// Summary: Lightweight geometry helpers for canvas/plot pixel math.

use crate::types::Insets;

/// A point in logical canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    pub fn distance(&self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Plot area left after subtracting `insets` from a `width`×`height` canvas.
    /// Degenerate canvases collapse to a zero-sized rect instead of going negative.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let w = (width - insets.hsum() as i32).max(0);
        let h = (height - insets.vsum() as i32).max(0);
        Self::from_ltwh(insets.left as i32, insets.top as i32, w, h)
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Translate a canvas point into this rect's local frame.
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.left as f32, p.y - self.top as f32)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
