// File: crates/trend-core/src/types.rs
// Summary: Shared layout constants (canvas size, margins) and the plot-area insets type.

/// Default canvas width in logical units, margins included.
pub const WIDTH: i32 = 750;
/// Default canvas height in logical units, margins included.
pub const HEIGHT: i32 = 400;

/// Canvas margins around the plot area, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// top 30, right 40, bottom 40, left 60; leaves a 650×330 plot on the default canvas.
    fn default() -> Self {
        Self::new(60, 40, 30, 40)
    }
}
