// File: crates/trend-core/src/axis.rs
// Summary: Axis model: orientation, tick positions and labels laid out once from a scale.

use crate::scale::{LinearScale, TickFormat, DEFAULT_TICK_COUNT};

/// Length of tick marks (inner and outer), in logical units.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal, along the bottom edge of the plot; ticks point down.
    Bottom,
    /// Vertical, along the left edge of the plot; ticks point left.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Offset along the axis in plot-local units.
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Extent of the domain line along the axis (range endpoints).
    pub range: (f32, f32),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Lay out ticks for `scale` with an explicit label format.
    pub fn new(orient: AxisOrient, scale: &LinearScale, format: TickFormat) -> Self {
        let (r0, r1) = scale.range();
        let ticks = scale
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|value| Tick { value, offset: scale.map(value) as f32, label: format.format(value) })
            .collect();
        Self { orient, range: (r0 as f32, r1 as f32), ticks }
    }

    /// Axis using the scale's own default format.
    pub fn with_default_format(orient: AxisOrient, scale: &LinearScale) -> Self {
        Self::new(orient, scale, scale.tick_format(DEFAULT_TICK_COUNT))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ticks.iter().map(|t| t.label.as_str())
    }
}
