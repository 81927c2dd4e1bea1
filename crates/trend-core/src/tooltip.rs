// File: crates/trend-core/src/tooltip.rs
// Summary: Hover tooltip with a Hidden/Shown state machine and faded opacity.

use std::time::{Duration, Instant};

use crate::geometry::Point;
use crate::record::Record;
use crate::transition::Tween;

/// Tooltip anchor relative to the pointer at enter time.
pub const POINTER_OFFSET: (f32, f32) = (10.0, -25.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Shown,
}

/// Text shown for a hovered record; the anomaly is rounded to 2 decimals.
pub fn tooltip_lines(record: &Record) -> Vec<String> {
    vec![
        format!("Year: {}", record.year),
        format!("\u{394}T: {:.2}\u{b0}C", record.temperature_anomaly),
    ]
}

#[derive(Clone, Debug)]
pub struct Tooltip {
    state: TooltipState,
    opacity: Tween<f32>,
    lines: Vec<String>,
    anchor: Point,
    fade: Duration,
}

impl Tooltip {
    pub fn new(fade: Duration, now: Instant) -> Self {
        Self {
            state: TooltipState::Hidden,
            opacity: Tween::settled(0.0, now),
            lines: Vec::new(),
            anchor: Point::new(0.0, 0.0),
            fade,
        }
    }

    pub fn state(&self) -> TooltipState { self.state }
    pub fn lines(&self) -> &[String] { &self.lines }
    pub fn text(&self) -> String { self.lines.join("\n") }
    /// Top-left of the tooltip box, in canvas units.
    pub fn anchor(&self) -> Point { self.anchor }

    /// Hidden|Shown → Shown. Content and position are taken at enter time only.
    pub fn pointer_enter(&mut self, record: &Record, pointer: Point, now: Instant) {
        self.lines = tooltip_lines(record);
        self.anchor = pointer.offset(POINTER_OFFSET.0, POINTER_OFFSET.1);
        self.state = TooltipState::Shown;
        self.opacity.retarget(1.0, now, self.fade);
    }

    /// Shown → Hidden. Text is kept so the fade-out still shows it.
    pub fn pointer_leave(&mut self, now: Instant) {
        if self.state == TooltipState::Hidden {
            return;
        }
        self.state = TooltipState::Hidden;
        self.opacity.retarget(0.0, now, self.fade);
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        self.opacity.sample(now).clamp(0.0, 1.0)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.opacity.is_running(now)
    }

    pub fn fade_end(&self) -> Instant {
        self.opacity.end()
    }
}
