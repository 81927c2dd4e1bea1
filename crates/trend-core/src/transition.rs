// File: crates/trend-core/src/transition.rs
// Summary: Bounded-duration transitions: cubic in-out easing, tweens over values, paths and colors.
// Notes:
// - Time is always passed in explicitly; nothing here reads a clock.
// - Starting a new tween from `sample(now)` of the old one gives interrupt-and-continue behavior.

use std::time::{Duration, Instant};

use skia_safe as skia;

use crate::geometry::Point;

/// Cubic in-out easing on `t ∈ [0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Values that can be interpolated by a tween.
pub trait Lerp: Clone {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t as f32
    }
}

impl Lerp for skia::Color {
    /// Straight RGB(A) channel interpolation.
    fn lerp(&self, to: &Self, t: f64) -> Self {
        let ch = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8 };
        skia::Color::from_argb(ch(self.a(), to.a()), ch(self.r(), to.r()), ch(self.g(), to.g()), ch(self.b(), to.b()))
    }
}

impl Lerp for Vec<Point> {
    /// Pointwise over the common prefix; any remaining target points are taken as-is,
    /// and source points beyond the target length are dropped.
    fn lerp(&self, to: &Self, t: f64) -> Self {
        to.iter()
            .enumerate()
            .map(|(i, b)| match self.get(i) {
                Some(a) => Point::new(a.x.lerp(&b.x, t), a.y.lerp(&b.y, t)),
                None => *b,
            })
            .collect()
    }
}

/// A value moving from `from` to `to` over `[start, start + duration]`.
#[derive(Clone, Debug)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start: Instant, duration: Duration) -> Self {
        Self { from, to, start, duration }
    }

    /// Already at rest on `value`.
    pub fn settled(value: T, now: Instant) -> Self {
        Self { from: value.clone(), to: value, start: now, duration: Duration::ZERO }
    }

    pub fn target(&self) -> &T { &self.to }
    pub fn end(&self) -> Instant { self.start + self.duration }

    /// Linear progress in `[0, 1]`; instants before `start` count as 0.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    /// Eased value at `now`.
    pub fn sample(&self, now: Instant) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, ease_cubic_in_out(p))
    }

    /// Retarget from wherever the tween currently is.
    pub fn retarget(&mut self, to: T, now: Instant, duration: Duration) {
        let from = self.sample(now);
        *self = Self::new(from, to, now, duration);
    }
}
