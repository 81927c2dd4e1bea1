// File: crates/trend-core/src/scale.rs
// Summary: Linear domain→range scale with inversion, nice-ified domains, tick generation and tick formatting.
// Notes:
// - Step selection uses 1/2/5 × 10^k increments with the √50/√10/√2 thresholds,
//   so tick positions and nice bounds line up with common charting libraries.
// - Negative increments encode steps below 1 as their reciprocal to keep tick
//   values exact (0.1 is computed as 1/10 rather than accumulated).

/// Tick count used for nice-ification and axis ticks when none is given.
pub const DEFAULT_TICK_COUNT: usize = 10;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Affine map from a domain interval to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    /// Domain → range. A zero-width domain maps everything to the range midpoint.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + normalize(d0, d1, v) * (r1 - r0)
    }

    /// Range → domain; inverse of [`map`](Self::map) for non-degenerate scales.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        d0 + normalize(r0, r1, px) * (d1 - d0)
    }

    /// Expand the domain outward to multiples of the tick step.
    /// Iterates until the step stops changing; degenerate or non-finite domains are left alone.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        if !(start.is_finite() && stop.is_finite()) || start == stop || count == 0 {
            return self;
        }

        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if prestep == Some(step) {
                self.domain = if reversed { (stop, start) } else { (start, stop) };
                return self;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }

    /// Roughly `count` evenly spaced round values inside the domain, ascending with the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    /// Signed distance between adjacent ticks for `count`.
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count as f64)
    }

    /// Default label format: fixed decimals just precise enough to tell ticks apart.
    pub fn tick_format(&self, count: usize) -> TickFormat {
        TickFormat::for_step(self.tick_step(count))
    }
}

#[inline]
fn normalize(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span == 0.0 || span.is_nan() { 0.5 } else { (v - a) / span }
}

/// Returns `(i1, i2, inc)`: tick indices and the increment, negative when it encodes 1/|inc|.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let p = 10f64.powf(-power) / factor;
        i1 = (start * p).round();
        i2 = (stop * p).round();
        if i1 / p < start { i1 += 1.0; }
        if i2 / p > stop { i2 -= 1.0; }
        inc = -p;
    } else {
        let p = 10f64.powf(power) * factor;
        i1 = (start / p).round();
        i2 = (stop / p).round();
        if i1 * p < start { i1 += 1.0; }
        if i2 * p > stop { i2 -= 1.0; }
        inc = p;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reversed = stop < start;
    let inc = if reversed { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reversed { -step } else { step }
}

fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reversed = stop < start;
    let (i1, i2, inc) = if reversed { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|i| {
            let k = if reversed { i2 - i as f64 } else { i1 + i as f64 };
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect()
}

/// How an axis turns tick values into labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Rounded to a whole number, no digit grouping (years).
    Integer,
    /// Fixed decimals with thousands grouping.
    Fixed { precision: usize },
}

impl TickFormat {
    /// Precision is the number of decimals needed to represent `step` (0 for steps ≥ 1).
    pub fn for_step(step: f64) -> Self {
        let step = step.abs();
        if !step.is_finite() || step == 0.0 {
            return TickFormat::Fixed { precision: 0 };
        }
        let precision = (-decimal_exponent(step)).max(0) as usize;
        TickFormat::Fixed { precision }
    }

    pub fn format(&self, v: f64) -> String {
        match *self {
            TickFormat::Integer => with_sign(v < 0.0, format!("{:.0}", v.round().abs())),
            TickFormat::Fixed { precision } => {
                let body = format!("{:.*}", precision, v.abs());
                let (int, frac) = match body.split_once('.') {
                    Some((i, f)) => (i.to_string(), Some(f.to_string())),
                    None => (body.clone(), None),
                };
                let mut out = group_thousands(&int);
                if let Some(f) = frac {
                    out.push('.');
                    out.push_str(&f);
                }
                with_sign(v < 0.0, out)
            }
        }
    }
}

/// Base-10 exponent of `x` as in scientific notation (`0.5` → -1, `20` → 1).
fn decimal_exponent(x: f64) -> i32 {
    let s = format!("{:e}", x);
    s.split_once('e').and_then(|(_, e)| e.parse::<i32>().ok()).unwrap_or(0)
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Prefix a typographic minus unless the formatted magnitude is all zeros.
fn with_sign(negative: bool, magnitude: String) -> String {
    let is_zero = magnitude.chars().all(|c| matches!(c, '0' | '.' | ','));
    if negative && !is_zero { format!("\u{2212}{magnitude}") } else { magnitude }
}
