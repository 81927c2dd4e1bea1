// File: crates/trend-core/tests/transition.rs
// Purpose: Line transitions between scenarios: start/end geometry, color blending, interruption, easing.

use std::time::{Duration, Instant};

use trend_core::scenario::hex;
use trend_core::transition::{ease_cubic_in_out, Tween};
use trend_core::{ChartConfig, Point, TrendChart, FRAME_INTERVAL};

const CSV: &str = "\
year,temperature_anomaly,scenario
2000,0.5,ssp126
2050,1.0,ssp126
2100,1.2,ssp126
2000,0.5,ssp585
2050,2.0,ssp585
2100,4.0,ssp585
2000,0.5,ssp245
";

fn chart() -> TrendChart {
    TrendChart::from_reader(CSV.as_bytes(), ChartConfig::default()).expect("load")
}

fn ms(n: u64) -> Duration { Duration::from_millis(n) }

#[test]
fn first_draw_is_not_animated() {
    let c = chart();
    let now = Instant::now();
    assert!(!c.is_animating(now));
    assert_eq!(c.line_at(now), c.line_target().to_vec());
}

#[test]
fn path_moves_from_previous_to_target_over_one_second() {
    let mut c = chart();
    let before = c.line_target().to_vec();
    let t0 = Instant::now();
    c.update("ssp585", t0);
    let after = c.line_target().to_vec();
    assert_ne!(before, after);

    assert_eq!(c.line_at(t0), before);
    assert_eq!(hex(c.stroke_at(t0)), "#22c55e");

    let mid = c.line_at(t0 + ms(500));
    // Same x positions; y strictly between for the moving points.
    assert_eq!(mid[1].x, after[1].x);
    assert!(mid[2].y < before[2].y && mid[2].y > after[2].y);
    assert!(c.is_animating(t0 + ms(500)));

    assert_eq!(c.line_at(t0 + ms(1000)), after);
    assert_eq!(hex(c.stroke_at(t0 + ms(1000))), "#ef4444");
    assert!(!c.is_animating(t0 + ms(1000)));
    assert_eq!(c.settled_at(), t0 + ms(1000));
}

#[test]
fn shorter_target_drops_extra_points_immediately() {
    let mut c = chart();
    let before = c.line_target().to_vec();
    let t0 = Instant::now();
    c.update("ssp245", t0);
    let at0 = c.line_at(t0);
    assert_eq!(at0.len(), 1);
    assert_eq!(at0[0], before[0]);
}

#[test]
fn interrupted_transition_continues_from_current_geometry() {
    let mut c = chart();
    let t0 = Instant::now();
    c.update("ssp585", t0);
    let shown = c.line_at(t0 + ms(300));

    c.update("ssp126", t0 + ms(300));
    assert_eq!(c.line_at(t0 + ms(300)), shown);
    assert_eq!(c.settled_at(), t0 + ms(1300));
}

#[test]
fn empty_target_clears_path_at_once() {
    let mut c = chart();
    let t0 = Instant::now();
    c.update("none", t0);
    assert!(c.line_at(t0).is_empty());
}

#[test]
fn easing_is_symmetric_cubic() {
    assert_eq!(ease_cubic_in_out(0.0), 0.0);
    assert_eq!(ease_cubic_in_out(0.5), 0.5);
    assert_eq!(ease_cubic_in_out(1.0), 1.0);
    assert!((ease_cubic_in_out(0.25) - 0.0625).abs() < 1e-12);
    assert!((ease_cubic_in_out(0.75) - 0.9375).abs() < 1e-12);
}

#[test]
fn path_tween_takes_extra_target_points_as_is() {
    let t0 = Instant::now();
    let from = vec![Point::new(0.0, 0.0)];
    let to = vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)];
    let tween = Tween::new(from, to.clone(), t0, ms(100));
    let mid = tween.sample(t0 + ms(50));
    assert_eq!(mid[0], Point::new(5.0, 5.0));
    assert_eq!(mid[1], to[1]);
}

#[test]
fn frames_are_scheduled_until_the_transition_settles() {
    let mut c = chart();
    let t0 = Instant::now();
    assert_eq!(c.next_frame_at(t0), None, "nothing to animate after load");

    c.update("ssp585", t0);
    assert_eq!(c.next_frame_at(t0), Some(t0 + FRAME_INTERVAL));
    let late = t0 + ms(990);
    assert_eq!(c.next_frame_at(late), Some(late + FRAME_INTERVAL));
    assert_eq!(c.next_frame_at(t0 + ms(1000)), None);
}
