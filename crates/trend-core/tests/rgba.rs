// File: crates/trend-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use trend_core::{ChartConfig, RenderOptions, Theme, TrendChart};

const CSV: &str = "\
year,temperature_anomaly,scenario
2000,0.0,ssp126
2100,4.0,ssp126
";

#[test]
fn render_rgba8_buffer() {
    let chart = TrendChart::from_reader(CSV.as_bytes(), ChartConfig::default()).expect("load");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (750, 400));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is light-theme background (opaque white)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn line_pixels_use_scenario_color() {
    let chart = TrendChart::from_reader(CSV.as_bytes(), ChartConfig::default()).expect("load");
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, _h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // Line goes from plot (0, 330) to (650, 0); sample its midpoint in canvas units,
    // away from the markers at both ends.
    let (cx, cy) = (60 + 325, 30 + 165);
    assert!(cx < w as usize);
    let at = cy * stride + cx * 4;
    let (r, g, b) = (px[at], px[at + 1], px[at + 2]);
    // #22c55e: green dominates
    assert!(g > r && g > b, "expected green stroke, got rgb({r},{g},{b})");
}

#[test]
fn dark_theme_background() {
    let chart = TrendChart::from_reader(CSV.as_bytes(), ChartConfig::default()).expect("load");
    let mut opts = RenderOptions::default();
    opts.theme = Theme::dark();
    opts.draw_labels = false;
    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(trend_core::theme::find("Solarized-Dark").name, "solarized-dark");
    assert_eq!(trend_core::theme::find("no-such-theme").name, "light");
    assert_eq!(trend_core::theme::presets().len(), 5);
}
