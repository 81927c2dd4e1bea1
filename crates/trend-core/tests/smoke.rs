// File: crates/trend-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test: CSV in, PNG out.

use trend_core::{ChartConfig, RenderOptions, TrendChart};

const CSV: &str = "\
year,temperature_anomaly,scenario
2000,0.42,ssp126
2025,0.91,ssp126
2050,1.30,ssp126
2000,0.45,ssp245
2025,1.05,ssp245
2050,1.88,ssp245
2000,0.47,ssp585
2025,1.21,ssp585
2050,2.64,ssp585
";

#[test]
fn render_smoke_png() {
    let chart = TrendChart::from_reader(CSV.as_bytes(), ChartConfig::default()).expect("load");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (750, 400));
}

#[test]
fn render_scaled_png() {
    let chart = TrendChart::from_reader(CSV.as_bytes(), ChartConfig::default()).expect("load");
    let mut opts = RenderOptions::default();
    opts.scale = 2.0;
    opts.draw_labels = false;

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (1500, 800));
}

#[test]
fn render_unknown_scenario_does_not_fail() {
    let mut chart = TrendChart::from_reader(CSV.as_bytes(), ChartConfig::default()).expect("load");
    chart.update("unknown_scenario", std::time::Instant::now());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("empty chart still renders");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn non_positive_scale_is_clamped_consistently() {
    let chart = TrendChart::from_reader(CSV.as_bytes(), ChartConfig::default()).expect("load");
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.scale = trend_core::render::MIN_SCALE;
    let smallest = chart.surface_size(&opts);
    assert!(smallest.0 >= 1 && smallest.1 >= 1);

    for bad in [0.0, -1.0, f32::NAN] {
        opts.scale = bad;
        assert_eq!(opts.pixel_scale(), trend_core::render::MIN_SCALE, "scale {bad}");
        assert_eq!(chart.surface_size(&opts), smallest);
    }

    opts.scale = -2.0;
    let flipped = chart.render_to_rgba8(&opts).expect("render");
    opts.scale = trend_core::render::MIN_SCALE;
    let tiny = chart.render_to_rgba8(&opts).expect("render");
    assert_eq!(flipped, tiny, "negative scale must not mirror the drawing");
}
