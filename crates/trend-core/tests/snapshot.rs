// File: crates/trend-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow, one snapshot per scenario.
// Behavior:
// - Renders a deterministic chart (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, writes it so the next run compares against it.
// - Independently of goldens, every scenario image is checked for its stroke color
//   and for the absence of the other scenarios' colors.

use std::time::Instant;

use trend_core::{ChartConfig, RenderOptions, TrendChart};

const CSV: &str = "\
year,temperature_anomaly,scenario
2000,0.40,ssp126
2020,0.85,ssp126
2040,1.20,ssp126
2060,1.35,ssp126
2080,1.30,ssp126
2100,1.25,ssp126
2000,0.40,ssp245
2020,0.90,ssp245
2040,1.45,ssp245
2060,1.90,ssp245
2080,2.25,ssp245
2100,2.50,ssp245
2000,0.40,ssp585
2020,0.95,ssp585
2040,1.75,ssp585
2060,2.60,ssp585
2080,3.45,ssp585
2100,4.30,ssp585
";

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write new snapshot");
        eprintln!("[snapshot] Created {}; review and commit it.", path.display());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stroke {
    Green,
    Yellow,
    Red,
}

/// Classify clearly saturated pixels by scenario stroke; chrome (black/white/gray) is ignored.
fn classify(px: &[u8]) -> Option<Stroke> {
    let (r, g, b) = (px[0] as i32, px[1] as i32, px[2] as i32);
    let chroma = r.max(g).max(b) - r.min(g).min(b);
    if chroma <= 100 {
        None
    } else if r > 180 && g > 150 && b < 120 {
        Some(Stroke::Yellow)
    } else if g > r + 40 {
        Some(Stroke::Green)
    } else if r > g + 100 {
        Some(Stroke::Red)
    } else {
        None
    }
}

fn assert_only_stroke(bytes: &[u8], want: Stroke) {
    let img = image::load_from_memory(bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (750, 400));

    let mut counts = [0usize; 3];
    for px in img.pixels() {
        if let Some(s) = classify(&px.0) {
            counts[s as usize] += 1;
        }
    }
    let (hit, total): (usize, usize) = (counts[want as usize], counts.iter().sum());
    assert!(hit > 200, "too few {want:?} stroke pixels: {counts:?}");
    assert_eq!(hit, total, "other scenario colors present: {counts:?}");
}

fn render_scenario(scenario: &str) -> Vec<u8> {
    let mut chart = TrendChart::from_reader(CSV.as_bytes(), ChartConfig::default()).expect("load");
    chart.update(scenario, Instant::now());

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_ssp126() {
    let bytes = render_scenario("ssp126");
    assert_only_stroke(&bytes, Stroke::Green);
    write_or_compare(&snapshot_path("ssp126.png"), &bytes);
}

#[test]
fn golden_ssp245() {
    let bytes = render_scenario("ssp245");
    assert_only_stroke(&bytes, Stroke::Yellow);
    write_or_compare(&snapshot_path("ssp245.png"), &bytes);
}

#[test]
fn golden_ssp585() {
    let bytes = render_scenario("ssp585");
    assert_only_stroke(&bytes, Stroke::Red);
    write_or_compare(&snapshot_path("ssp585.png"), &bytes);
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(
        image::load_from_memory(&render_scenario("ssp245")).expect("decode").to_rgba8().as_raw(),
        image::load_from_memory(&render_scenario("ssp245")).expect("decode").to_rgba8().as_raw(),
    );
}
