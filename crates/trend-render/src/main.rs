// File: crates/trend-render/src/main.rs
// Summary: CLI that loads a scenario CSV and renders one PNG per selected scenario, optionally with a hover tooltip.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use tracing::{info, warn};
use trend_core::{theme, ChartConfig, RenderOptions, TrendChart};

#[derive(Parser, Debug)]
#[command(version, about = "Render scenario temperature-anomaly trend charts to PNG", long_about = None)]
struct Cli {
    /// CSV with `year`, `temperature_anomaly` and `scenario` columns
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Scenario to render (repeatable); defaults to the chart's initial scenario
    #[arg(short, long = "scenario")]
    scenarios: Vec<String>,

    /// Render every scenario found in the data
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "scenarios")]
    all: bool,

    /// Output directory
    #[arg(short, long, default_value = "target/out", value_hint = ValueHint::DirPath)]
    out: PathBuf,

    /// Show the tooltip for the marker of this year
    #[arg(long)]
    hover_year: Option<i32>,

    /// Theme preset name (light, dark, solarized-light, solarized-dark, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Output pixels per logical unit (must be > 0)
    #[arg(long, default_value_t = 1.0, value_parser = positive_scale)]
    scale: f32,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Skip text (labels, title, tooltip text)
    #[arg(long, action = ArgAction::SetTrue)]
    no_labels: bool,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();

    let cli = Cli::parse();

    let (path, used_alt) = resolve_path(&cli.input)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let mut config = ChartConfig::default();
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }
    let mut chart = TrendChart::load(&path, config)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;

    let scenarios: Vec<String> = if cli.all {
        chart.dataset().scenarios().iter().map(|s| s.to_string()).collect()
    } else if cli.scenarios.is_empty() {
        vec![chart.active_scenario().to_string()]
    } else {
        cli.scenarios.clone()
    };

    let opts = RenderOptions {
        scale: cli.scale,
        theme: theme::find(&cli.theme),
        draw_labels: !cli.no_labels,
    };
    if !opts.theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!(requested = %cli.theme, using = opts.theme.name, "unknown theme");
    }

    for scenario in &scenarios {
        let now = Instant::now();
        let stats = chart.update(scenario, now);
        info!(scenario = %scenario, records = chart.filtered().len(), ?stats, "rendering");

        if let Some(year) = cli.hover_year {
            hover_year(&mut chart, year, now);
        }

        let out = out_name(&cli.out, scenario);
        chart
            .render_to_png(&opts, &out)
            .with_context(|| format!("failed to render '{}'", out.display()))?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

fn positive_scale(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("scale must be a positive number, got {s}"))
    }
}

/// Move the pointer onto the marker for `year`, if the active scenario has one.
fn hover_year(chart: &mut TrendChart, year: i32, now: Instant) {
    let target = chart
        .markers()
        .iter()
        .find(|m| m.datum.year == year)
        .map(|m| chart.marker_canvas_point(m));
    match target {
        Some(p) => {
            chart.pointer_moved(p, now);
        }
        None => {
            chart.pointer_left(now);
            warn!(year, scenario = chart.active_scenario(), "no marker to hover");
        }
    }
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Output file name like <dir>/chart_<scenario>.png, with path-hostile characters replaced.
fn out_name(dir: &Path, scenario: &str) -> PathBuf {
    let safe: String = scenario
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let stem = if safe.is_empty() { "empty".to_string() } else { safe };
    dir.join(format!("chart_{stem}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_must_be_positive() {
        assert_eq!(positive_scale("2"), Ok(2.0));
        assert_eq!(positive_scale("0.5"), Ok(0.5));
        for bad in ["0", "-1", "NaN", "inf", "big"] {
            assert!(positive_scale(bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn cli_rejects_non_positive_scale() {
        assert!(Cli::try_parse_from(["trend-render", "data.csv", "--scale", "0"]).is_err());
        assert!(Cli::try_parse_from(["trend-render", "data.csv", "--scale=-2"]).is_err());
        let cli = Cli::try_parse_from(["trend-render", "data.csv", "--scale", "1.5"]).expect("valid args");
        assert_eq!(cli.scale, 1.5);
    }

    #[test]
    fn output_names_are_path_safe() {
        assert_eq!(out_name(Path::new("out"), "ssp126"), Path::new("out").join("chart_ssp126.png"));
        assert_eq!(out_name(Path::new("out"), "a/b c"), Path::new("out").join("chart_a_b_c.png"));
        assert_eq!(out_name(Path::new("out"), ""), Path::new("out").join("chart_empty.png"));
    }
}
