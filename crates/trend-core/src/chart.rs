// File: crates/trend-core/src/chart.rs
// Summary: TrendChart owns the loaded dataset, scales, axes, active scenario, scene and tooltip.
// Notes:
// - Scales and axes are computed once from the whole dataset and never change afterwards.
// - Filtered records keep file order; the line is not sorted by year.
// - Rendering lives in `render.rs`; everything here is plain state.

use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

use skia_safe as skia;
use tracing::{debug, warn};

use crate::axis::{Axis, AxisOrient};
use crate::error::DataFormatError;
use crate::geometry::{Point, RectI32};
use crate::record::{Dataset, Record};
use crate::scale::{LinearScale, TickFormat, DEFAULT_TICK_COUNT};
use crate::scenario::{stroke_color, SSP126};
use crate::scene::{Marker, ReconcileStats, Scene};
use crate::tooltip::{Tooltip, TooltipState};
use crate::transition::Tween;
use crate::types::{Insets, HEIGHT, WIDTH};

pub const DEFAULT_TITLE: &str = "Global Mean Temperature Anomaly (\u{b0}C)";

/// Redraw interval for hosts while a transition is running (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Layout and behavior knobs. `Default` reproduces the stock 750×400 chart.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub title: String,
    /// Scenario drawn right after loading.
    pub initial_scenario: String,
    pub line_duration: Duration,
    pub fade_duration: Duration,
    pub stroke_width: f32,
    pub marker_radius: f32,
    /// Extra pointer tolerance around markers, on top of `marker_radius`.
    pub hover_slop: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            title: DEFAULT_TITLE.to_string(),
            initial_scenario: SSP126.to_string(),
            line_duration: Duration::from_millis(1000),
            fade_duration: Duration::from_millis(200),
            stroke_width: 2.5,
            marker_radius: 3.0,
            hover_slop: 2.0,
        }
    }
}

/// Render state of the chart: everything `update` and hover handlers read or write.
pub struct TrendChart {
    config: ChartConfig,
    dataset: Dataset,
    plot: RectI32,
    x: LinearScale,
    y: LinearScale,
    x_axis: Axis,
    y_axis: Axis,
    active: String,
    line: Tween<Vec<Point>>,
    stroke: Tween<skia::Color>,
    drawn: bool,
    scene: Scene,
    tooltip: Tooltip,
    pointer: Option<Point>,
    hovered: Option<Marker>,
}

impl TrendChart {
    /// Load a CSV file and draw the initial scenario.
    pub fn load(path: impl AsRef<Path>, config: ChartConfig) -> Result<Self, DataFormatError> {
        let dataset = Dataset::from_path(path)?;
        Self::new(dataset, config)
    }

    pub fn from_reader<R: Read>(reader: R, config: ChartConfig) -> Result<Self, DataFormatError> {
        Self::new(Dataset::from_reader(reader)?, config)
    }

    /// Build scales and axes from the full dataset, then draw `config.initial_scenario`.
    pub fn new(dataset: Dataset, config: ChartConfig) -> Result<Self, DataFormatError> {
        let (y0, y1) = dataset.year_extent().ok_or(DataFormatError::Empty)?;
        let (a0, a1) = dataset.anomaly_extent().ok_or(DataFormatError::Empty)?;

        let plot = RectI32::plot_area(config.width, config.height, &config.insets);
        let (w, h) = (plot.width() as f64, plot.height() as f64);
        let x = LinearScale::new((y0 as f64, y1 as f64), (0.0, w));
        let y = LinearScale::new((a0, a1), (h, 0.0)).nice(DEFAULT_TICK_COUNT);

        let x_axis = Axis::new(AxisOrient::Bottom, &x, TickFormat::Integer);
        let y_axis = Axis::with_default_format(AxisOrient::Left, &y);
        debug!(x_domain = ?x.domain(), y_domain = ?y.domain(), "scales built");

        let now = Instant::now();
        let initial = config.initial_scenario.clone();
        let mut chart = Self {
            tooltip: Tooltip::new(config.fade_duration, now),
            config,
            dataset,
            plot,
            x,
            y,
            x_axis,
            y_axis,
            active: String::new(),
            line: Tween::settled(Vec::new(), now),
            stroke: Tween::settled(stroke_color(&initial), now),
            drawn: false,
            scene: Scene::new(),
            pointer: None,
            hovered: None,
        };
        chart.update(&initial, now);
        Ok(chart)
    }

    /// Switch the active scenario and redraw line and markers.
    /// Unknown labels are not an error: they select zero records.
    pub fn update(&mut self, scenario: &str, now: Instant) -> ReconcileStats {
        self.active = scenario.to_string();

        let (x, y) = (self.x, self.y);
        let filtered: Vec<&Record> = self.dataset.filter(scenario).collect();
        if filtered.is_empty() {
            warn!(scenario, "no records for scenario");
        }
        let points: Vec<Point> = filtered.iter().map(|r| project(&x, &y, r)).collect();
        let color = stroke_color(scenario);

        if self.drawn {
            self.line.retarget(points.clone(), now, self.config.line_duration);
            self.stroke.retarget(color, now, self.config.line_duration);
        } else {
            self.line = Tween::settled(points.clone(), now);
            self.stroke = Tween::settled(color, now);
            self.drawn = true;
        }

        let stats = self.scene.reconcile(filtered.into_iter().zip(points));
        debug!(scenario, ?stats, "scenario updated");

        self.refresh_hover(now);
        stats
    }

    /// Pointer moved to `p` (canvas units). Fires tooltip enter/leave as markers are crossed.
    pub fn pointer_moved(&mut self, p: Point, now: Instant) -> TooltipState {
        self.pointer = Some(p);
        self.refresh_hover(now);
        self.tooltip.state()
    }

    /// Pointer left the chart surface.
    pub fn pointer_left(&mut self, now: Instant) {
        self.pointer = None;
        if self.hovered.take().is_some() {
            self.tooltip.pointer_leave(now);
        }
    }

    /// Re-run hit testing at the last pointer position against the current markers.
    fn refresh_hover(&mut self, now: Instant) {
        let Some(p) = self.pointer else { return };
        let radius = self.config.marker_radius + self.config.hover_slop;
        let hit = self.scene.hit_test(self.plot.to_local(p), radius).cloned();

        let unchanged = matches!(
            (&self.hovered, &hit),
            (Some(prev), Some(m)) if prev.id == m.id && prev.datum == m.datum
        );
        if unchanged {
            return;
        }

        match hit {
            Some(m) => {
                debug!(year = m.datum.year, scenario = %m.datum.scenario, "pointer enter");
                self.tooltip.pointer_enter(&m.datum, p, now);
                self.hovered = Some(m);
            }
            None => {
                if self.hovered.take().is_some() {
                    debug!("pointer leave");
                    self.tooltip.pointer_leave(now);
                }
            }
        }
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn active_scenario(&self) -> &str { &self.active }
    pub fn x_scale(&self) -> &LinearScale { &self.x }
    pub fn y_scale(&self) -> &LinearScale { &self.y }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    /// Plot area inside the canvas margins.
    pub fn plot_area(&self) -> RectI32 { self.plot }
    pub fn markers(&self) -> &[Marker] { self.scene.markers() }
    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }
    pub fn hovered(&self) -> Option<&Marker> { self.hovered.as_ref() }

    /// Records of the active scenario, in file order.
    pub fn filtered(&self) -> Vec<&Record> {
        self.dataset.filter(&self.active).collect()
    }

    /// Line geometry (plot-local units) the current transition is heading to.
    pub fn line_target(&self) -> &[Point] { self.line.target() }
    pub fn stroke_target(&self) -> skia::Color { *self.stroke.target() }

    /// Line geometry as displayed at `now`.
    pub fn line_at(&self, now: Instant) -> Vec<Point> { self.line.sample(now) }
    pub fn stroke_at(&self, now: Instant) -> skia::Color { self.stroke.sample(now) }

    /// Canvas position of a marker, for hosts that synthesize pointer events.
    pub fn marker_canvas_point(&self, m: &Marker) -> Point {
        m.center.offset(self.plot.left as f32, self.plot.top as f32)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.line.is_running(now) || self.stroke.is_running(now) || self.tooltip.is_animating(now)
    }

    /// When the host should draw its next frame; `None` once everything has settled.
    pub fn next_frame_at(&self, now: Instant) -> Option<Instant> {
        self.is_animating(now).then(|| now + FRAME_INTERVAL)
    }

    /// First instant at which every running transition has finished.
    pub fn settled_at(&self) -> Instant {
        self.line.end().max(self.stroke.end()).max(self.tooltip.fade_end())
    }
}

fn project(x: &LinearScale, y: &LinearScale, r: &Record) -> Point {
    Point::new(x.map(r.year as f64) as f32, y.map(r.temperature_anomaly) as f32)
}
