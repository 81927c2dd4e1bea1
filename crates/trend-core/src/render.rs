// File: crates/trend-core/src/render.rs
// Summary: Headless rendering of a TrendChart using Skia CPU raster surfaces (PNG file/bytes, RGBA8 buffers).
// Notes:
// - Axes, title and markers are drawn in plot-local units under a margin translate;
//   the tooltip is drawn in canvas units because it is anchored to the pointer.
// - `*_at(now)` variants sample running transitions; the plain variants render the settled state.

use std::time::Instant;

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, AxisOrient, TICK_PADDING, TICK_SIZE};
use crate::chart::TrendChart;
use crate::geometry::{clamp, Point};
use crate::text::{HAnchor, TextShaper, VAnchor};
use crate::theme::Theme;

const TICK_FONT_SIZE: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_PADDING: f32 = 6.0;
const TOOLTIP_LINE_GAP: f32 = 2.0;

/// Smallest pixel scale a render will use.
pub const MIN_SCALE: f32 = 0.01;

pub struct RenderOptions {
    /// Output pixels per logical unit.
    pub scale: f32,
    pub theme: Theme,
    /// Text (tick labels, title, tooltip text) is skipped when false; used for deterministic snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, theme: Theme::light(), draw_labels: true }
    }
}

impl RenderOptions {
    /// `scale` as actually applied; non-finite values and values below `MIN_SCALE` become `MIN_SCALE`.
    pub fn pixel_scale(&self) -> f32 {
        if self.scale.is_finite() { self.scale.max(MIN_SCALE) } else { MIN_SCALE }
    }
}

impl TrendChart {
    /// Output surface size in pixels for `opts`.
    pub fn surface_size(&self, opts: &RenderOptions) -> (i32, i32) {
        let s = opts.pixel_scale();
        let w = ((self.config().width as f32) * s).round().max(1.0) as i32;
        let h = ((self.config().height as f32) * s).round().max(1.0) as i32;
        (w, h)
    }

    /// Render the settled chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Encode the settled chart as PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_to_png_bytes_at(opts, self.settled_at())
    }

    pub fn render_to_png_bytes_at(&self, opts: &RenderOptions, now: Instant) -> Result<Vec<u8>> {
        let mut surface = self.draw_surface(opts, now)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Settled chart as unpremultiplied RGBA8: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        self.render_to_rgba8_at(opts, self.settled_at())
    }

    pub fn render_to_rgba8_at(&self, opts: &RenderOptions, now: Instant) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.draw_surface(opts, now)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back raster pixels");
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn draw_surface(&self, opts: &RenderOptions, now: Instant) -> Result<skia::Surface> {
        let (w, h) = self.surface_size(opts);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts, now);
        Ok(surface)
    }

    /// Draw the whole chart as it looks at `now` onto `canvas`.
    pub fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions, now: Instant) {
        let theme = &opts.theme;
        let shaper = opts.draw_labels.then(TextShaper::new);
        let plot = self.plot_area();

        canvas.clear(theme.background);
        canvas.save();
        let s = opts.pixel_scale();
        canvas.scale((s, s));

        canvas.save();
        canvas.translate((plot.left as f32, plot.top as f32));
        draw_axis(canvas, self.x_axis(), plot.height() as f32, theme, shaper.as_ref());
        draw_axis(canvas, self.y_axis(), plot.height() as f32, theme, shaper.as_ref());
        if let Some(shaper) = &shaper {
            shaper.draw(
                canvas,
                &self.config().title,
                (plot.width() as f32 / 2.0, -10.0),
                TITLE_FONT_SIZE,
                theme.title,
                (HAnchor::Middle, VAnchor::Baseline),
            );
        }
        draw_line(canvas, &self.line_at(now), self.stroke_at(now), self.config().stroke_width);
        draw_markers(canvas, self, theme);
        canvas.restore();

        draw_tooltip(canvas, self, now, theme, shaper.as_ref());
        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, plot_h: f32, theme: &Theme, shaper: Option<&TextShaper>) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);

    // Half-pixel offset keeps 1px strokes crisp.
    let crisp = 0.5;
    let (r0, r1) = (axis.range.0 + crisp, axis.range.1 + crisp);

    let mut domain = skia::Path::new();
    match axis.orient {
        AxisOrient::Bottom => {
            let y = plot_h + crisp;
            domain.move_to((r0, y + TICK_SIZE));
            domain.line_to((r0, y));
            domain.line_to((r1, y));
            domain.line_to((r1, y + TICK_SIZE));
        }
        AxisOrient::Left => {
            let x = crisp;
            domain.move_to((x - TICK_SIZE, r0));
            domain.line_to((x, r0));
            domain.line_to((x, r1));
            domain.line_to((x - TICK_SIZE, r1));
        }
    }
    canvas.draw_path(&domain, &paint);

    for tick in &axis.ticks {
        let o = tick.offset + crisp;
        match axis.orient {
            AxisOrient::Bottom => {
                canvas.draw_line((o, plot_h), (o, plot_h + TICK_SIZE), &paint);
                if let Some(s) = shaper {
                    let at = (o, plot_h + TICK_SIZE + TICK_PADDING);
                    s.draw(canvas, &tick.label, at, TICK_FONT_SIZE, theme.tick_label, (HAnchor::Middle, VAnchor::Top));
                }
            }
            AxisOrient::Left => {
                canvas.draw_line((-TICK_SIZE, o), (0.0, o), &paint);
                if let Some(s) = shaper {
                    let at = (-(TICK_SIZE + TICK_PADDING), o);
                    s.draw(canvas, &tick.label, at, TICK_FONT_SIZE, theme.tick_label, (HAnchor::End, VAnchor::Middle));
                }
            }
        }
    }
}

/// Stroke the polyline through `points` in the given order. Fewer than two points draw nothing.
fn draw_line(canvas: &skia::Canvas, points: &[Point], color: skia::Color, width: f32) {
    if points.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    path.move_to((points[0].x, points[0].y));
    for p in points.iter().skip(1) {
        path.line_to((p.x, p.y));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}

fn draw_markers(canvas: &skia::Canvas, chart: &TrendChart, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.marker);

    let r = chart.config().marker_radius;
    for m in chart.markers() {
        canvas.draw_circle((m.center.x, m.center.y), r, &fill);
    }
}

fn draw_tooltip(canvas: &skia::Canvas, chart: &TrendChart, now: Instant, theme: &Theme, shaper: Option<&TextShaper>) {
    let tooltip = chart.tooltip();
    let opacity = tooltip.opacity(now);
    if opacity <= 0.0 || tooltip.lines().is_empty() {
        return;
    }

    let line_h = TOOLTIP_FONT_SIZE + TOOLTIP_LINE_GAP;
    let text_w = match shaper {
        Some(s) => tooltip.lines().iter().map(|l| s.measure_width(l, TOOLTIP_FONT_SIZE)).fold(0.0, f32::max),
        // Rough width so the box keeps a stable size without text shaping.
        None => tooltip.lines().iter().map(|l| l.chars().count()).max().unwrap_or(0) as f32 * TOOLTIP_FONT_SIZE * 0.6,
    };
    let box_w = text_w + TOOLTIP_PADDING * 2.0;
    let box_h = line_h * tooltip.lines().len() as f32 + TOOLTIP_PADDING * 2.0 - TOOLTIP_LINE_GAP;

    // Keep the box on the canvas.
    let cfg = chart.config();
    let anchor = tooltip.anchor();
    let left = clamp(anchor.x, 0.0, (cfg.width as f32 - box_w).max(0.0));
    let top = clamp(anchor.y, 0.0, (cfg.height as f32 - box_h).max(0.0));
    let rect = skia::Rect::from_xywh(left, top, box_w, box_h);

    canvas.save_layer_alpha(rect.with_outset((2.0, 2.0)), (opacity * 255.0).round() as u32);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.tooltip_fill);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.tooltip_border);
    canvas.draw_round_rect(rect, 4.0, 4.0, &border);

    if let Some(s) = shaper {
        for (i, line) in tooltip.lines().iter().enumerate() {
            let y = top + TOOLTIP_PADDING + i as f32 * line_h;
            s.draw(canvas, line, (left + TOOLTIP_PADDING, y), TOOLTIP_FONT_SIZE, theme.tooltip_text, (HAnchor::Start, VAnchor::Top));
        }
    }

    canvas.restore();
}
