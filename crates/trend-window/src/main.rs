// File: crates/trend-window/src/main.rs
// Summary: Interactive window that renders the trend chart to RGBA and blits it via winit + softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use tracing::{debug, error, info, warn};
use trend_core::{theme, ChartConfig, Point, RenderOptions, ScenarioChange, ScenarioSelect, TrendChart};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive scenario temperature-anomaly chart", long_about = None)]
struct Cli {
    /// CSV with `year`, `temperature_anomaly` and `scenario` columns
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Theme preset name
    #[arg(long, default_value = "light")]
    theme: String,
}

/// Largest uniform scale that fits the logical chart into the window.
fn fit_scale(window: PhysicalSize<u32>, chart: (i32, i32)) -> f32 {
    let sx = window.width as f32 / chart.0.max(1) as f32;
    let sy = window.height as f32 / chart.1.max(1) as f32;
    sx.min(sy).max(0.01)
}

fn window_title(select: &ScenarioSelect) -> String {
    format!("Temperature anomaly: {}  [1/2/3, Tab/arrows]", select.value())
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
    let config = ChartConfig::default();
    let logical = (config.width, config.height);
    let mut chart = TrendChart::load(&cli.input, config)
        .with_context(|| format!("failed to load CSV '{}'", cli.input.display()))?;
    let mut select = ScenarioSelect::default();
    let mut opts = RenderOptions { theme: theme::find(&cli.theme), ..RenderOptions::default() };
    let background = opts.theme.background;
    let bg_px = ((background.r() as u32) << 16) | ((background.g() as u32) << 8) | background.b() as u32;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(window_title(&select))
        .with_inner_size(LogicalSize::new(logical.0 as f64, logical.1 as f64))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    info!(scenario = select.value(), "window ready");

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let s = fit_scale(size, logical);
                    let p = Point::new(position.x as f32 / s, position.y as f32 / s);
                    let before = chart.hovered().map(|m| m.id);
                    chart.pointer_moved(p, Instant::now());
                    if chart.hovered().map(|m| m.id) != before {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    chart.pointer_left(Instant::now());
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    let change: Option<ScenarioChange> = match key {
                        VirtualKeyCode::Escape => {
                            *cf = ControlFlow::Exit;
                            None
                        }
                        VirtualKeyCode::Key1 => select.select_index(0),
                        VirtualKeyCode::Key2 => select.select_index(1),
                        VirtualKeyCode::Key3 => select.select_index(2),
                        VirtualKeyCode::Tab | VirtualKeyCode::Right => select.next(),
                        VirtualKeyCode::Left => select.prev(),
                        _ => None,
                    };
                    if let Some(change) = change {
                        let stats = chart.update(&change.scenario, Instant::now());
                        debug!(scenario = %change.scenario, ?stats, "scenario changed");
                        window.set_title(&window_title(&select));
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if chart.is_animating(Instant::now()) {
                    window.request_redraw();
                }
            }
            // Wake on a frame timer while anything animates; sleep until input otherwise.
            Event::RedrawEventsCleared if !matches!(*cf, ControlFlow::ExitWithCode(_)) => {
                *cf = match chart.next_frame_at(Instant::now()) {
                    Some(at) => ControlFlow::WaitUntil(at),
                    None => ControlFlow::Wait,
                };
            }
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    warn!("surface resize failed: {e}");
                    return;
                }
                opts.scale = fit_scale(size, logical);

                let (rgba, cw, ch, row_bytes) = match chart.render_to_rgba8_at(&opts, Instant::now()) {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("render failed: {e:#}");
                        *cf = ControlFlow::Exit;
                        return;
                    }
                };

                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("no frame buffer: {e}");
                        return;
                    }
                };
                let (fw, fh) = (size.width as usize, size.height as usize);
                for y in 0..fh {
                    for x in 0..fw {
                        frame[y * fw + x] = if x < cw as usize && y < ch as usize {
                            let i = y * row_bytes + x * 4;
                            let (r, g, b) = (rgba[i] as u32, rgba[i + 1] as u32, rgba[i + 2] as u32);
                            (r << 16) | (g << 8) | b
                        } else {
                            bg_px
                        };
                    }
                }
                if let Err(e) = frame.present() {
                    warn!("present error: {e}");
                }
            }
            _ => {}
        }
    });
}
