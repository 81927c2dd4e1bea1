// File: crates/trend-core/src/lib.rs
// Summary: Core library entry point; exports data loading, chart state and rendering API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod record;
pub mod render;
pub mod scale;
pub mod scenario;
pub mod scene;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod transition;
pub mod types;

pub use axis::{Axis, AxisOrient, Tick};
pub use chart::{ChartConfig, TrendChart, DEFAULT_TITLE, FRAME_INTERVAL};
pub use error::DataFormatError;
pub use geometry::Point;
pub use record::{Dataset, Record};
pub use render::RenderOptions;
pub use scale::{LinearScale, TickFormat};
pub use scenario::{stroke_color, ScenarioChange, ScenarioSelect};
pub use scene::{Marker, MarkerKey, ReconcileStats};
pub use theme::Theme;
pub use tooltip::{Tooltip, TooltipState};
