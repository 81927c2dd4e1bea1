// File: crates/trend-core/src/scenario.rs
// Summary: Scenario labels, the fixed label→stroke color mapping, and the selection control model.

use skia_safe as skia;

pub const SSP126: &str = "ssp126";
pub const SSP245: &str = "ssp245";
pub const SSP585: &str = "ssp585";

/// Options offered by the selection control when none are configured.
pub const KNOWN_SCENARIOS: [&str; 3] = [SSP126, SSP245, SSP585];

/// Line stroke for a scenario. Closed mapping; any other label gets the red default.
pub fn stroke_color(scenario: &str) -> skia::Color {
    match scenario {
        SSP126 => skia::Color::from_rgb(0x22, 0xc5, 0x5e),
        SSP245 => skia::Color::from_rgb(0xfa, 0xcc, 0x15),
        _ => skia::Color::from_rgb(0xef, 0x44, 0x44),
    }
}

/// `#rrggbb` for an opaque color.
pub fn hex(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Change emitted by [`ScenarioSelect`] when the selected option moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioChange {
    pub scenario: String,
}

/// Drop-down style selection control. Holds option labels and the current index;
/// it knows nothing about the chart and only reports changes.
#[derive(Clone, Debug)]
pub struct ScenarioSelect {
    options: Vec<String>,
    selected: usize,
}

impl Default for ScenarioSelect {
    fn default() -> Self {
        Self::new(KNOWN_SCENARIOS.iter().map(|s| s.to_string()).collect())
    }
}

impl ScenarioSelect {
    /// An empty option list falls back to the known scenarios.
    pub fn new(options: Vec<String>) -> Self {
        if options.is_empty() {
            return Self::default();
        }
        Self { options, selected: 0 }
    }

    pub fn options(&self) -> &[String] { &self.options }
    pub fn selected_index(&self) -> usize { self.selected }
    pub fn value(&self) -> &str { &self.options[self.selected] }

    /// Select an option by index. Returns a change only when the selection actually moves.
    pub fn select_index(&mut self, index: usize) -> Option<ScenarioChange> {
        if index >= self.options.len() || index == self.selected {
            return None;
        }
        self.selected = index;
        Some(ScenarioChange { scenario: self.value().to_string() })
    }

    /// Select by label. Labels not in the option list are ignored.
    pub fn select(&mut self, label: &str) -> Option<ScenarioChange> {
        let index = self.options.iter().position(|o| o == label)?;
        self.select_index(index)
    }

    pub fn next(&mut self) -> Option<ScenarioChange> {
        let n = self.options.len();
        self.select_index((self.selected + 1) % n)
    }

    pub fn prev(&mut self) -> Option<ScenarioChange> {
        let n = self.options.len();
        self.select_index((self.selected + n - 1) % n)
    }
}
