// File: crates/trend-core/src/theme.rs
// Summary: Color themes for chart chrome (background, axes, title, markers, tooltip).
// Notes: scenario line colors are fixed by `scenario::stroke_color` and are not themed.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub marker: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            marker: skia::Color::from_argb(255, 0, 0, 0),
            tooltip_fill: skia::Color::from_argb(235, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 120, 120, 130),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            title: skia::Color::from_argb(255, 235, 235, 245),
            marker: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_fill: skia::Color::from_argb(235, 40, 40, 45),
            tooltip_border: skia::Color::from_argb(255, 150, 150, 160),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            tick_label: skia::Color::from_argb(255, 0x83, 0x94, 0x96), // base0
            title: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),      // base2
            marker: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),
            tooltip_fill: skia::Color::from_argb(235, 0x07, 0x36, 0x42), // base02
            tooltip_border: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),
            tooltip_text: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            tick_label: skia::Color::from_argb(255, 0x58, 0x6e, 0x75), // base01
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),      // base03
            marker: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            tooltip_fill: skia::Color::from_argb(235, 0xee, 0xe8, 0xd5), // base2
            tooltip_border: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),
            tooltip_text: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            marker: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_fill: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            tooltip_border: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
