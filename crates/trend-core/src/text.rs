// File: crates/trend-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with anchor-based placement for axis labels and titles.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor of a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAnchor {
    Start,
    Middle,
    End,
}

/// Vertical placement of a label relative to its y coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAnchor {
    /// y is the top of the line box.
    Top,
    /// y is the vertical middle of the line box.
    Middle,
    /// y is the (approximate) alphabetic baseline.
    Baseline,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        (h, v): (HAnchor, VAnchor),
    ) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match h {
            HAnchor::Start => x,
            HAnchor::Middle => x - w * 0.5,
            HAnchor::End => x - w,
        };
        let top = match v {
            VAnchor::Top => y,
            VAnchor::Middle => y - p.height() * 0.5,
            // Paragraph draws from top-left; adjust baseline by glyph height approximation
            VAnchor::Baseline => y - size * 0.8,
        };
        p.paint(canvas, (left, top));
    }
}
