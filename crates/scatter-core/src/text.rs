// File: crates/scatter-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with canvas-style alignment.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor of the drawn text relative to `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Vertical anchor of the drawn text relative to `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Top,
    Middle,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    /// Shaper backed by the platform font manager.
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            // Tabular figures keep tick labels aligned
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Inter", "Segoe UI", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    /// Single-line paragraph, laid out wide enough to never wrap.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut para_style = ParagraphStyle::new();
        para_style.set_max_lines(1);
        let mut builder = ParagraphBuilder::new(&para_style, &self.fonts);
        builder.push_style(&Self::make_style(size, color, mono_numeric));
        builder.add_text(text);
        let mut para = builder.build();
        para.layout(100_000.0);
        para
    }

    /// Laid-out width and height.
    pub fn measure(&self, text: &str, size: f32, mono_numeric: bool) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, mono_numeric);
        (p.longest_line(), p.height())
    }

    /// Draw `text` anchored at `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        align: Align,
        baseline: Baseline,
        mono_numeric: bool,
    ) {
        let mut p = self.layout(text, size, color, mono_numeric);
        let w = p.longest_line();
        let left = match align {
            Align::Left => x,
            Align::Center => x - w * 0.5,
            Align::Right => x - w,
        };
        // Paragraph draws from its top-left corner.
        let top = match baseline {
            Baseline::Top => y,
            Baseline::Middle => y - p.height() * 0.5,
        };
        p.paint(canvas, (left, top));
    }
}
