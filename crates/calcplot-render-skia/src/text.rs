// File: crates/calcplot-render-skia/src/text.rs
// Summary: Paragraph-based label drawing that honours scene anchors.

use calcplot_core::scene::{Anchor, Label};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
    size: f32,
}

impl TextShaper {
    pub fn new(size: f32) -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts, size: size.max(1.0) }
    }

    pub fn layout(&self, text: &str, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut style = TextStyle::new();
        style.set_font_size(self.size);
        style.set_color(color);
        style.set_font_families(FAMILIES);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `label` so that its anchor point lands on `label.at`.
    pub fn draw(&self, canvas: &skia::Canvas, label: &Label, color: skia::Color) {
        let mut p = self.layout(&label.text, color);
        let (w, h) = (p.longest_line(), p.height());
        let (x, y) = (label.at.x as f32, label.at.y as f32);
        let origin = match label.anchor {
            Anchor::TopLeft => (x, y),
            Anchor::TopCenter => (x - w / 2.0, y),
            Anchor::MiddleRight => (x - w, y - h / 2.0),
        };
        p.paint(canvas, origin);
    }
}
