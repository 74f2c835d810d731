// File: crates/plot-core/src/text.rs
// Summary: Label font description and the font-metrics query used for label placement.

#[derive(Clone, Debug, PartialEq)]
pub struct LabelFont {
    /// Preferred family; hosts fall back to their default face when missing.
    pub family: String,
    pub size: f32,
}

impl LabelFont {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self { family: family.into(), size: size.max(1.0) }
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self::new("sans-serif", 14.0)
    }
}

/// Text measurement supplied by the rendering host.
pub trait FontMetrics {
    /// Distance between baselines of two consecutive lines.
    fn line_height(&self, font: &LabelFont) -> f32;
    /// Advance width of `text` laid out on one line.
    fn text_width(&self, text: &str, font: &LabelFont) -> f32;
}

/// Fixed-advance estimate for headless layout and tests.
#[derive(Clone, Copy, Debug)]
pub struct ApproxMetrics {
    /// Glyph advance as a fraction of the font size.
    pub advance: f32,
    /// Line height as a fraction of the font size.
    pub leading: f32,
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self { advance: 0.6, leading: 1.2 }
    }
}

impl FontMetrics for ApproxMetrics {
    fn line_height(&self, font: &LabelFont) -> f32 {
        font.size * self.leading
    }

    fn text_width(&self, text: &str, font: &LabelFont) -> f32 {
        text.chars().count() as f32 * font.size * self.advance
    }
}
