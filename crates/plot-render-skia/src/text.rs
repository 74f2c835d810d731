// File: crates/plot-render-skia/src/text.rs
// Summary: Skia-backed font resolution and text measurement for label layout.

use plot_core::{FontMetrics, LabelFont};
use skia_safe as skia;

pub struct TextShaper {
    fonts: skia::FontMgr,
}

impl TextShaper {
    pub fn new() -> Self {
        // Use system manager fallback
        Self { fonts: skia::FontMgr::default() }
    }

    /// Skia font for `label`, falling back to the default face when the family is missing.
    pub fn font(&self, label: &LabelFont) -> skia::Font {
        let mut font = skia::Font::default();
        if let Some(tf) = self.fonts.match_family_style(&label.family, skia::FontStyle::normal()) {
            font.set_typeface(tf);
        } else {
            log::trace!("font family '{}' not found; using default face", label.family);
        }
        font.set_size(label.size.max(1.0));
        font
    }

    pub fn measure_width(&self, text: &str, label: &LabelFont) -> f32 {
        let (width, _bounds) = self.font(label).measure_str(text, None);
        width
    }

    /// Baseline offset that vertically centers a line of text on `center_y`.
    pub fn centered_baseline(&self, font: &skia::Font, center_y: f32) -> f32 {
        let (_, m) = font.metrics();
        center_y - (m.ascent + m.descent) * 0.5
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl FontMetrics for TextShaper {
    fn line_height(&self, font: &LabelFont) -> f32 {
        let (spacing, _) = self.font(font).metrics();
        if spacing > 0.0 { spacing } else { font.size * 1.2 }
    }

    fn text_width(&self, text: &str, font: &LabelFont) -> f32 {
        self.measure_width(text, font)
    }
}
