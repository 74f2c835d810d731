// File: crates/plot-render-skia/src/surface.rs
// Summary: `DrawSurface` implementation over a Skia canvas.

use plot_core::{Color, DrawSurface, LabelFont, LinePath, RectI32, TextAlign};
use skia_safe as skia;

use crate::text::TextShaper;

#[inline]
pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[inline]
pub fn to_skia_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    draw_labels: bool,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper, draw_labels: true }
    }

    /// Skip text primitives (useful for pixel-stable output across platforms).
    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    fn stroke_paint(color: Color, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(to_skia_color(color));
        paint
    }
}

impl DrawSurface for SkiaSurface<'_> {
    fn stroke_path(&mut self, path: &LinePath, color: Color, width: f32) {
        let mut points = path.points.iter();
        let Some(first) = points.next() else { return };
        let mut sk_path = skia::Path::new();
        sk_path.move_to((first.x, first.y));
        for p in points {
            sk_path.line_to((p.x, p.y));
        }
        self.canvas.draw_path(&sk_path, &Self::stroke_paint(color, width));
    }

    fn stroke_rect(&mut self, rect: RectI32, color: Color, width: f32) {
        self.canvas.draw_rect(to_skia_rect(rect), &Self::stroke_paint(color, width));
    }

    fn draw_text(&mut self, text: &str, rect: RectI32, align: TextAlign, font: &LabelFont, color: Color) {
        if !self.draw_labels || text.is_empty() {
            return;
        }
        let sk_font = self.shaper.font(font);
        let (width, _) = sk_font.measure_str(text, None);
        let x = match align {
            TextAlign::Left => rect.left as f32,
            TextAlign::Center => (rect.left + rect.right) as f32 * 0.5 - width * 0.5,
            TextAlign::Right => rect.right as f32 - width,
        };
        let y = self.shaper.centered_baseline(&sk_font, (rect.top + rect.bottom) as f32 * 0.5);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_skia_color(color));
        self.canvas.draw_str(text, (x, y), &sk_font, &paint);
    }
}
