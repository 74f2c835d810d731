// File: crates/plot-core/src/surface.rs
// Summary: Drawing-surface abstraction the grid paints onto, plus a recording implementation.

use crate::geometry::{LinePath, RectI32};
use crate::text::LabelFont;
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Primitive sink implemented by rendering hosts.
pub trait DrawSurface {
    fn stroke_path(&mut self, path: &LinePath, color: Color, width: f32);
    fn stroke_rect(&mut self, rect: RectI32, color: Color, width: f32);
    /// Draw `text` inside `rect`, vertically centered, aligned horizontally by `align`.
    fn draw_text(&mut self, text: &str, rect: RectI32, align: TextAlign, font: &LabelFont, color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Path { path: LinePath, color: Color, width: f32 },
    Rect { rect: RectI32, color: Color, width: f32 },
    Text { text: String, rect: RectI32, align: TextAlign, color: Color },
}

/// Records primitives in paint order; handy for retained-mode hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self { Self::default() }

    pub fn paths(&self) -> impl Iterator<Item = &LinePath> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Path { path, .. } => Some(path),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for DisplayList {
    fn stroke_path(&mut self, path: &LinePath, color: Color, width: f32) {
        self.ops.push(DrawOp::Path { path: path.clone(), color, width });
    }

    fn stroke_rect(&mut self, rect: RectI32, color: Color, width: f32) {
        self.ops.push(DrawOp::Rect { rect, color, width });
    }

    fn draw_text(&mut self, text: &str, rect: RectI32, align: TextAlign, _font: &LabelFont, color: Color) {
        self.ops.push(DrawOp::Text { text: text.to_string(), rect, align, color });
    }
}
