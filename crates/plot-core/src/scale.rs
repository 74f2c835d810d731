// File: crates/plot-core/src/scale.rs
// Summary: Data <-> pixel coordinate transforms for linear and log10 axes, plus 2D plot mapping.

use crate::axis::{AxisLimits, ScaleKind};
use crate::geometry::{LinePath, PointF32, RectI32};
use crate::types::MIN_LOG_VALUE;

/// Data-space value (x or y).
pub type Value = f64;

/// Pixel interval an axis is mapped onto. `start` is where `limits.min` lands,
/// so a y axis growing upward uses `start = bottom, end = top`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    pub const fn new(start: f64, end: f64) -> Self { Self { start, end } }

    pub fn horizontal(area: &RectI32) -> Self {
        Self::new(area.left as f64, area.right as f64)
    }

    pub fn vertical(area: &RectI32) -> Self {
        Self::new(area.bottom as f64, area.top as f64)
    }

    #[inline]
    pub fn span(&self) -> f64 { self.end - self.start }

    pub fn length(&self) -> f64 { self.span().abs() }

    #[inline]
    pub fn midpoint(&self) -> f64 { (self.start + self.end) * 0.5 }
}

/// Map `value` to a pixel coordinate.
///
/// Values outside the scale's domain (non-finite, or `<= 0` on a log axis)
/// clamp to `range.start`. Degenerate limits map everything to the middle of
/// the pixel range.
pub fn to_pixel(value: Value, limits: AxisLimits, range: PixelRange, kind: ScaleKind) -> f64 {
    AxisTransform::new(limits, range, kind).to_pixel(value)
}

/// Inverse of [`to_pixel`] over the valid domain.
pub fn to_value(pixel: f64, limits: AxisLimits, range: PixelRange, kind: ScaleKind) -> Value {
    AxisTransform::new(limits, range, kind).to_value(pixel)
}

/// One axis' mapping with the scaled endpoints cached.
#[derive(Clone, Copy, Debug)]
pub struct AxisTransform {
    pub limits: AxisLimits,
    pub range: PixelRange,
    pub kind: ScaleKind,
    // limits mapped through `kind`
    lo: f64,
    hi: f64,
}

impl AxisTransform {
    pub fn new(limits: AxisLimits, range: PixelRange, kind: ScaleKind) -> Self {
        let floor = kind.forward(MIN_LOG_VALUE).unwrap_or(0.0);
        let lo = kind.forward(limits.min).unwrap_or(floor);
        let hi = kind.forward(limits.max).unwrap_or(floor);
        Self { limits, range, kind, lo, hi }
    }

    fn mapped_span(&self) -> Option<f64> {
        let span = self.hi - self.lo;
        if span.is_finite() && span.abs() > f64::EPSILON * self.lo.abs().max(self.hi.abs()).max(1.0) {
            Some(span)
        } else {
            None
        }
    }

    /// `None` when the value is outside the scale's domain.
    pub fn try_to_pixel(&self, value: Value) -> Option<f64> {
        let v = self.kind.forward(value)?;
        match self.mapped_span() {
            Some(span) => Some(self.range.start + (v - self.lo) / span * self.range.span()),
            None => Some(self.range.midpoint()),
        }
    }

    #[inline]
    pub fn to_pixel(&self, value: Value) -> f64 {
        self.try_to_pixel(value).unwrap_or(self.range.start)
    }

    pub fn to_value(&self, pixel: f64) -> Value {
        let px_span = self.range.span();
        let mapped = if px_span.abs() < f64::EPSILON || !pixel.is_finite() {
            (self.lo + self.hi) * 0.5
        } else {
            self.lo + (pixel - self.range.start) / px_span * (self.hi - self.lo)
        };
        self.kind.inverse(mapped)
    }
}

/// General scale transform operations for X/Y axes.
pub trait ScaleTransform {
    fn to_screen_x(&self, x: Value) -> f32;
    fn to_screen_y(&self, y: Value) -> f32;
    fn from_screen_x(&self, px: f32) -> Value;
    fn from_screen_y(&self, py: f32) -> Value;
}

/// Maps data points onto a grid area: x left-to-right, y bottom-to-top.
#[derive(Clone, Copy, Debug)]
pub struct PlotTransform {
    pub x: AxisTransform,
    pub y: AxisTransform,
}

impl PlotTransform {
    pub fn new(area: &RectI32, x_lim: AxisLimits, x_kind: ScaleKind, y_lim: AxisLimits, y_kind: ScaleKind) -> Self {
        Self {
            x: AxisTransform::new(x_lim, PixelRange::horizontal(area), x_kind),
            y: AxisTransform::new(y_lim, PixelRange::vertical(area), y_kind),
        }
    }

    /// `None` if either coordinate is outside its scale's domain.
    pub fn to_screen(&self, x: Value, y: Value) -> Option<PointF32> {
        let px = self.x.try_to_pixel(x)?;
        let py = self.y.try_to_pixel(y)?;
        Some(PointF32::new(px as f32, py as f32))
    }

    pub fn from_screen(&self, p: PointF32) -> (Value, Value) {
        (self.x.to_value(p.x as f64), self.y.to_value(p.y as f64))
    }

    /// Polyline for a data series; points a log axis cannot show are skipped.
    pub fn series_path(&self, points: &[(Value, Value)]) -> LinePath {
        let mut path = LinePath::with_capacity(points.len());
        for &(x, y) in points {
            if let Some(p) = self.to_screen(x, y) {
                path.push(p);
            }
        }
        path
    }

    /// Index of the data point closest to `cursor` in pixel space.
    pub fn trace_point(&self, points: &[(Value, Value)], cursor: PointF32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, &(x, y)) in points.iter().enumerate() {
            let Some(p) = self.to_screen(x, y) else { continue };
            let d = p.distance_sq(cursor);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl ScaleTransform for PlotTransform {
    #[inline]
    fn to_screen_x(&self, x: Value) -> f32 { self.x.to_pixel(x) as f32 }
    #[inline]
    fn to_screen_y(&self, y: Value) -> f32 { self.y.to_pixel(y) as f32 }
    #[inline]
    fn from_screen_x(&self, px: f32) -> Value { self.x.to_value(px as f64) }
    #[inline]
    fn from_screen_y(&self, py: f32) -> Value { self.y.to_value(py as f64) }
}
