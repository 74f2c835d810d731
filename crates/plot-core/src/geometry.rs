// File: crates/plot-core/src/geometry.rs
// Summary: Pixel-space primitives handed to the rendering host: rects, points, line paths.

/// Integer pixel rectangle. `right`/`bottom` are exclusive edges.
/// Arithmetic saturates at the `i32` range instead of overflowing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left.saturating_add(width), bottom: top.saturating_add(height) }
    }
    pub const fn width(&self) -> i32 { self.right.saturating_sub(self.left) }
    pub const fn height(&self) -> i32 { self.bottom.saturating_sub(self.top) }

    /// True when the rect has no drawable area (zero or negative extent).
    pub const fn is_empty(&self) -> bool { self.width() <= 0 || self.height() <= 0 }

    /// Overlap test; touching edges do not count as intersecting.
    pub const fn intersects(&self, other: &RectI32) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Shrink by the given insets, saturating at an empty rect.
    pub fn inset(&self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let l = self.left.saturating_add(left);
        let t = self.top.saturating_add(top);
        Self::from_ltrb(l, t, self.right.saturating_sub(right).max(l), self.bottom.saturating_sub(bottom).max(t))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF32 {
    pub x: f32,
    pub y: f32,
}

impl PointF32 {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    pub fn distance_sq(&self, other: PointF32) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Open polyline in pixel space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePath {
    pub points: Vec<PointF32>,
}

impl LinePath {
    pub fn with_capacity(n: usize) -> Self { Self { points: Vec::with_capacity(n) } }

    pub fn segment(from: PointF32, to: PointF32) -> Self {
        Self { points: vec![from, to] }
    }

    pub fn push(&mut self, p: PointF32) { self.points.push(p); }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_emptiness_and_overlap() {
        let a = RectI32::from_ltwh(0, 0, 10, 10);
        assert!(!a.is_empty());
        assert!(RectI32::from_ltwh(5, 5, 0, 10).is_empty());
        assert!(a.intersects(&RectI32::from_ltwh(9, 9, 4, 4)));
        assert!(!a.intersects(&RectI32::from_ltwh(10, 0, 4, 4)));
    }

    #[test]
    fn inset_saturates() {
        let r = RectI32::from_ltwh(0, 0, 10, 10).inset(8, 0, 8, 0);
        assert_eq!(r.width(), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn extreme_rects_saturate() {
        let wide = RectI32::from_ltrb(i32::MIN, 0, i32::MAX, 100);
        assert_eq!(wide.width(), i32::MAX);
        assert!(!wide.is_empty());
        assert!(RectI32::from_ltrb(i32::MAX, 0, i32::MIN, 100).is_empty());
        assert_eq!(RectI32::from_ltwh(i32::MAX - 5, 0, 10, 10).right, i32::MAX);
    }
}
