// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (tick densities, bounds, margins).

/// Major ticks on a linear axis when space allows (10 intervals).
pub const LINEAR_MAJOR_TICKS: usize = 11;
/// Minor ticks inserted between two consecutive linear majors in tiny-grid mode.
pub const LINEAR_MINOR_PER_INTERVAL: usize = 4;
/// Minor ticks per decade on a log axis in tiny-grid mode (x2 .. x9).
pub const LOG_SUBDIVISIONS_PER_DECADE: usize = 8;
/// Smallest distance between linear major ticks, in pixels.
pub const MIN_MAJOR_SPACING_PX: f64 = 24.0;
/// Upper bound on ticks produced for one axis, whatever the limits.
pub const MAX_TICKS: usize = 512;

/// Smallest positive value accepted as a logarithmic limit.
pub const MIN_LOG_VALUE: f64 = f64::MIN_POSITIVE;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
