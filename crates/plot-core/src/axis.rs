// File: crates/plot-core/src/axis.rs
// Summary: Axis identity, scale kinds and validated axis limits.

use std::fmt;

use crate::error::{GridError, LimitsProblem};
use crate::types::MIN_LOG_VALUE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

impl ScaleKind {
    /// Map a data value into the scale's linear working space.
    ///
    /// Returns `None` for non-finite values, and for non-positive values on a
    /// logarithmic scale.
    #[inline]
    pub fn forward(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            ScaleKind::Linear => Some(value),
            ScaleKind::Log10 if value > 0.0 => Some(value.log10()),
            ScaleKind::Log10 => None,
        }
    }

    #[inline]
    pub fn inverse(self, mapped: f64) -> f64 {
        match self {
            ScaleKind::Linear => mapped,
            ScaleKind::Log10 => 10f64.powf(mapped),
        }
    }

    pub fn is_valid_value(self, value: f64) -> bool {
        self.forward(value).is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::X => f.write_str("x"),
            AxisId::Y => f.write_str("y"),
        }
    }
}

/// Data-space limits of one axis.
/// Contract: `min < max`, both finite with a finite span; strictly positive on a log axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    /// Unchecked constructor; use [`AxisLimits::checked`] for user input.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self, kind: ScaleKind) -> Result<(), LimitsProblem> {
        // a finite pair can still have a span that overflows
        if !self.min.is_finite() || !self.max.is_finite() || !self.span().is_finite() {
            return Err(LimitsProblem::NotFinite);
        }
        if kind == ScaleKind::Log10 && self.min < MIN_LOG_VALUE {
            return Err(LimitsProblem::NotPositive);
        }
        if self.min >= self.max {
            return Err(LimitsProblem::NotIncreasing);
        }
        Ok(())
    }

    pub fn checked(axis: AxisId, min: f64, max: f64, kind: ScaleKind) -> Result<Self, GridError> {
        let lim = Self::new(min, max);
        lim.validate(kind)
            .map(|_| lim)
            .map_err(|reason| GridError::InvalidLimits { axis, min, max, kind, reason })
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    /// Inclusive containment with a tolerance relative to the span.
    pub fn contains(&self, value: f64) -> bool {
        let eps = self.span().abs() * 1e-9;
        value >= self.min - eps && value <= self.max + eps
    }

    /// `(floor(log10(min)), ceil(log10(max)))`; only meaningful on valid log limits.
    pub fn exponent_range(&self) -> (i32, i32) {
        let lo = self.min.max(MIN_LOG_VALUE).log10().floor();
        let hi = self.max.max(MIN_LOG_VALUE).log10().ceil();
        (lo as i32, hi as i32)
    }
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self::new(0.0, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_limits_reject_non_positive_min() {
        let err = AxisLimits::checked(AxisId::X, 0.0, 100.0, ScaleKind::Log10).unwrap_err();
        assert!(matches!(err, GridError::InvalidLimits { reason: LimitsProblem::NotPositive, .. }));
        assert!(AxisLimits::checked(AxisId::X, 0.0, 100.0, ScaleKind::Linear).is_ok());
    }

    #[test]
    fn limits_reject_reversed_and_nan() {
        assert_eq!(AxisLimits::new(5.0, 5.0).validate(ScaleKind::Linear), Err(LimitsProblem::NotIncreasing));
        assert_eq!(AxisLimits::new(f64::NAN, 5.0).validate(ScaleKind::Linear), Err(LimitsProblem::NotFinite));
    }

    #[test]
    fn limits_reject_overflowing_span() {
        assert_eq!(AxisLimits::new(-1e308, 1e308).validate(ScaleKind::Linear), Err(LimitsProblem::NotFinite));
        assert!(AxisLimits::new(-1e307, 1e307).validate(ScaleKind::Linear).is_ok());
    }

    #[test]
    fn exponent_range_rounds_outward() {
        assert_eq!(AxisLimits::new(1.0, 1000.0).exponent_range(), (0, 3));
        assert_eq!(AxisLimits::new(20.0, 22_000.0).exponent_range(), (1, 5));
        assert_eq!(AxisLimits::new(0.05, 0.5).exponent_range(), (-2, 0));
    }
}
