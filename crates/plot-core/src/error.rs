// File: crates/plot-core/src/error.rs
// Summary: Error taxonomy for grid configuration.

use crate::axis::{AxisId, ScaleKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("invalid {axis} limits [{min}, {max}] for {kind:?} scale: {reason}")]
    InvalidLimits {
        axis: AxisId,
        min: f64,
        max: f64,
        kind: ScaleKind,
        reason: LimitsProblem,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LimitsProblem {
    #[error("limits and their span must be finite")]
    NotFinite,
    #[error("min must be strictly less than max")]
    NotIncreasing,
    #[error("logarithmic limits must be strictly positive")]
    NotPositive,
}
