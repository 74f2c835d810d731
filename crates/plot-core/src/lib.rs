// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; grid/axis layout, tick generation and coordinate transforms.

pub mod param;
pub mod types;
pub mod error;
pub mod geometry;
pub mod axis;
pub mod scale;
pub mod ticks;
pub mod text;
pub mod theme;
pub mod surface;
pub mod config;
pub mod variants;
pub mod grid;
pub mod handoff;

pub use param::{Merge, Param};
pub use error::{GridError, LimitsProblem};
pub use geometry::{LinePath, PointF32, RectI32};
pub use axis::{AxisId, AxisLimits, ScaleKind};
pub use scale::{to_pixel, to_value, AxisTransform, PixelRange, PlotTransform, ScaleTransform};
pub use ticks::{Tick, TickLevel};
pub use text::{ApproxMetrics, FontMetrics, LabelFont};
pub use theme::{Color, Theme};
pub use surface::{DisplayList, DrawOp, DrawSurface, TextAlign};
pub use config::{GridConfig, GridConfigParams, GridGraphicParams, GridStyle};
pub use variants::{GridVariant, LinearGrid, SemiLogXGrid};
pub use grid::{AxisLabel, BaseGrid, Grid, GridGeometry, GridLine, GridState, SemiLogX};
pub use handoff::FrameHandoff;
