// File: crates/plot-core/src/variants.rs
// Summary: Scale-specific grid policies: linear/linear (`LinearGrid`) and log-x/linear-y (`SemiLogXGrid`).

use crate::axis::{AxisLimits, ScaleKind};
use crate::config::GridConfig;
use crate::grid::GridLine;
use crate::ticks::{self, Tick};

/// The two operations that differ between grid kinds. Everything else
/// (label layout, dirty tracking, painting) lives in [`crate::grid::BaseGrid`].
pub trait GridVariant {
    fn x_scale(&self) -> ScaleKind;

    fn y_scale(&self) -> ScaleKind { ScaleKind::Linear }

    fn default_limits(&self) -> (AxisLimits, AxisLimits);

    /// Clear both line containers and reserve room for the coming rebuild.
    fn prepare_containers(&mut self, config: &GridConfig, vertical: &mut Vec<GridLine>, horizontal: &mut Vec<GridLine>);

    /// Generated `(x_ticks, y_ticks)` for `config`, ascending by value.
    fn compute_ticks(&mut self, config: &GridConfig) -> (Vec<Tick>, Vec<Tick>);
}

fn reserve(lines: &mut Vec<GridLine>, grid_on: bool, n: usize) {
    lines.clear();
    if grid_on {
        lines.reserve(n);
    }
}

/// Both axes linear.
#[derive(Clone, Debug, Default)]
pub struct LinearGrid {
    num_vertical_lines: usize,
    num_horizontal_lines: usize,
}

impl GridVariant for LinearGrid {
    fn x_scale(&self) -> ScaleKind { ScaleKind::Linear }

    fn default_limits(&self) -> (AxisLimits, AxisLimits) {
        (AxisLimits::new(0.0, 10.0), AxisLimits::new(0.0, 10.0))
    }

    fn prepare_containers(&mut self, config: &GridConfig, vertical: &mut Vec<GridLine>, horizontal: &mut Vec<GridLine>) {
        let area = &config.grid_area;
        self.num_vertical_lines = ticks::linear_capacity(area.width() as f64, config.tiny_grid_on);
        self.num_horizontal_lines = ticks::linear_capacity(area.height() as f64, config.tiny_grid_on);
        reserve(vertical, config.grid_on, self.num_vertical_lines);
        reserve(horizontal, config.grid_on, self.num_horizontal_lines);
    }

    fn compute_ticks(&mut self, config: &GridConfig) -> (Vec<Tick>, Vec<Tick>) {
        let area = &config.grid_area;
        (
            ticks::linear_ticks(config.x_lim, area.width() as f64, config.tiny_grid_on),
            ticks::linear_ticks(config.y_lim, area.height() as f64, config.tiny_grid_on),
        )
    }
}

/// Logarithmic x axis (decades), linear y axis.
#[derive(Clone, Debug, Default)]
pub struct SemiLogXGrid {
    min_exp: i32,
    max_exp: i32,
    num_vertical_lines: usize,
    num_horizontal_lines: usize,
}

impl SemiLogXGrid {
    /// Exponent range of the last prepared x limits.
    pub fn exponent_range(&self) -> (i32, i32) { (self.min_exp, self.max_exp) }
}

impl GridVariant for SemiLogXGrid {
    fn x_scale(&self) -> ScaleKind { ScaleKind::Log10 }

    fn default_limits(&self) -> (AxisLimits, AxisLimits) {
        (AxisLimits::new(1.0, 1000.0), AxisLimits::new(0.0, 10.0))
    }

    fn prepare_containers(&mut self, config: &GridConfig, vertical: &mut Vec<GridLine>, horizontal: &mut Vec<GridLine>) {
        let (min_exp, max_exp) = config.x_lim.exponent_range();
        self.min_exp = min_exp;
        self.max_exp = max_exp;
        self.num_vertical_lines = ticks::log_capacity(min_exp, max_exp, config.tiny_grid_on);
        self.num_horizontal_lines = ticks::linear_capacity(config.grid_area.height() as f64, config.tiny_grid_on);
        reserve(vertical, config.grid_on, self.num_vertical_lines);
        reserve(horizontal, config.grid_on, self.num_horizontal_lines);
    }

    fn compute_ticks(&mut self, config: &GridConfig) -> (Vec<Tick>, Vec<Tick>) {
        (
            ticks::log_ticks(config.x_lim, config.tiny_grid_on),
            ticks::linear_ticks(config.y_lim, config.grid_area.height() as f64, config.tiny_grid_on),
        )
    }
}
