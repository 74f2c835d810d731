// File: crates/plot-core/src/config.rs
// Summary: Grid configuration and graphic parameters with partial-override merge.

use crate::axis::AxisLimits;
use crate::geometry::RectI32;
use crate::param::{Merge, Param};
use crate::text::LabelFont;
use crate::theme::{Color, Theme};

/// Partial grid configuration; only set fields are applied.
///
/// ```
/// use plot_core::config::GridConfigParams;
///
/// let mut p = GridConfigParams::default();
/// p.grid_on = true.into();
/// assert!(p.grid_on.is_set());
/// assert!(!p.x_lim.is_set());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridConfigParams {
    /// First grid line is drawn at `min`, the last at `max`.
    pub x_lim: Param<AxisLimits>,
    pub y_lim: Param<AxisLimits>,
    /// Pixel rect the grid lines are drawn in; labels go outside it.
    pub grid_area: Param<RectI32>,
    pub grid_on: Param<bool>,
    pub tiny_grid_on: Param<bool>,
    pub x_ticks: Param<Vec<f64>>,
    pub y_ticks: Param<Vec<f64>>,
    pub x_labels: Param<Vec<String>>,
    pub y_labels: Param<Vec<String>>,
}

impl Merge for GridConfigParams {
    fn merge(&self, over: &Self) -> Self {
        Self {
            x_lim: self.x_lim.merged(&over.x_lim),
            y_lim: self.y_lim.merged(&over.y_lim),
            grid_area: self.grid_area.merged(&over.grid_area),
            grid_on: self.grid_on.merged(&over.grid_on),
            tiny_grid_on: self.tiny_grid_on.merged(&over.tiny_grid_on),
            x_ticks: self.x_ticks.merged(&over.x_ticks),
            y_ticks: self.y_ticks.merged(&over.y_ticks),
            x_labels: self.x_labels.merged(&over.x_labels),
            y_labels: self.y_labels.merged(&over.y_labels),
        }
    }
}

/// Fully resolved grid configuration owned by one grid.
/// Empty override vectors mean "use generated ticks/labels".
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub x_lim: AxisLimits,
    pub y_lim: AxisLimits,
    pub grid_area: RectI32,
    pub grid_on: bool,
    pub tiny_grid_on: bool,
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
}

impl GridConfig {
    /// Grid lines off, empty area; labels appear once bounds are set.
    pub fn new(x_lim: AxisLimits, y_lim: AxisLimits) -> Self {
        Self {
            x_lim,
            y_lim,
            grid_area: RectI32::default(),
            grid_on: false,
            tiny_grid_on: false,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            x_labels: Vec::new(),
            y_labels: Vec::new(),
        }
    }

    /// Copy of `self` with every set field of `params` applied. No validation.
    pub fn with_params(&self, params: &GridConfigParams) -> Self {
        Self {
            x_lim: params.x_lim.value_or(self.x_lim),
            y_lim: params.y_lim.value_or(self.y_lim),
            grid_area: params.grid_area.value_or(self.grid_area),
            grid_on: params.grid_on.value_or(self.grid_on),
            tiny_grid_on: params.tiny_grid_on.value_or(self.tiny_grid_on),
            x_ticks: params.x_ticks.get().cloned().unwrap_or_else(|| self.x_ticks.clone()),
            y_ticks: params.y_ticks.get().cloned().unwrap_or_else(|| self.y_ticks.clone()),
            x_labels: params.x_labels.get().cloned().unwrap_or_else(|| self.x_labels.clone()),
            y_labels: params.y_labels.get().cloned().unwrap_or_else(|| self.y_labels.clone()),
        }
    }
}

/// Colors and font of the grid; unset fields come from the [`Theme`] at paint time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridGraphicParams {
    pub grid_colour: Param<Color>,
    pub label_colour: Param<Color>,
    pub frame_colour: Param<Color>,
    pub label_font: Param<LabelFont>,
}

impl Merge for GridGraphicParams {
    fn merge(&self, over: &Self) -> Self {
        Self {
            grid_colour: self.grid_colour.merged(&over.grid_colour),
            label_colour: self.label_colour.merged(&over.label_colour),
            frame_colour: self.frame_colour.merged(&over.frame_colour),
            label_font: self.label_font.merged(&over.label_font),
        }
    }
}

impl GridGraphicParams {
    pub fn resolve(&self, theme: &Theme) -> GridStyle {
        let grid = self.grid_colour.value_or(theme.grid);
        GridStyle {
            grid,
            tiny_grid: grid.with_alpha(grid.a / 2),
            label: self.label_colour.value_or(theme.label),
            frame: self.frame_colour.value_or(theme.frame),
            label_font: self.label_font.get().cloned().unwrap_or_else(|| theme.label_font.clone()),
        }
    }
}

/// Graphic params with every field decided.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    pub grid: Color,
    pub tiny_grid: Color,
    pub label: Color,
    pub frame: Color,
    pub label_font: LabelFont,
}

impl GridStyle {
    pub const GRID_WIDTH: f32 = 1.0;
    pub const TINY_GRID_WIDTH: f32 = 0.5;
    pub const FRAME_WIDTH: f32 = 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_touches_only_set_fields() {
        let mut base = GridGraphicParams::default();
        base.grid_colour = Color::from_rgb(1, 2, 3).into();
        base.label_font = LabelFont::new("mono", 10.0).into();

        let mut over = GridGraphicParams::default();
        over.label_font = LabelFont::new("serif", 12.0).into();

        let merged = base.merge(&over);
        assert_eq!(merged.grid_colour.get(), Some(&Color::from_rgb(1, 2, 3)));
        assert_eq!(merged.label_font.get().map(|f| f.family.as_str()), Some("serif"));
        assert!(!merged.frame_colour.is_set());
    }

    #[test]
    fn resolve_falls_back_to_theme() {
        let theme = Theme::light();
        let mut p = GridGraphicParams::default();
        p.label_colour = Color::from_rgb(9, 9, 9).into();
        let style = p.resolve(&theme);
        assert_eq!(style.grid, theme.grid);
        assert_eq!(style.label, Color::from_rgb(9, 9, 9));
        assert_eq!(style.label_font, theme.label_font);
    }

    #[test]
    fn config_with_params_is_pure() {
        let base = GridConfig::new(AxisLimits::new(0.0, 1.0), AxisLimits::new(0.0, 2.0));
        let mut p = GridConfigParams::default();
        p.y_lim = AxisLimits::new(-1.0, 1.0).into();
        let next = base.with_params(&p);
        assert_eq!(next.x_lim, base.x_lim);
        assert_eq!(next.y_lim, AxisLimits::new(-1.0, 1.0));
        assert_eq!(base.y_lim, AxisLimits::new(0.0, 2.0));
    }
}
