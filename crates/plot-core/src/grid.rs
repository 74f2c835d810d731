// File: crates/plot-core/src/grid.rs
// Summary: Grid builder: owns grid-line and label geometry, rebuilds it when the configuration changes.

use crate::axis::{AxisId, AxisLimits, ScaleKind};
use crate::config::{GridConfig, GridConfigParams, GridGraphicParams, GridStyle};
use crate::error::GridError;
use crate::geometry::{LinePath, PointF32, RectI32};
use crate::param::Merge;
use crate::scale::PlotTransform;
use crate::surface::{DrawSurface, TextAlign};
use crate::text::{FontMetrics, LabelFont};
use crate::theme::Theme;
use crate::ticks::{self, Tick, TickLevel};
use crate::variants::{GridVariant, LinearGrid, SemiLogXGrid};

/// One grid line and the data value it marks.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub value: f64,
    pub level: TickLevel,
    pub path: LinePath,
}

/// Tick label text and the pixel rect it is drawn in.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub rect: RectI32,
}

/// Everything the host needs to draw the grid for one paint cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridGeometry {
    /// One per x tick, spanning the grid area top to bottom. Empty when grids are off.
    pub vertical: Vec<GridLine>,
    /// One per y tick, spanning the grid area left to right. Empty when grids are off.
    pub horizontal: Vec<GridLine>,
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    /// Outline of the grid area; `None` when the area is degenerate.
    pub frame: Option<RectI32>,
}

impl GridGeometry {
    fn clear(&mut self) {
        self.vertical.clear();
        self.horizontal.clear();
        self.x_labels.clear();
        self.y_labels.clear();
        self.x_ticks.clear();
        self.y_ticks.clear();
        self.frame = None;
    }

    pub fn lines(&self) -> impl Iterator<Item = &GridLine> {
        self.vertical.iter().chain(self.horizontal.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty() && self.x_labels.is_empty() && self.y_labels.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridState {
    /// Geometry matches the configuration.
    Clean,
    /// A setter changed something since the last build.
    Dirty,
}

/// Grid lines and axis labels for a plot, parameterized by scale policy.
///
/// Setters only record the change and mark the grid dirty; geometry is
/// rebuilt lazily by [`BaseGrid::geometry`] or [`BaseGrid::paint`]. All
/// access is expected from the thread that owns the drawing surface.
pub struct BaseGrid<V: GridVariant> {
    variant: V,
    config: GridConfig,
    graphic_params: GridGraphicParams,
    geometry: GridGeometry,
    state: GridState,
    built_font: Option<LabelFont>,
    on_invalidate: Option<Box<dyn FnMut()>>,
}

/// Linear x, linear y.
pub type Grid = BaseGrid<LinearGrid>;
/// Logarithmic x, linear y.
pub type SemiLogX = BaseGrid<SemiLogXGrid>;

impl Grid {
    pub fn new() -> Self { Self::with_variant(LinearGrid::default()) }
}

impl SemiLogX {
    pub fn new() -> Self { Self::with_variant(SemiLogXGrid::default()) }
}

impl<V: GridVariant + Default> Default for BaseGrid<V> {
    fn default() -> Self { Self::with_variant(V::default()) }
}

impl<V: GridVariant> BaseGrid<V> {
    pub fn with_variant(variant: V) -> Self {
        let (x_lim, y_lim) = variant.default_limits();
        Self {
            variant,
            config: GridConfig::new(x_lim, y_lim),
            graphic_params: GridGraphicParams::default(),
            geometry: GridGeometry::default(),
            state: GridState::Dirty,
            built_font: None,
            on_invalidate: None,
        }
    }

    pub fn with_graphic_params(mut self, params: &GridGraphicParams) -> Self {
        self.graphic_params = params.clone();
        self
    }

    pub fn variant(&self) -> &V { &self.variant }
    pub fn config(&self) -> &GridConfig { &self.config }
    pub fn graphic_params(&self) -> &GridGraphicParams { &self.graphic_params }
    pub fn x_scale(&self) -> ScaleKind { self.variant.x_scale() }
    pub fn y_scale(&self) -> ScaleKind { self.variant.y_scale() }
    pub fn state(&self) -> GridState { self.state }
    pub fn is_dirty(&self) -> bool { self.state == GridState::Dirty }

    /// Called once on every Clean -> Dirty transition, e.g. to schedule a repaint.
    pub fn set_on_invalidate(&mut self, callback: impl FnMut() + 'static) {
        self.on_invalidate = Some(Box::new(callback));
    }

    fn invalidate(&mut self) {
        if self.state == GridState::Clean {
            self.state = GridState::Dirty;
            if let Some(cb) = self.on_invalidate.as_mut() {
                cb();
            }
        }
    }

    fn check_limits(&self, axis: AxisId, min: f64, max: f64) -> Result<AxisLimits, GridError> {
        let (kind, current) = match axis {
            AxisId::X => (self.x_scale(), self.config.x_lim),
            AxisId::Y => (self.y_scale(), self.config.y_lim),
        };
        AxisLimits::checked(axis, min, max, kind).map_err(|e| {
            log::warn!("{e}; keeping [{}, {}]", current.min, current.max);
            e
        })
    }

    /// Set the x limits. Invalid limits are rejected and the previous ones kept.
    pub fn set_x_lim(&mut self, min: f64, max: f64) -> Result<(), GridError> {
        let lim = self.check_limits(AxisId::X, min, max)?;
        if lim != self.config.x_lim {
            self.config.x_lim = lim;
            self.invalidate();
        }
        Ok(())
    }

    /// Set the y limits. Invalid limits are rejected and the previous ones kept.
    pub fn set_y_lim(&mut self, min: f64, max: f64) -> Result<(), GridError> {
        let lim = self.check_limits(AxisId::Y, min, max)?;
        if lim != self.config.y_lim {
            self.config.y_lim = lim;
            self.invalidate();
        }
        Ok(())
    }

    /// Pixel rect the grid lines are drawn in. Labels are placed half a line
    /// height outside it. A degenerate rect yields empty geometry.
    pub fn set_grid_bounds(&mut self, grid_area: RectI32) {
        if grid_area != self.config.grid_area {
            self.config.grid_area = grid_area;
            self.invalidate();
        }
    }

    /// Show grid lines and optionally tiny grid lines. Labels are produced either way.
    pub fn set_grid_on(&mut self, grid_on: bool, tiny_grid_on: bool) {
        if grid_on != self.config.grid_on || tiny_grid_on != self.config.tiny_grid_on {
            self.config.grid_on = grid_on;
            self.config.tiny_grid_on = tiny_grid_on;
            self.invalidate();
        }
    }

    /// Replace generated x ticks. An empty slice restores generated ticks.
    pub fn set_x_ticks(&mut self, x_ticks: &[f64]) {
        if self.config.x_ticks != x_ticks {
            self.config.x_ticks = x_ticks.to_vec();
            self.invalidate();
        }
    }

    /// Replace generated y ticks. An empty slice restores generated ticks.
    pub fn set_y_ticks(&mut self, y_ticks: &[f64]) {
        if self.config.y_ticks != y_ticks {
            self.config.y_ticks = y_ticks.to_vec();
            self.invalidate();
        }
    }

    /// Override x labels in tick order; missing entries keep the numeric label.
    pub fn set_x_labels<S: AsRef<str>>(&mut self, x_labels: &[S]) {
        let labels: Vec<String> = x_labels.iter().map(|s| s.as_ref().to_string()).collect();
        if labels != self.config.x_labels {
            self.config.x_labels = labels;
            self.invalidate();
        }
    }

    /// Override y labels in tick order; missing entries keep the numeric label.
    pub fn set_y_labels<S: AsRef<str>>(&mut self, y_labels: &[S]) {
        let labels: Vec<String> = y_labels.iter().map(|s| s.as_ref().to_string()).collect();
        if labels != self.config.y_labels {
            self.config.y_labels = labels;
            self.invalidate();
        }
    }

    /// Merge `params` over the current graphic params; unset fields are left alone.
    pub fn set_graphic_params(&mut self, params: &GridGraphicParams) {
        let merged = self.graphic_params.merge(params);
        if merged != self.graphic_params {
            self.graphic_params = merged;
            self.invalidate();
        }
    }

    /// Apply every set field of `params` at once. If any limits are invalid
    /// nothing is applied.
    pub fn set_config_params(&mut self, params: &GridConfigParams) -> Result<(), GridError> {
        if let Some(lim) = params.x_lim.get() {
            self.check_limits(AxisId::X, lim.min, lim.max)?;
        }
        if let Some(lim) = params.y_lim.get() {
            self.check_limits(AxisId::Y, lim.min, lim.max)?;
        }
        let next = self.config.with_params(params);
        if next != self.config {
            self.config = next;
            self.invalidate();
        }
        Ok(())
    }

    /// Data <-> pixel mapping for the current limits and grid area.
    pub fn transform(&self) -> PlotTransform {
        PlotTransform::new(
            &self.config.grid_area,
            self.config.x_lim,
            self.x_scale(),
            self.config.y_lim,
            self.y_scale(),
        )
    }

    /// Current geometry, rebuilt first if anything changed.
    pub fn geometry(&mut self, metrics: &dyn FontMetrics, theme: &Theme) -> &GridGeometry {
        let style = self.graphic_params.resolve(theme);
        self.ensure_built(metrics, &style.label_font);
        &self.geometry
    }

    /// Draw grid lines, frame and labels onto `surface`.
    pub fn paint(&mut self, surface: &mut dyn DrawSurface, metrics: &dyn FontMetrics, theme: &Theme) {
        let style = self.graphic_params.resolve(theme);
        self.ensure_built(metrics, &style.label_font);
        paint_geometry(&self.geometry, &style, surface);
    }

    fn ensure_built(&mut self, metrics: &dyn FontMetrics, font: &LabelFont) {
        if self.state == GridState::Dirty || self.built_font.as_ref() != Some(font) {
            self.rebuild(metrics, font);
        }
    }

    fn rebuild(&mut self, metrics: &dyn FontMetrics, font: &LabelFont) {
        let mut geometry = std::mem::take(&mut self.geometry);
        geometry.clear();

        let area = self.config.grid_area;
        if area.is_empty() {
            log::trace!("grid area {area:?} is empty; nothing to lay out");
        } else {
            self.variant.prepare_containers(&self.config, &mut geometry.vertical, &mut geometry.horizontal);
            let (gen_x, gen_y) = self.variant.compute_ticks(&self.config);
            let x_ticks = resolve_ticks(gen_x, &self.config.x_ticks, &self.config.x_labels, self.config.x_lim, self.x_scale());
            let y_ticks = resolve_ticks(gen_y, &self.config.y_ticks, &self.config.y_labels, self.config.y_lim, self.y_scale());

            let t = self.transform();
            if self.config.grid_on {
                let (top, bottom) = (area.top as f32, area.bottom as f32);
                let (left, right) = (area.left as f32, area.right as f32);
                for tick in &x_ticks {
                    let x = t.x.to_pixel(tick.value) as f32;
                    geometry.vertical.push(GridLine {
                        value: tick.value,
                        level: tick.level,
                        path: LinePath::segment(PointF32::new(x, top), PointF32::new(x, bottom)),
                    });
                }
                for tick in &y_ticks {
                    let y = t.y.to_pixel(tick.value) as f32;
                    geometry.horizontal.push(GridLine {
                        value: tick.value,
                        level: tick.level,
                        path: LinePath::segment(PointF32::new(left, y), PointF32::new(right, y)),
                    });
                }
            }

            let line_height = metrics.line_height(font);
            let x_labels = x_ticks.iter().filter_map(|tick| {
                let text = tick.label.as_ref()?;
                let px = t.x.to_pixel(tick.value);
                Some(x_label(text, px, &area, metrics, font, line_height))
            });
            geometry.x_labels = drop_overlapping(x_labels.collect());
            let y_labels = y_ticks.iter().filter_map(|tick| {
                let text = tick.label.as_ref()?;
                let py = t.y.to_pixel(tick.value);
                Some(y_label(text, py, &area, metrics, font, line_height))
            });
            geometry.y_labels = drop_overlapping(y_labels.collect());

            geometry.frame = Some(area);
            geometry.x_ticks = x_ticks;
            geometry.y_ticks = y_ticks;
        }

        log::debug!(
            "grid rebuilt: {} vertical / {} horizontal lines, {} x / {} y labels",
            geometry.vertical.len(),
            geometry.horizontal.len(),
            geometry.x_labels.len(),
            geometry.y_labels.len()
        );
        self.geometry = geometry;
        self.built_font = Some(font.clone());
        self.state = GridState::Clean;
    }
}

/// Custom ticks replace generated ones; custom labels then overwrite in order.
fn resolve_ticks(generated: Vec<Tick>, custom: &[f64], labels: &[String], limits: AxisLimits, kind: ScaleKind) -> Vec<Tick> {
    let mut ticks = if custom.is_empty() { generated } else { ticks::custom_ticks(custom, limits, kind) };
    ticks::apply_labels(&mut ticks, labels);
    ticks
}

fn label_size(text: &str, metrics: &dyn FontMetrics, font: &LabelFont, line_height: f32) -> (i32, i32) {
    let w = metrics.text_width(text, font).max(0.0).ceil() as i32;
    (w, line_height.max(0.0).ceil() as i32)
}

/// Centered under the tick, half a line height below the grid area.
fn x_label(text: &str, px: f64, area: &RectI32, metrics: &dyn FontMetrics, font: &LabelFont, line_height: f32) -> AxisLabel {
    let (w, h) = label_size(text, metrics, font, line_height);
    let margin = (line_height * 0.5).round() as i32;
    let left = (px - w as f64 * 0.5).round() as i32;
    AxisLabel { text: text.to_string(), rect: RectI32::from_ltwh(left, area.bottom.saturating_add(margin), w, h) }
}

/// Right-aligned half a line height left of the grid area, centered on the tick.
fn y_label(text: &str, py: f64, area: &RectI32, metrics: &dyn FontMetrics, font: &LabelFont, line_height: f32) -> AxisLabel {
    let (w, h) = label_size(text, metrics, font, line_height);
    let margin = (line_height * 0.5).round() as i32;
    let right = area.left.saturating_sub(margin);
    let top = (py - h as f64 * 0.5).round() as i32;
    AxisLabel { text: text.to_string(), rect: RectI32::from_ltwh(right.saturating_sub(w), top, w, h) }
}

/// Skip labels overlapping the previously kept one. The last label wins over
/// its predecessors (but never evicts the first).
fn drop_overlapping(labels: Vec<AxisLabel>) -> Vec<AxisLabel> {
    let n = labels.len();
    let mut kept: Vec<AxisLabel> = Vec::with_capacity(n);
    for (i, label) in labels.into_iter().enumerate() {
        let collides = |kept: &Vec<AxisLabel>| kept.last().map_or(false, |k| k.rect.intersects(&label.rect));
        if i + 1 == n {
            while kept.len() > 1 && collides(&kept) {
                kept.pop();
            }
        }
        if collides(&kept) {
            continue;
        }
        kept.push(label);
    }
    kept
}

fn paint_geometry(geometry: &GridGeometry, style: &GridStyle, surface: &mut dyn DrawSurface) {
    for line in geometry.lines() {
        match line.level {
            TickLevel::Major => surface.stroke_path(&line.path, style.grid, GridStyle::GRID_WIDTH),
            TickLevel::Minor => surface.stroke_path(&line.path, style.tiny_grid, GridStyle::TINY_GRID_WIDTH),
        }
    }
    if let Some(frame) = geometry.frame {
        surface.stroke_rect(frame, style.frame, GridStyle::FRAME_WIDTH);
    }
    for label in &geometry.x_labels {
        surface.draw_text(&label.text, label.rect, TextAlign::Center, &style.label_font, style.label);
    }
    for label in &geometry.y_labels {
        surface.draw_text(&label.text, label.rect, TextAlign::Right, &style.label_font, style.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(l: i32, r: i32) -> AxisLabel {
        AxisLabel { text: String::new(), rect: RectI32::from_ltrb(l, 0, r, 10) }
    }

    #[test]
    fn overlapping_labels_are_thinned() {
        let kept = drop_overlapping(vec![label(0, 10), label(5, 15), label(12, 22), label(20, 30)]);
        let lefts: Vec<i32> = kept.iter().map(|l| l.rect.left).collect();
        // 5..15 hits 0..10; 20..30 evicts 12..22 as the last label
        assert_eq!(lefts, vec![0, 20]);
    }

    #[test]
    fn last_label_never_evicts_first() {
        let kept = drop_overlapping(vec![label(0, 10), label(5, 15)]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].rect.left, 0);
    }
}
