// File: crates/plot-render-skia/src/render.rs
// Summary: Headless PNG rendering of a grid plus data traces using Skia CPU raster surfaces.

use anyhow::Result;
use plot_core::types::Insets;
use plot_core::{BaseGrid, Color, DrawSurface, GridVariant, RectI32, Theme};
use skia_safe as skia;

use crate::surface::{to_skia_color, to_skia_rect, SkiaSurface};
use crate::text::TextShaper;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw tick labels; off gives pixel-stable output across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Grid area left after applying the insets.
    pub fn grid_area(&self) -> RectI32 {
        let i = &self.insets;
        RectI32::from_ltwh(0, 0, self.width, self.height)
            .inset(i.left as i32, i.top as i32, i.right as i32, i.bottom as i32)
    }
}

/// A data series drawn over the grid.
#[derive(Clone, Debug)]
pub struct Trace {
    pub points: Vec<(f64, f64)>,
    /// `None` uses the theme's trace color.
    pub color: Option<Color>,
    pub width: f32,
}

impl Trace {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points, color: None, width: 2.0 }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Lay the grid out in the options' grid area and paint it and `traces` on `canvas`.
pub fn draw_plot<V: GridVariant>(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    grid: &mut BaseGrid<V>,
    traces: &[Trace],
    opts: &RenderOptions,
) {
    canvas.clear(to_skia_color(opts.theme.background));
    let area = opts.grid_area();
    grid.set_grid_bounds(area);

    let mut surface = SkiaSurface::new(canvas, shaper).with_labels(opts.draw_labels);
    grid.paint(&mut surface, shaper, &opts.theme);

    if area.is_empty() {
        return;
    }
    // Traces are clipped to the grid area
    let transform = grid.transform();
    canvas.save();
    canvas.clip_rect(to_skia_rect(area), skia::ClipOp::Intersect, true);
    for trace in traces {
        let path = transform.series_path(&trace.points);
        if path.len() < 2 {
            continue;
        }
        surface.stroke_path(&path, trace.color.unwrap_or(opts.theme.trace), trace.width);
    }
    canvas.restore();
}

/// Render to PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes<V: GridVariant>(
    grid: &mut BaseGrid<V>,
    traces: &[Trace],
    opts: &RenderOptions,
) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let shaper = TextShaper::new();
    draw_plot(surface.canvas(), &shaper, grid, traces, opts);

    // Snapshot and encode PNG
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the plot to a PNG at `output_png_path`.
pub fn render_to_png<V: GridVariant>(
    grid: &mut BaseGrid<V>,
    traces: &[Trace],
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(grid, traces, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}
