// File: crates/plot-render-skia/src/lib.rs
// Summary: Skia renderer crate; hosts CPU raster surfaces and text shaping for plot-core grids.

pub mod render;
pub mod surface;
pub mod text;

pub use render::{draw_plot, render_to_png, render_to_png_bytes, RenderOptions, Trace};
pub use surface::SkiaSurface;
pub use text::TextShaper;
