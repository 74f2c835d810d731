// File: crates/plot-render-skia/tests/render_png.rs
// Purpose: End-to-end render of grids and traces to PNG through Skia, decoded and spot-checked.

use plot_core::{Color, FontMetrics, Grid, LabelFont, SemiLogX};
use plot_render_skia::{render_to_png, render_to_png_bytes, RenderOptions, TextShaper, Trace};

fn spectrum() -> Vec<(f64, f64)> {
    (0..200)
        .map(|i| {
            let f = 20.0 * 10f64.powf(i as f64 / 199.0 * 3.0);
            (f, -40.0 + 20.0 * (i as f64 * 0.1).sin())
        })
        .collect()
}

#[test]
fn render_semilogx_png_bytes() {
    let mut grid = SemiLogX::new();
    grid.set_x_lim(20.0, 20_000.0).unwrap();
    grid.set_y_lim(-60.0, 10.0).unwrap();
    grid.set_grid_on(true, true);

    let mut opts = RenderOptions::default();
    opts.width = 400;
    opts.height = 300;
    opts.draw_labels = false; // avoid font variance
    let bytes = render_to_png_bytes(&mut grid, &[Trace::new(spectrum())], &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (400, 300));

    // Background in the top-left corner, outside the grid area
    let bg = opts.theme.background;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r, bg.g, bg.b, 255]);

    // Left frame edge is drawn over the background
    let area = opts.grid_area();
    let mid_y = ((area.top + area.bottom) / 2) as u32;
    assert_ne!(img.get_pixel(area.left as u32, mid_y).0, [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn render_linear_png_file() {
    let mut grid = Grid::new();
    grid.set_x_lim(0.0, 4.0).unwrap();
    grid.set_y_lim(0.0, 4.0).unwrap();
    grid.set_grid_on(true, false);
    let trace = Trace::new(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
        .with_color(Color::from_rgb(255, 0, 0));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/linear_grid.png");
    render_to_png(&mut grid, &[trace], &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn degenerate_surface_area_still_renders() {
    let mut grid = Grid::new();
    let mut opts = RenderOptions::default();
    opts.width = 60;
    opts.height = 40; // smaller than the insets: empty grid area
    opts.draw_labels = false;
    assert!(opts.grid_area().is_empty());
    assert_eq!(RenderOptions::default().grid_area(), plot_core::RectI32::from_ltrb(72, 24, 1000, 584));
    let bytes = render_to_png_bytes(&mut grid, &[Trace::new(spectrum())], &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn shaper_metrics_are_positive() {
    let shaper = TextShaper::new();
    let font = LabelFont::default();
    assert!(shaper.line_height(&font) > 0.0);
    assert!(shaper.text_width("1000", &font) >= 0.0);
}
