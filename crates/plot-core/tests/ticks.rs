// File: crates/plot-core/tests/ticks.rs
// Purpose: Tick policies and coordinate transform properties (round trips, log decades, overrides).

use plot_core::ticks::{apply_labels, custom_ticks, linear_ticks, log_ticks};
use plot_core::{to_pixel, to_value, AxisLimits, PixelRange, PlotTransform, PointF32, RectI32, ScaleKind, TickLevel};

#[test]
fn round_trip_over_many_ranges() {
    let cases = [
        (ScaleKind::Linear, -100.0, 100.0),
        (ScaleKind::Linear, 0.0001, 0.0002),
        (ScaleKind::Linear, 1e6, 3e9),
        (ScaleKind::Log10, 20.0, 22_000.0),
        (ScaleKind::Log10, 1e-6, 1.0),
    ];
    let ranges = [PixelRange::new(0.0, 640.0), PixelRange::new(480.0, 12.0)];
    for (kind, min, max) in cases {
        let lim = AxisLimits::new(min, max);
        for range in ranges {
            for i in 0..=50 {
                let t = i as f64 / 50.0;
                let v = match kind {
                    ScaleKind::Linear => min + t * (max - min),
                    ScaleKind::Log10 => 10f64.powf(min.log10() + t * (max.log10() - min.log10())),
                };
                let back = to_value(to_pixel(v, lim, range, kind), lim, range, kind);
                let tol = 1e-9 * v.abs().max(max.abs());
                assert!((back - v).abs() <= tol, "{kind:?} [{min}, {max}] v={v} back={back}");
            }
        }
    }
}

#[test]
fn log_decades_are_the_major_ticks() {
    let ticks = log_ticks(AxisLimits::new(1.0, 1000.0), false);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    let labels: Vec<&str> = ticks.iter().filter_map(|t| t.label.as_deref()).collect();
    assert_eq!(values, vec![1.0, 10.0, 100.0, 1000.0]);
    assert_eq!(labels, vec!["1", "10", "100", "1000"]);
}

#[test]
fn log_tiny_grid_adds_unlabeled_subdivisions() {
    let ticks = log_ticks(AxisLimits::new(1.0, 1000.0), true);
    let majors: Vec<f64> = ticks.iter().filter(|t| t.level == TickLevel::Major).map(|t| t.value).collect();
    assert_eq!(majors, vec![1.0, 10.0, 100.0, 1000.0]);

    let minors: Vec<&plot_core::Tick> = ticks.iter().filter(|t| t.level == TickLevel::Minor).collect();
    assert_eq!(minors.len(), 3 * 8);
    assert!(minors.iter().all(|t| t.label.is_none()));
    for k in 0..3 {
        for m in 2..=9 {
            let want = m as f64 * 10f64.powi(k);
            assert!(minors.iter().any(|t| (t.value - want).abs() < 1e-9 * want), "missing {want}");
        }
    }
    assert!(ticks.windows(2).all(|w| w[0].value < w[1].value));
}

#[test]
fn log_ticks_are_clipped_to_limits() {
    let ticks = log_ticks(AxisLimits::new(100.0, 22_000.0), true);
    assert_eq!(ticks.first().map(|t| t.value), Some(100.0));
    assert!(ticks.iter().all(|t| t.value >= 100.0 && t.value <= 22_000.0));
    let labels: Vec<&str> = ticks.iter().filter_map(|t| t.label.as_deref()).collect();
    assert_eq!(labels, vec!["100", "1000", "10000"]);
}

#[test]
fn log_ticks_never_produce_nan_or_infinity() {
    for (min, max) in [(0.0, 10.0), (-5.0, 10.0), (f64::NAN, 1.0), (10.0, 1.0)] {
        let ticks = log_ticks(AxisLimits::new(min, max), true);
        assert!(ticks.is_empty(), "invalid limits [{min}, {max}] must not produce ticks");
    }
}

#[test]
fn linear_ticks_are_stable_and_ascending() {
    let a = linear_ticks(AxisLimits::new(-2.5, 7.5), 400.0, true);
    let b = linear_ticks(AxisLimits::new(-2.5, 7.5), 400.0, true);
    assert_eq!(a, b);
    assert!(a.windows(2).all(|w| w[0].value < w[1].value));
    assert_eq!(a.first().and_then(|t| t.label.as_deref()), Some("-2.5"));
    assert_eq!(a.last().and_then(|t| t.label.as_deref()), Some("7.5"));
}

#[test]
fn linear_ticks_need_pixels() {
    assert!(linear_ticks(AxisLimits::new(0.0, 9.0), 0.0, false).is_empty());
    assert_eq!(linear_ticks(AxisLimits::new(0.0, 9.0), 30.0, false).len(), 2);
}

#[test]
fn custom_log_ticks_drop_non_positive() {
    let ticks = custom_ticks(&[1000.0, -1.0, 0.0, 50.0, 5.0], AxisLimits::new(1.0, 1000.0), ScaleKind::Log10);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![5.0, 50.0, 1000.0]);
    let labels: Vec<&str> = ticks.iter().filter_map(|t| t.label.as_deref()).collect();
    assert_eq!(labels, vec!["5", "50", "1000"]);
}

#[test]
fn labels_skip_minor_ticks() {
    let mut ticks = log_ticks(AxisLimits::new(1.0, 100.0), true);
    apply_labels(&mut ticks, &["one".to_string(), "ten".to_string()]);
    let labels: Vec<&str> = ticks.iter().filter_map(|t| t.label.as_deref()).collect();
    assert_eq!(labels, vec!["one", "ten", "100"]);
}

#[test]
fn trace_point_finds_nearest_sample() {
    let area = RectI32::from_ltwh(0, 0, 300, 100);
    let t = PlotTransform::new(
        &area,
        AxisLimits::new(10.0, 10_000.0),
        ScaleKind::Log10,
        AxisLimits::new(-60.0, 0.0),
        ScaleKind::Linear,
    );
    let data = [(0.0, -10.0), (10.0, -60.0), (100.0, -30.0), (1000.0, -30.0), (10_000.0, 0.0)];
    // x = 100 lands at 100 px; y = -30 at mid height
    assert_eq!(t.trace_point(&data, PointF32::new(103.0, 48.0)), Some(2));
    // a sample at x = 0 cannot be shown on the log axis and is skipped
    assert_eq!(t.series_path(&data).len(), 4);
    assert_eq!(t.trace_point(&data, PointF32::new(-50.0, 0.0)), Some(1));
}

#[test]
fn overflowing_span_yields_no_linear_ticks() {
    let ticks = linear_ticks(AxisLimits::new(-1e308, 1e308), 400.0, true);
    assert!(ticks.is_empty());
}
