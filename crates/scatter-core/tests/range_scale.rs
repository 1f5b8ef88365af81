// File: crates/scatter-core/tests/range_scale.rs
// Purpose: Padded data ranges and the pixel mapping built from them.

use approx::assert_relative_eq;
use scatter_core::range::LOG_FLOOR;
use scatter_core::{build_pixel_cache, Insets, Range, Scales, Series};

fn series(x: &[f64], y: &[f64]) -> Series {
    Series::new("s", x.to_vec(), y.to_vec(), "#f59e0b").expect("lengths match")
}

#[test]
fn empty_input_falls_back_to_unit_range() {
    assert_eq!(Range::compute(&[], false), Range::UNIT);
    let nan_only = series(&[f64::NAN], &[1.0]);
    assert_eq!(Range::compute(&[nan_only], false), Range::UNIT);
}

#[test]
fn linear_range_is_padded() {
    let s = series(&[0.0, 5.0, 10.0], &[0.0, 50.0, 100.0]);
    let r = Range::compute(&[s], false);
    assert_relative_eq!(r.xmin, -0.4, epsilon = 1e-12);
    assert_relative_eq!(r.xmax, 10.4, epsilon = 1e-12);
    assert_relative_eq!(r.ymin, -8.0, epsilon = 1e-12);
    assert_relative_eq!(r.ymax, 108.0, epsilon = 1e-12);
}

#[test]
fn single_point_widens_by_one() {
    let r = Range::compute(&[series(&[2.0], &[3.0])], false);
    assert_eq!(r, Range { xmin: 1.0, xmax: 3.0, ymin: 2.0, ymax: 4.0 });
}

#[test]
fn log_range_skips_non_positive_samples() {
    let s = series(&[1.0, 2.0, 3.0, 4.0], &[0.0, -1.0, 10.0, 100.0]);
    let r = Range::compute(&[s], true);
    assert_relative_eq!(r.xmin, 2.96, epsilon = 1e-12);
    assert_relative_eq!(r.xmax, 4.04, epsilon = 1e-12);
    assert_relative_eq!(r.ymin, 8.5, epsilon = 1e-12);
    assert_relative_eq!(r.ymax, 115.0, epsilon = 1e-9);
}

#[test]
fn log_fallback_keeps_positive_floor() {
    let r = Range::compute(&[series(&[1.0], &[-3.0])], true);
    assert_eq!(r.ymin, LOG_FLOOR);
    assert!(r.ymin > 0.0);
}

#[test]
fn scales_map_range_onto_plot_area() {
    let range = Range { xmin: 0.0, xmax: 10.0, ymin: 0.0, ymax: 100.0 };
    let sc = Scales::new(200.0, 120.0, Insets::default(), range, false);
    let plot = sc.plot_rect();
    assert_relative_eq!(sc.x_to_px(0.0), plot.left);
    assert_relative_eq!(sc.x_to_px(10.0), plot.right);
    assert_relative_eq!(sc.y_to_px(100.0), plot.top);
    assert_relative_eq!(sc.y_to_px(0.0), plot.bottom);
    assert_relative_eq!(sc.px_to_x(sc.x_to_px(3.5)), 3.5, epsilon = 1e-4);
    assert_relative_eq!(sc.px_to_y(sc.y_to_px(42.0)), 42.0, epsilon = 1e-3);
}

#[test]
fn log_scale_stays_finite_at_and_below_zero() {
    let range = Range { xmin: 0.0, xmax: 1.0, ymin: 1.0, ymax: 1000.0 };
    let sc = Scales::new(200.0, 120.0, Insets::default(), range, true);
    assert!(sc.y_to_px(0.0).is_finite());
    assert!(sc.y_to_px(-5.0).is_finite());
    let plot = sc.plot_rect();
    assert_relative_eq!(sc.y_to_px(1000.0), plot.top);
    assert_relative_eq!(sc.y_to_px(1.0), plot.bottom);
    let mid = (plot.top + plot.bottom) / 2.0;
    assert_relative_eq!(sc.y_to_px(10f64.powf(1.5)), mid, epsilon = 1e-3);
}

#[test]
fn pixel_cache_keeps_only_plottable_samples() {
    let a = series(&[1.0, 2.0, 3.0, 4.0], &[0.0, -1.0, 10.0, f64::NAN]);
    let b = series(&[], &[]);
    let range = Range::compute(&[a.clone(), b.clone()], true);
    let sc = Scales::new(300.0, 200.0, Insets::default(), range, true);
    let cache = build_pixel_cache(&[a, b], &sc);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache[0].points.len(), 1);
    assert_eq!(cache[0].points[0].i, 2);
    assert!(cache[1].points.is_empty());
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = Series::new("bad", vec![1.0, 2.0], vec![1.0], "#fff").unwrap_err();
    assert!(err.to_string().contains("bad"));
}
