// File: crates/scatter-core/tests/ticks.rs
// Purpose: Nice tick layout on linear and log axes.

use approx::assert_relative_eq;
use proptest::prelude::*;
use scatter_core::grid::nice_step;
use scatter_core::{nice_ticks, Axis};

#[test]
fn zero_to_hundred_in_twenties() {
    let t = nice_ticks(0.0, 100.0, 6);
    assert_eq!(t.len(), 6);
    for (i, v) in t.iter().enumerate() {
        assert_relative_eq!(*v, i as f64 * 20.0, epsilon = 1e-9);
    }
}

#[test]
fn degenerate_range_is_single_tick() {
    assert_eq!(nice_ticks(5.0, 5.0, 6), vec![5.0]);
}

#[test]
fn ticks_extend_past_unround_bounds() {
    let t = nice_ticks(0.3, 9.7, 6);
    assert_relative_eq!(t[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(*t.last().unwrap(), 10.0, epsilon = 1e-9);
}

#[test]
fn reversed_bounds_are_swapped() {
    assert_eq!(nice_ticks(100.0, 0.0, 6), nice_ticks(0.0, 100.0, 6));
}

#[test]
fn step_snaps_to_one_two_five() {
    assert_relative_eq!(nice_step(0.12), 0.1, epsilon = 1e-12);
    assert_relative_eq!(nice_step(2.4), 2.0, epsilon = 1e-12);
    assert_relative_eq!(nice_step(45.0), 50.0, epsilon = 1e-9);
    assert_relative_eq!(nice_step(800.0), 1000.0, epsilon = 1e-9);
}

#[test]
fn log_axis_ticks_are_powers_of_ten() {
    let t = Axis::log10(1.0, 1e6).ticks(6);
    let exps: Vec<f64> = t.iter().map(|v| v.log10()).collect();
    assert_relative_eq!(exps[0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(*exps.last().unwrap(), 6.0, epsilon = 1e-9);
    for w in exps.windows(2) {
        assert_relative_eq!(w[1] - w[0], 1.0, epsilon = 1e-9);
    }
}

proptest! {
    #[test]
    fn ticks_cover_range_with_even_steps(min in -1.0e6f64..1.0e6, span in 1.0e-3f64..1.0e6) {
        let max = min + span;
        let t = nice_ticks(min, max, 6);
        prop_assert!(t.len() >= 2);
        let step = t[1] - t[0];
        let tol = step * 1e-6;
        prop_assert!(t[0] <= min + tol);
        prop_assert!(*t.last().unwrap() >= max - tol);
        for w in t.windows(2) {
            prop_assert!(((w[1] - w[0]) - step).abs() <= tol);
        }
    }
}
