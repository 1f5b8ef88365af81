// File: crates/scatter-core/tests/format.rs
// Purpose: Display formatting thresholds and the missing-value placeholder.

use proptest::prelude::*;
use scatter_core::{fmt, fmt_opt, PLACEHOLDER};

#[test]
fn bucket_boundaries() {
    assert_eq!(fmt(0.0009), "9.00e-4");
    assert_eq!(fmt(0.001), "0.001");
    assert_eq!(fmt(0.0), "0.000");
    assert_eq!(fmt(3.14159), "3.142");
    assert_eq!(fmt(10.0), "10.00");
    assert_eq!(fmt(99.9), "99.90");
    assert_eq!(fmt(100.0), "100.0");
    assert_eq!(fmt(9999.0), "9999.0");
    assert_eq!(fmt(10_000.0), "1.00e+4");
}

#[test]
fn negatives_use_magnitude() {
    assert_eq!(fmt(-12.5), "-12.50");
    assert_eq!(fmt(-0.0005), "-5.00e-4");
    assert_eq!(fmt(-250.0), "-250.0");
}

#[test]
fn exact_halves_round_away_from_zero() {
    assert_eq!(fmt(0.0625), "0.063");
    assert_eq!(fmt(1.0625), "1.063");
    assert_eq!(fmt(12.125), "12.13");
    assert_eq!(fmt(-12.125), "-12.13");
    assert_eq!(fmt(100.25), "100.3");
    assert_eq!(fmt(112_500.0), "1.13e+5");
    assert_eq!(fmt(-112_500.0), "-1.13e+5");
}

#[test]
fn negative_zero_prints_unsigned() {
    assert_eq!(fmt(-0.0), "0.000");
    assert_eq!(fmt_opt(Some(-0.0)), "0.000");
}

#[test]
fn non_finite_and_missing_show_placeholder() {
    assert_eq!(fmt(f64::NAN), PLACEHOLDER);
    assert_eq!(fmt(f64::INFINITY), PLACEHOLDER);
    assert_eq!(fmt(f64::NEG_INFINITY), PLACEHOLDER);
    assert_eq!(fmt_opt(None), "\u{2013}");
    assert_eq!(fmt_opt(Some(2.0)), "2.000");
}

proptest! {
    #[test]
    fn scientific_only_outside_mid_band(v in prop::num::f64::NORMAL) {
        let s = fmt(v);
        let av = v.abs();
        let sci = av < 0.001 || av >= 10_000.0;
        prop_assert_eq!(s.contains('e'), sci, "{} -> {}", v, s);
    }
}
