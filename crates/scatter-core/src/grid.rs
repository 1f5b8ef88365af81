// File: crates/scatter-core/src/grid.rs
// Summary: "Nice" tick layout for grid lines and axis labels.

/// Upper bound on emitted ticks; guards against pathological spans.
const MAX_TICKS: usize = 1_000;

/// Round-number ticks covering `[min, max]` inclusively.
///
/// The raw step `span / (count - 1)` is snapped to 1, 2, 5 or 10 times its
/// power of ten. Ticks run from `floor(min/step)*step` to
/// `ceil(max/step)*step`. A degenerate range yields `[min]`.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || min == max {
        return vec![min];
    }
    let (lo, hi) = if min < max { (min, max) } else { (max, min) };
    let step = nice_step((hi - lo) / count.saturating_sub(1).max(1) as f64);
    if !step.is_finite() || step <= 0.0 {
        return vec![min];
    }
    let start = (lo / step).floor() * step;
    let end = (hi / step).ceil() * step;
    // Half-step slack so float error cannot drop the last tick.
    let limit = end + 0.5 * step;
    (0..MAX_TICKS)
        .map(|i| start + i as f64 * step)
        .take_while(|v| *v <= limit)
        .collect()
}

/// Snap a raw step to 1/2/5/10 × 10^k.
pub fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        2.0
    } else if norm < 7.0 {
        5.0
    } else {
        10.0
    };
    mult * mag
}
