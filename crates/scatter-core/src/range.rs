// File: crates/scatter-core/src/range.rs
// Summary: Data extents across all series, padded for display (linear or log-aware).

use crate::axis::Axis;
use crate::series::Series;

/// Fraction of the x span added on each side.
const X_PAD: f64 = 0.04;
/// Fraction of the linear y span added on each side.
const Y_PAD: f64 = 0.08;
/// Multiplicative expansion of a log y range.
const LOG_LOW: f64 = 0.85;
const LOG_HIGH: f64 = 1.15;
/// Floor for the lower log bound.
pub const LOG_FLOOR: f64 = 1e-12;

/// Axis extents for one draw cycle. Recomputed on every draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Range {
    pub const UNIT: Range = Range { xmin: 0.0, xmax: 1.0, ymin: 0.0, ymax: 1.0 };

    /// Scan every finite point (positive y only when `y_log`) and pad.
    ///
    /// With no usable point the unit range is returned as is; under `y_log`
    /// its y side still goes through the log expansion so the lower bound
    /// stays positive.
    pub fn compute(series: &[Series], y_log: bool) -> Self {
        let mut xmin = f64::INFINITY;
        let mut xmax = f64::NEG_INFINITY;
        let mut ymin = f64::INFINITY;
        let mut ymax = f64::NEG_INFINITY;
        for s in series {
            for (_, x, y) in s.finite_points(y_log) {
                xmin = xmin.min(x);
                xmax = xmax.max(x);
                ymin = ymin.min(y);
                ymax = ymax.max(y);
            }
        }
        if !xmin.is_finite() {
            let mut r = Self::UNIT;
            if y_log {
                (r.ymin, r.ymax) = pad_log(r.ymin, r.ymax);
            }
            return r;
        }

        let (xmin, xmax) = pad_linear(xmin, xmax, X_PAD);
        let (ymin, ymax) = if y_log { pad_log(ymin, ymax) } else { pad_linear(ymin, ymax, Y_PAD) };
        Self { xmin, xmax, ymin, ymax }
    }

    pub fn x_axis(&self) -> Axis {
        Axis::linear(self.xmin, self.xmax)
    }

    pub fn y_axis(&self, y_log: bool) -> Axis {
        if y_log { Axis::log10(self.ymin, self.ymax) } else { Axis::linear(self.ymin, self.ymax) }
    }
}

/// Widen by `frac` of the span per side, or by 1 when the span is zero.
fn pad_linear(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let pad = (max - min) * frac;
    let pad = if pad == 0.0 { 1.0 } else { pad };
    (min - pad, max + pad)
}

fn pad_log(min: f64, max: f64) -> (f64, f64) {
    ((min * LOG_LOW).max(LOG_FLOOR), max * LOG_HIGH)
}
