// File: crates/scatter-core/src/series.rs
// Summary: Named (x, y) series model, the series palette and legend entries.
// Notes:
// - Series are immutable once handed to a chart; rebinding means constructing
//   a new chart.
// - x must be ascending for hover lookup. This is a caller obligation; debug
//   builds warn when it is violated but nothing is re-sorted.

use crate::error::{ChartError, ChartResult};

/// Default series colors, cycled in declaration order.
pub const PALETTE: [&str; 6] = [
    "#f59e0b", // amber
    "#38bdf8", // sky
    "#a78bfa", // violet
    "#34d399", // emerald
    "#fb7185", // rose
    "#f97316", // orange
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: String,
}

impl Series {
    /// Build a series, rejecting mismatched x/y lengths.
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>, color: impl Into<String>) -> ChartResult<Self> {
        let name = name.into();
        if x.len() != y.len() {
            return Err(ChartError::SeriesLengthMismatch { name, x_len: x.len(), y_len: y.len() });
        }
        Ok(Self { name, x, y, color: color.into() })
    }

    /// Build from `(x, y)` pairs; lengths match by construction.
    pub fn from_pairs(name: impl Into<String>, data: &[(f64, f64)], color: impl Into<String>) -> Self {
        let (x, y) = data.iter().copied().unzip();
        Self { name: name.into(), x, y, color: color.into() }
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Finite `(x, y)` samples with their original index, in input order.
    /// With `positive_y` set, samples with `y <= 0` are dropped as well.
    pub fn finite_points(&self, positive_y: bool) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .enumerate()
            .filter(move |&(_, (x, y))| x.is_finite() && y.is_finite() && (!positive_y || *y > 0.0))
            .map(|(i, (&x, &y))| (i, x, y))
    }

    /// True when the finite x values never decrease.
    pub fn is_sorted_by_x(&self) -> bool {
        let mut prev = f64::NEG_INFINITY;
        for (_, x, _) in self.finite_points(false) {
            if x < prev { return false; }
            prev = x;
        }
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// Legend entries for a series set, in series order.
pub fn legend(series: &[Series]) -> Vec<LegendEntry> {
    series.iter().map(|s| LegendEntry { name: s.name.clone(), color: s.color.clone() }).collect()
}
