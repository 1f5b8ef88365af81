// File: crates/scatter-core/src/axis.rs
// Summary: Axis model (scale kind + extent) and tick generation per kind.

use crate::grid::nice_ticks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// One axis extent as resolved for a draw cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn linear(min: f64, max: f64) -> Self {
        Self { min, max, kind: ScaleKind::Linear }
    }

    pub fn log10(min: f64, max: f64) -> Self {
        Self { min, max, kind: ScaleKind::Log10 }
    }

    /// Tick values in data space.
    ///
    /// Log axes pick nice ticks on the exponents and map them back, so a
    /// range of 1..1000 yields powers of ten at half-decade steps.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self.kind {
            ScaleKind::Linear => nice_ticks(self.min, self.max, count),
            ScaleKind::Log10 => nice_ticks(self.min.log10(), self.max.log10(), count)
                .into_iter()
                .map(|e| 10f64.powf(e))
                .collect(),
        }
    }
}
