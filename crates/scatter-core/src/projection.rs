// File: crates/scatter-core/src/projection.rs
// Summary: Per-draw pixel cache: every plottable sample projected to screen space once.

use crate::scale::Scales;
use crate::series::Series;

/// One sample with its data and pixel coordinates. `i` is the index in the
/// source series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
    pub px: f32,
    pub py: f32,
    pub i: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PixelSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<PixelPoint>,
}

/// Project every finite sample (positive y only on a log scale). One entry
/// per input series, even when it ends up empty.
pub fn build_pixel_cache(series: &[Series], scales: &Scales) -> Vec<PixelSeries> {
    let y_log = scales.y_log();
    series
        .iter()
        .map(|s| PixelSeries {
            name: s.name.clone(),
            color: s.color.clone(),
            points: s
                .finite_points(y_log)
                .map(|(i, x, y)| PixelPoint { x, y, px: scales.x_to_px(x), py: scales.y_to_px(y), i })
                .collect(),
        })
        .collect()
}
