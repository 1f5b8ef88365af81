// File: crates/scatter-core/src/hover.rs
// Summary: Pointer hover resolution (nearest sample per series by x) and tooltip placement.

use crate::format::fmt;
use crate::geometry::clamp;
use crate::projection::{PixelPoint, PixelSeries};
use crate::scale::Scales;

/// Pointer-to-tooltip offset, in logical pixels.
pub const TOOLTIP_OFFSET: f32 = 12.0;
/// Tooltip size assumed when it cannot be measured.
pub const TOOLTIP_FALLBACK_SIZE: (f32, f32) = (160.0, 80.0);

#[derive(Clone, Debug, PartialEq)]
pub struct HoverItem {
    pub name: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub px: f32,
    pub py: f32,
}

/// Nearest sample of every series at the pointer's x. `px` is the guide
/// line position, taken from the first series' match.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverState {
    pub x: f64,
    pub px: f32,
    pub items: Vec<HoverItem>,
}

impl HoverState {
    /// Recompute pixel positions from the data values against new scales.
    pub fn reproject(&mut self, scales: &Scales) {
        for item in &mut self.items {
            item.px = scales.x_to_px(item.x);
            item.py = scales.y_to_px(item.y);
        }
        self.px = scales.x_to_px(self.x);
    }
}

/// Sample whose x is closest to `x_val`, by binary search.
///
/// `points` must be sorted ascending by x; unsorted input gives an
/// unspecified (but in-bounds) answer. Ties go to the lower index.
pub fn nearest_by_x(points: &[PixelPoint], x_val: f64) -> Option<&PixelPoint> {
    let n = points.len();
    match n {
        0 => return None,
        1 => return points.first(),
        _ => {}
    }
    let (mut lo, mut hi) = (0usize, n);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let x = points[mid].x;
        if x == x_val {
            return Some(&points[mid]);
        }
        if x < x_val { lo = mid + 1 } else { hi = mid }
    }
    // lo is the insertion point; compare its neighbours.
    let p0 = &points[lo.saturating_sub(1).min(n - 1)];
    let p1 = &points[lo.min(n - 1)];
    if (p0.x - x_val).abs() <= (p1.x - x_val).abs() { Some(p0) } else { Some(p1) }
}

/// Resolve hover for a pointer at logical `(mx, my)`.
///
/// Outside the surface, or with nothing to match in any series, the result
/// is `None`. Inside the surface the x position is clamped to the plot's
/// horizontal extent first.
pub fn resolve_hover(mx: f32, my: f32, scales: &Scales, cache: &[PixelSeries]) -> Option<HoverState> {
    if !scales.canvas_rect().contains(mx, my) {
        return None;
    }
    let plot = scales.plot_rect();
    let x_px = clamp(mx, plot.left, plot.right);
    let x_val = scales.px_to_x(x_px);

    let items: Vec<HoverItem> = cache
        .iter()
        .filter_map(|s| {
            nearest_by_x(&s.points, x_val).map(|p| HoverItem {
                name: s.name.clone(),
                color: s.color.clone(),
                x: p.x,
                y: p.y,
                px: p.px,
                py: p.py,
            })
        })
        .collect();

    let base_x = items.first()?.x;
    Some(HoverState { x: base_x, px: scales.x_to_px(base_x), items })
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub name: String,
    pub color: String,
    pub value: String,
}

/// Tooltip overlay model. Positions are logical pixels relative to the
/// chart surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub left: f32,
    pub top: f32,
    /// Box size the placement was computed for.
    pub width: f32,
    pub height: f32,
    pub header: String,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    pub fn hidden() -> Self { Self::default() }

    /// Text content for a hover state; placement is left at the origin.
    pub fn content(hover: &HoverState) -> Self {
        Self {
            visible: true,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            header: format!("x: {}", fmt(hover.x)),
            rows: hover
                .items
                .iter()
                .map(|it| TooltipRow { name: it.name.clone(), color: it.color.clone(), value: fmt(it.y) })
                .collect(),
        }
    }

    /// All text lines in display order.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().map(|r| format!("{}: {}", r.name, r.value)))
            .collect()
    }
}

/// Place a `size` tooltip next to the pointer, flipping left when it would
/// overflow `canvas_w` and below when it would overflow the top.
pub fn place_tooltip(mx: f32, my: f32, size: (f32, f32), canvas_w: f32) -> (f32, f32) {
    let (tw, th) = size;
    let mut tx = mx + TOOLTIP_OFFSET;
    let mut ty = my - TOOLTIP_OFFSET;
    if tx + tw + TOOLTIP_OFFSET > canvas_w {
        tx = mx - tw - 16.0;
    }
    if ty - th < 0.0 {
        ty = my + 16.0;
    }
    (tx, ty)
}
