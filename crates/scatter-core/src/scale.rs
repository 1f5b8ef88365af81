// File: crates/scatter-core/src/scale.rs
// Summary: Bidirectional data <-> pixel transforms for the X and Y axes (linear and log10).

use crate::axis::Axis;
use crate::geometry::Rect;
use crate::range::Range;
use crate::types::Insets;

/// Data value on either axis.
pub type Value = f64;

/// General scale transform operations for one axis.
pub trait ScaleTransform {
    fn to_px(&self, v: Value) -> f32;
    fn from_px(&self, px: f32) -> Value;
}

/// Horizontal linear scale mapping `[min, max]` onto `[left, left + width]`.
#[derive(Clone, Copy, Debug)]
pub struct XScale {
    pub left_px: f32,
    pub width_px: f32,
    pub min: Value,
    pub max: Value,
}

impl ScaleTransform for XScale {
    #[inline]
    fn to_px(&self, x: Value) -> f32 {
        self.left_px + ((x - self.min) / (self.max - self.min) * self.width_px as f64) as f32
    }
    #[inline]
    fn from_px(&self, px: f32) -> Value {
        self.min + ((px - self.left_px) / self.width_px) as f64 * (self.max - self.min)
    }
}

/// Vertical scale mapping data range to `[top, top + height]`, inverted so
/// larger values sit higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct YScale {
    pub top_px: f32,
    pub height_px: f32,
    pub min: Value,
    pub max: Value,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl YScale {
    pub fn new_linear(top_px: f32, height_px: f32, min: Value, max: Value) -> Self {
        Self { top_px, height_px, min, max, log: false, log_min: 0.0, log_max: 0.0 }
    }

    /// `min` must be positive; the range engine floors it before we get here.
    pub fn new_log10(top_px: f32, height_px: f32, min: Value, max: Value) -> Self {
        Self { top_px, height_px, min, max, log: true, log_min: min.log10(), log_max: max.log10() }
    }
}

impl ScaleTransform for YScale {
    #[inline]
    fn to_px(&self, y: Value) -> f32 {
        let frac = if self.log {
            // Clamp to the floor so values at or below it never produce -inf/NaN.
            let v = y.max(self.min).log10();
            (self.log_max - v) / (self.log_max - self.log_min)
        } else {
            (self.max - y) / (self.max - self.min)
        };
        self.top_px + (frac * self.height_px as f64) as f32
    }
    #[inline]
    fn from_px(&self, py: f32) -> Value {
        let frac = ((py - self.top_px) / self.height_px) as f64;
        if self.log {
            10f64.powf(self.log_max - frac * (self.log_max - self.log_min))
        } else {
            self.max - frac * (self.max - self.min)
        }
    }
}

/// Everything one draw cycle needs to place data on the surface.
/// Only valid for the logical size it was built with.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    pub width: f32,
    pub height: f32,
    pub plot_w: f32,
    pub plot_h: f32,
    pub padding: Insets,
    pub range: Range,
    pub x: XScale,
    pub y: YScale,
}

impl Scales {
    pub fn new(width: f32, height: f32, padding: Insets, range: Range, y_log: bool) -> Self {
        let plot_w = (width - padding.hsum()).max(1.0);
        let plot_h = (height - padding.vsum()).max(1.0);
        let x = XScale { left_px: padding.left, width_px: plot_w, min: range.xmin, max: range.xmax };
        let y = if y_log {
            YScale::new_log10(padding.top, plot_h, range.ymin, range.ymax)
        } else {
            YScale::new_linear(padding.top, plot_h, range.ymin, range.ymax)
        };
        Self { width, height, plot_w, plot_h, padding, range, x, y }
    }

    #[inline]
    pub fn x_to_px(&self, x: Value) -> f32 { self.x.to_px(x) }
    #[inline]
    pub fn px_to_x(&self, px: f32) -> Value { self.x.from_px(px) }
    #[inline]
    pub fn y_to_px(&self, y: Value) -> f32 { self.y.to_px(y) }
    #[inline]
    pub fn px_to_y(&self, py: f32) -> Value { self.y.from_px(py) }

    pub fn y_log(&self) -> bool { self.y.log }

    pub fn x_axis(&self) -> Axis { self.range.x_axis() }

    pub fn y_axis(&self) -> Axis { self.range.y_axis(self.y.log) }

    /// Whole logical surface.
    pub fn canvas_rect(&self) -> Rect { Rect::from_wh(self.width, self.height) }

    /// Data area: surface minus padding. Right and bottom edges follow the
    /// surface size, not `left + plot_w`, matching where the axes are drawn.
    pub fn plot_rect(&self) -> Rect { self.canvas_rect().inset(&self.padding) }
}
