// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, logical vs physical surface size).

use serde::{Deserialize, Serialize};

/// Chart height used when the container carries no usable size hint.
pub const DEFAULT_HEIGHT: f32 = 300.0;
/// Height cap applied on narrow viewports.
pub const NARROW_MAX_HEIGHT: f32 = 260.0;
/// Viewports at or below this width count as narrow.
pub const NARROW_VIEWPORT_WIDTH: f32 = 520.0;
/// Smallest logical surface side, in pixels.
pub const MIN_SURFACE_SIDE: u32 = 10;
/// Target tick count per axis.
pub const TICK_COUNT: usize = 6;

/// Plot padding around the data area, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    #[serde(rename = "l")]
    pub left: f32,
    #[serde(rename = "r")]
    pub right: f32,
    #[serde(rename = "t")]
    pub top: f32,
    #[serde(rename = "b")]
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(44.0, 14.0, 16.0, 34.0)
    }
}

/// Logical surface size plus the device pixel ratio of the backing store.
///
/// The logical size is what every scale works in; `physical()` is what the
/// raster buffer is allocated with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f32,
}

impl SurfaceSize {
    /// Floor the measured client size, clamp each side to `MIN_SURFACE_SIDE`
    /// and sanitize the pixel ratio.
    pub fn from_client(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let side = |v: f32| -> u32 {
            if v.is_finite() && v > 0.0 { (v.floor() as u32).max(MIN_SURFACE_SIDE) } else { MIN_SURFACE_SIDE }
        };
        Self { width: side(width), height: side(height), device_pixel_ratio: sanitize_dpr(device_pixel_ratio) }
    }

    /// Backing buffer dimensions in device pixels.
    pub fn physical(&self) -> (i32, i32) {
        let w = (self.width as f32 * self.device_pixel_ratio).round().max(1.0);
        let h = (self.height as f32 * self.device_pixel_ratio).round().max(1.0);
        (w as i32, h as i32)
    }

    pub fn logical_width(&self) -> f32 { self.width as f32 }
    pub fn logical_height(&self) -> f32 { self.height as f32 }
}

/// Non-finite or non-positive ratios collapse to 1.
pub fn sanitize_dpr(dpr: f32) -> f32 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}
