// File: crates/scatter-core/src/chart.rs
// Summary: ScatterChart component: mount, resize-guarded redraw, hover/tooltip and PNG export on a Skia CPU raster surface.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use skia_safe as skia;
use tracing::{debug, info, warn};

use crate::error::{ChartError, ChartResult};
use crate::host::{initial_height, Container, ContainerContent, Host, ResizeSubscription, Viewport};
use crate::hover::{place_tooltip, resolve_hover, HoverState, Tooltip, TOOLTIP_FALLBACK_SIZE};
use crate::projection::{build_pixel_cache, PixelSeries};
use crate::range::Range;
use crate::render::{self, measure_tooltip, paint_tooltip, Frame};
use crate::scale::Scales;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, SurfaceSize};

/// Default file name for [`ScatterChart::export_image`].
pub const DEFAULT_EXPORT_NAME: &str = "chart.png";

/// Construction-time options. Fixed for the chart's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub x_label: String,
    pub y_label: String,
    pub y_log: bool,
    pub point_radius: f32,
    pub highlight_radius: f32,
    pub padding: Insets,
    /// Skip all text; keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_label: String::new(),
            y_label: String::new(),
            y_log: false,
            point_radius: 2.2,
            highlight_radius: 4.4,
            padding: Insets::default(),
            draw_labels: true,
        }
    }
}

impl ChartOptions {
    pub fn labeled(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self { x_label: x_label.into(), y_label: y_label.into(), ..Self::default() }
    }

    pub fn with_y_log(mut self, y_log: bool) -> Self {
        self.y_log = y_log;
        self
    }
}

/// Tightly packed RGBA8 copy of the raster.
#[derive(Clone, Debug)]
pub struct RasterFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

pub struct ScatterChart {
    id: String,
    series: Vec<Series>,
    options: ChartOptions,
    theme: Theme,
    viewport: Viewport,
    height: f32,
    size: Option<SurfaceSize>,
    surface: skia::Surface,
    shaper: TextShaper,
    scales: Option<Scales>,
    pixels: Vec<PixelSeries>,
    hover: Option<HoverState>,
    tooltip: Tooltip,
    frames: u64,
    subscription: Option<ResizeSubscription>,
}

impl ScatterChart {
    /// Mount into `container`, replacing its content, subscribe to its size
    /// changes and draw the first frame.
    pub fn mount(host: &Host, container: &mut Container, series: Vec<Series>, options: ChartOptions) -> ChartResult<Self> {
        let height = initial_height(container.height_hint.as_deref(), &host.viewport);
        let size = SurfaceSize::from_client(container.client_width, height, host.viewport.device_pixel_ratio);
        let surface = new_surface(size)?;

        if cfg!(debug_assertions) {
            for s in series.iter().filter(|s| !s.is_sorted_by_x()) {
                warn!(chart = %container.id, series = %s.name, "x values are not ascending; hover lookup will be unreliable");
            }
        }

        container.content = ContainerContent::Chart;
        let subscription = host.resize.observe(&container.id);

        let mut chart = Self {
            id: container.id.clone(),
            series,
            options,
            theme: host.theme,
            viewport: host.viewport,
            height,
            size: None,
            surface,
            shaper: TextShaper::new(),
            scales: None,
            pixels: Vec::new(),
            hover: None,
            tooltip: Tooltip::hidden(),
            frames: 0,
            subscription: Some(subscription),
        };
        chart.resize(container.client_width, height, host.viewport.device_pixel_ratio)?;
        debug!(chart = %chart.id, width = container.client_width, height, "mounted");
        Ok(chart)
    }

    /// Size-change handler. Returns `false` without touching anything when
    /// the floored size and pixel ratio equal the last applied ones.
    pub fn resize(&mut self, client_width: f32, client_height: f32, device_pixel_ratio: f32) -> ChartResult<bool> {
        let next = SurfaceSize::from_client(client_width, client_height, device_pixel_ratio);
        if self.size == Some(next) {
            debug!(chart = %self.id, "resize skipped: size unchanged");
            return Ok(false);
        }
        let (pw, ph) = next.physical();
        if (self.surface.width(), self.surface.height()) != (pw, ph) {
            self.surface = new_surface(next)?;
        }
        self.size = Some(next);
        self.viewport.device_pixel_ratio = next.device_pixel_ratio;
        if self.tooltip.visible {
            self.tooltip.left = self.tooltip.left.min(next.logical_width() - self.tooltip.width).max(0.0);
        }

        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.scale((next.device_pixel_ratio, next.device_pixel_ratio));
        debug!(chart = %self.id, width = next.width, height = next.height, dpr = next.device_pixel_ratio, "resized");
        self.draw();
        Ok(true)
    }

    /// Container width changed; height stays what mount decided.
    pub fn resize_width(&mut self, client_width: f32) -> ChartResult<bool> {
        self.resize(client_width, self.height, self.viewport.device_pixel_ratio)
    }

    /// Recompute ranges, scales and the pixel cache, then repaint.
    pub fn draw(&mut self) {
        let Some(size) = self.size else { return };
        let range = Range::compute(&self.series, self.options.y_log);
        let scales = Scales::new(size.logical_width(), size.logical_height(), self.options.padding, range, self.options.y_log);
        self.pixels = build_pixel_cache(&self.series, &scales);
        self.scales = Some(scales);
        if let Some(hover) = self.hover.as_mut() {
            hover.reproject(&scales);
        }

        let frame = Frame {
            scales: &scales,
            pixels: &self.pixels,
            hover: self.hover.as_ref(),
            theme: &self.theme,
            point_radius: self.options.point_radius,
            highlight_radius: self.options.highlight_radius,
            x_label: &self.options.x_label,
            y_label: &self.options.y_label,
            draw_labels: self.options.draw_labels,
        };
        render::paint(self.surface.canvas(), &self.shaper, &frame);
        self.frames += 1;
        debug!(chart = %self.id, frame = self.frames, hover = self.hover.is_some(), "drawn");
    }

    /// Pointer moved to logical `(mx, my)` relative to the chart surface.
    pub fn on_pointer_move(&mut self, mx: f32, my: f32) {
        let Some(scales) = self.scales else { return };
        let Some(hover) = resolve_hover(mx, my, &scales, &self.pixels) else {
            self.on_pointer_leave();
            return;
        };

        let mut tooltip = Tooltip::content(&hover);
        let size = if self.options.draw_labels {
            measure_tooltip(&self.shaper, &tooltip)
        } else {
            TOOLTIP_FALLBACK_SIZE
        };
        (tooltip.width, tooltip.height) = size;
        (tooltip.left, tooltip.top) = place_tooltip(mx, my, size, scales.width);
        self.tooltip = tooltip;
        self.hover = Some(hover);
        self.draw();
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = None;
        self.tooltip = Tooltip::hidden();
        self.draw();
    }

    /// Swap color tokens and repaint.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.draw();
    }

    /// Current raster as RGBA8. With `with_tooltip`, a visible tooltip is
    /// composited on a copy; the chart surface itself is left untouched.
    pub fn rgba8(&mut self, with_tooltip: bool) -> ChartResult<RasterFrame> {
        if with_tooltip && self.tooltip.visible {
            let size = self.size.unwrap_or_else(|| SurfaceSize::from_client(0.0, 0.0, 1.0));
            let mut overlay = new_surface(size)?;
            let image = self.surface.image_snapshot();
            let canvas = overlay.canvas();
            canvas.draw_image(&image, (0.0, 0.0), None);
            canvas.scale((size.device_pixel_ratio, size.device_pixel_ratio));
            paint_tooltip(canvas, &self.shaper, &self.tooltip, &self.theme);
            return read_rgba8(&mut overlay);
        }
        read_rgba8(&mut self.surface)
    }

    /// Current raster encoded as PNG.
    pub fn png_bytes(&mut self) -> ChartResult<Vec<u8>> {
        let frame = self.rgba8(false)?;
        let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.pixels)
            .ok_or_else(|| ChartError::Encode("pixel buffer does not match surface size".into()))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).map_err(|e| ChartError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }

    /// Write the current raster as a PNG into `dir` (default name `chart.png`).
    pub fn export_image(&mut self, dir: impl AsRef<Path>, filename: Option<&str>) -> ChartResult<PathBuf> {
        let path = dir.as_ref().join(filename.unwrap_or(DEFAULT_EXPORT_NAME));
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &bytes)?;
        info!(chart = %self.id, path = %path.display(), bytes = bytes.len(), "exported");
        Ok(path)
    }

    /// Release the resize subscription. Nothing else is owned outside the chart.
    pub fn destroy(mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.disconnect();
        }
        debug!(chart = %self.id, "destroyed");
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn series(&self) -> &[Series] { &self.series }
    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn surface_size(&self) -> Option<SurfaceSize> { self.size }
    pub fn scales(&self) -> Option<&Scales> { self.scales.as_ref() }
    pub fn pixel_cache(&self) -> &[PixelSeries] { &self.pixels }
    pub fn hover(&self) -> Option<&HoverState> { self.hover.as_ref() }
    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }
    /// Number of full repaints so far.
    pub fn frames_drawn(&self) -> u64 { self.frames }
}

fn new_surface(size: SurfaceSize) -> ChartResult<skia::Surface> {
    let (width, height) = size.physical();
    skia::surfaces::raster_n32_premul((width, height)).ok_or(ChartError::SurfaceCreation { width, height })
}

fn read_rgba8(surface: &mut skia::Surface) -> ChartResult<RasterFrame> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(ChartError::Encode("reading surface pixels failed".into()));
    }
    Ok(RasterFrame { pixels, width: w as u32, height: h as u32, stride })
}
