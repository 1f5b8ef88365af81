// File: crates/scatter-core/src/render.rs
// Summary: Full repaint of one frame (grid, axes, labels, titles, markers, hover overlay) and the tooltip overlay.

use skia_safe as skia;

use crate::format::fmt;
use crate::hover::{HoverState, Tooltip};
use crate::projection::PixelSeries;
use crate::scale::Scales;
use crate::text::{Align, Baseline, TextShaper};
use crate::theme::{parse_color, Theme};
use crate::types::{Insets, TICK_COUNT};

const FONT_SIZE: f32 = 12.0;
const TOOLTIP_PAD: f32 = 10.0;
const TOOLTIP_LINE_H: f32 = 18.0;
const SWATCH: f32 = 10.0;
const SWATCH_GAP: f32 = 8.0;

/// Inputs of one repaint. Nothing here outlives the draw call.
pub struct Frame<'a> {
    pub scales: &'a Scales,
    pub pixels: &'a [PixelSeries],
    pub hover: Option<&'a HoverState>,
    pub theme: &'a Theme,
    pub point_radius: f32,
    pub highlight_radius: f32,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub draw_labels: bool,
}

/// Repaint everything. Deterministic for identical inputs.
pub fn paint(canvas: &skia::Canvas, shaper: &TextShaper, frame: &Frame) {
    let sc = frame.scales;
    canvas.clear(frame.theme.background);

    let x_ticks = sc.x_axis().ticks(TICK_COUNT);
    let y_ticks = sc.y_axis().ticks(TICK_COUNT);

    draw_grid(canvas, sc, &x_ticks, &y_ticks, frame.theme.border);
    draw_axes(canvas, sc, frame.theme.accent);
    if frame.draw_labels {
        draw_tick_labels(canvas, shaper, sc, &x_ticks, &y_ticks, frame.theme.muted);
        draw_titles(canvas, shaper, sc, frame.x_label, frame.y_label, frame.theme.muted);
    }

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    for s in frame.pixels {
        fill.set_color(series_color(&s.color, frame.theme));
        for p in &s.points {
            canvas.draw_circle((p.px, p.py), frame.point_radius, &fill);
        }
    }

    if let Some(hover) = frame.hover {
        draw_hover(canvas, sc, hover, frame.highlight_radius, frame.theme);
    }
}

/// Series colors that fail to parse fall back to the muted text color.
pub fn series_color(color: &str, theme: &Theme) -> skia::Color {
    parse_color(color).unwrap_or(theme.muted)
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, sc: &Scales, x_ticks: &[f64], y_ticks: &[f64], color: skia::Color) {
    let Insets { left: l, right: r, top: t, bottom: b } = sc.padding;
    let mut path = skia::Path::new();
    // verticals
    for &xv in x_ticks {
        let x = sc.x_to_px(xv);
        path.move_to((x, t));
        path.line_to((x, sc.height - b));
    }
    // horizontals
    for &yv in y_ticks {
        let y = sc.y_to_px(yv);
        path.move_to((l, y));
        path.line_to((sc.width - r, y));
    }
    canvas.draw_path(&path, &stroke(color, 1.0));
}

fn draw_axes(canvas: &skia::Canvas, sc: &Scales, color: skia::Color) {
    let plot = sc.plot_rect();
    let mut path = skia::Path::new();
    path.move_to((plot.left, plot.top));
    path.line_to((plot.left, plot.bottom));
    path.line_to((plot.right, plot.bottom));
    canvas.draw_path(&path, &stroke(color, 1.0));
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    sc: &Scales,
    x_ticks: &[f64],
    y_ticks: &[f64],
    color: skia::Color,
) {
    let plot = sc.plot_rect();
    for &xv in x_ticks {
        let pos = (sc.x_to_px(xv), plot.bottom + 6.0);
        shaper.draw(canvas, &fmt(xv), pos, FONT_SIZE, color, Align::Center, Baseline::Top, true);
    }
    for &yv in y_ticks {
        let pos = (plot.left - 8.0, sc.y_to_px(yv));
        shaper.draw(canvas, &fmt(yv), pos, FONT_SIZE, color, Align::Right, Baseline::Middle, true);
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    sc: &Scales,
    x_label: &str,
    y_label: &str,
    color: skia::Color,
) {
    if !y_label.is_empty() {
        canvas.save();
        canvas.translate((14.0, sc.height / 2.0));
        canvas.rotate(-90.0, None);
        shaper.draw(canvas, y_label, (0.0, 0.0), FONT_SIZE, color, Align::Left, Baseline::Top, false);
        canvas.restore();
    }
    if !x_label.is_empty() {
        let plot = sc.plot_rect();
        let pos = ((plot.left + plot.right) / 2.0, sc.height - 18.0);
        shaper.draw(canvas, x_label, pos, FONT_SIZE, color, Align::Center, Baseline::Top, false);
    }
}

fn draw_hover(canvas: &skia::Canvas, sc: &Scales, hover: &HoverState, radius: f32, theme: &Theme) {
    let plot = sc.plot_rect();
    let mut guide = stroke(theme.accent, 1.0);
    guide.set_path_effect(skia::PathEffect::dash(&[4.0, 4.0], 0.0));
    canvas.draw_line((hover.px, plot.top), (hover.px, plot.bottom), &guide);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    for it in &hover.items {
        fill.set_color(series_color(&it.color, theme));
        canvas.draw_circle((it.px, it.py), radius, &fill);
    }
}

/// Tooltip box size for its current text.
pub fn measure_tooltip(shaper: &TextShaper, tooltip: &Tooltip) -> (f32, f32) {
    let header_w = shaper.measure(&tooltip.header, FONT_SIZE, false).0;
    let rows_w = tooltip
        .rows
        .iter()
        .map(|r| SWATCH + SWATCH_GAP + shaper.measure(&format!("{}: {}", r.name, r.value), FONT_SIZE, false).0)
        .fold(0.0f32, f32::max);
    let lines = 1 + tooltip.rows.len();
    (header_w.max(rows_w) + TOOLTIP_PAD * 2.0, lines as f32 * TOOLTIP_LINE_H + TOOLTIP_PAD * 2.0)
}

/// Draw a visible tooltip at its placed position. Hidden tooltips draw nothing.
pub fn paint_tooltip(canvas: &skia::Canvas, shaper: &TextShaper, tooltip: &Tooltip, theme: &Theme) {
    if !tooltip.visible {
        return;
    }
    let rect = skia::Rect::from_xywh(tooltip.left, tooltip.top, tooltip.width, tooltip.height);
    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.tooltip_background);
    canvas.draw_round_rect(rect, 8.0, 8.0, &bg);
    canvas.draw_round_rect(rect, 8.0, 8.0, &stroke(theme.border, 1.0));

    let x0 = tooltip.left + TOOLTIP_PAD;
    let mut y = tooltip.top + TOOLTIP_PAD;
    shaper.draw(canvas, &tooltip.header, (x0, y), FONT_SIZE, theme.tooltip_text, Align::Left, Baseline::Top, false);

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    for row in &tooltip.rows {
        y += TOOLTIP_LINE_H;
        swatch.set_color(series_color(&row.color, theme));
        canvas.draw_circle((x0 + SWATCH * 0.5, y + TOOLTIP_LINE_H * 0.4), SWATCH * 0.5, &swatch);
        let text = format!("{}: {}", row.name, row.value);
        let pos = (x0 + SWATCH + SWATCH_GAP, y);
        shaper.draw(canvas, &text, pos, FONT_SIZE, theme.tooltip_text, Align::Left, Baseline::Top, false);
    }
}
