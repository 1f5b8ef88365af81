// File: crates/window-demo/src/main.rs
// Summary: Windowed viewer for dashboard panels: hover tooltips, resize, theme toggle and PNG export, blitted with softbuffer.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use scatter_core::theme::find as find_theme;
use scatter_core::{telemetry, Dataset, Host, RasterFrame, ScatterChart, Viewport};
use scatter_dashboard::{mount_panels, DashboardConfig, MountedPanel};
use tracing::{error, info};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

/// Browse scatter dashboard panels in a window
#[derive(Parser, Debug)]
#[command(name = "scatter-window")]
struct Args {
    /// Dataset: a JSON file or a directory of CSV files
    #[arg(long, default_value = "crates/dashboard/data/sample.json")]
    data: PathBuf,

    /// Layout config (TOML); the built-in layout when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where `E` writes the current panel
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Starting theme (dark, light)
    #[arg(long)]
    theme: Option<String>,
}

struct Viewer {
    panels: Vec<MountedPanel>,
    active: usize,
    out: PathBuf,
    size: PhysicalSize<u32>,
    scale_factor: f64,
    /// Last cursor position in physical pixels, while inside the window.
    cursor: Option<(f64, f64)>,
}

impl Viewer {
    fn chart(&mut self) -> &mut ScatterChart {
        &mut self.panels[self.active].chart
    }

    fn title(&self) -> String {
        let p = &self.panels[self.active].config;
        format!("{} ({}/{})  [Tab] next  [T] theme  [E] export  [Esc] quit", p.id, self.active + 1, self.panels.len())
    }

    /// Push the window's logical size into the active chart; no-op when unchanged.
    fn sync_size(&mut self) -> Result<bool> {
        let logical: LogicalSize<f64> = self.size.to_logical(self.scale_factor);
        let dpr = self.scale_factor as f32;
        let (w, h) = (logical.width as f32, logical.height as f32);
        Ok(self.chart().resize(w, h, dpr)?)
    }

    fn pointer(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
        let s = self.scale_factor;
        self.chart().on_pointer_move((x / s) as f32, (y / s) as f32);
    }

    fn next_panel(&mut self) -> Result<()> {
        self.chart().on_pointer_leave();
        self.active = (self.active + 1) % self.panels.len();
        self.sync_size()?;
        Ok(())
    }

    fn toggle_theme(&mut self) {
        let next = self.chart().theme().toggled();
        for p in &mut self.panels {
            p.chart.set_theme(next);
        }
        info!(theme = next.name, "theme switched");
    }

    fn export(&mut self) -> Result<PathBuf> {
        let name = format!("{}.png", self.panels[self.active].config.id);
        let out = self.out.clone();
        Ok(self.chart().export_image(out, Some(name.as_str()))?)
    }
}

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(t) = &args.theme {
        cfg.theme = t.clone();
    }
    let ds = Dataset::load(&args.data).with_context(|| format!("failed to load dataset '{}'", args.data.display()))?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("scatter-window")
        .with_inner_size(LogicalSize::new(960.0, 420.0))
        .build(&event_loop)
        .context("failed to build window")?;
    let scale_factor = window.scale_factor();
    let size = window.inner_size();
    let logical: LogicalSize<f32> = size.to_logical(scale_factor);

    let host = Host::new(Viewport::new(logical.width, scale_factor as f32), find_theme(&cfg.theme));
    cfg.panel_width = logical.width;
    let panels = mount_panels(&host, &ds, &cfg, None);
    if panels.is_empty() {
        anyhow::bail!("no panel could be mounted from '{}'", args.data.display());
    }

    let mut viewer = Viewer { panels, active: 0, out: args.out, size, scale_factor, cursor: None };
    viewer.sync_size()?;
    window.set_title(&viewer.title());

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                if let Err(err) = handle_window_event(&mut viewer, &window, event, control_flow) {
                    error!(error = %err, "event handling failed");
                }
            }
            Event::RedrawRequested(_) => {
                let _ = &context;
                let drawn = viewer.chart().rgba8(true).map_err(anyhow::Error::from);
                if let Err(err) = drawn.and_then(|f| blit(&mut surface, &f, viewer.size)) {
                    error!(error = %err, "redraw failed");
                }
            }
            _ => {}
        }
    });
}

fn handle_window_event(
    viewer: &mut Viewer,
    window: &Window,
    event: WindowEvent<'_>,
    control_flow: &mut ControlFlow,
) -> Result<()> {
    match event {
        WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
        WindowEvent::Resized(size) => {
            viewer.size = size;
            if viewer.sync_size()? {
                window.request_redraw();
            }
        }
        WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
            viewer.scale_factor = scale_factor;
            viewer.size = *new_inner_size;
            if viewer.sync_size()? {
                window.request_redraw();
            }
        }
        WindowEvent::CursorMoved { position, .. } => {
            viewer.pointer(position.x, position.y);
            window.request_redraw();
        }
        WindowEvent::MouseInput { state: ElementState::Pressed, .. } => {
            if let Some((x, y)) = viewer.cursor {
                viewer.pointer(x, y);
                window.request_redraw();
            }
        }
        WindowEvent::CursorLeft { .. } => {
            viewer.cursor = None;
            viewer.chart().on_pointer_leave();
            window.request_redraw();
        }
        WindowEvent::KeyboardInput {
            input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
            ..
        } => match key {
            VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
            VirtualKeyCode::Tab => {
                viewer.next_panel()?;
                window.set_title(&viewer.title());
                window.request_redraw();
            }
            VirtualKeyCode::T => {
                viewer.toggle_theme();
                window.request_redraw();
            }
            VirtualKeyCode::E => {
                let path = viewer.export()?;
                println!("Wrote {}", path.display());
            }
            _ => {}
        },
        _ => {}
    }
    Ok(())
}

/// Copy an RGBA8 frame into the window buffer as `0x00RRGGBB`. Areas the
/// frame does not cover stay black.
fn blit(surface: &mut softbuffer::Surface, frame: &RasterFrame, size: PhysicalSize<u32>) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("surface resize: {e}"))?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    buffer.fill(0);

    let row_w = size.width as usize;
    let cols = row_w.min(frame.width as usize);
    let rows = (size.height as usize).min(frame.height as usize);
    for y in 0..rows {
        let src = &frame.pixels[y * frame.stride..y * frame.stride + cols * 4];
        let dst = &mut buffer[y * row_w..y * row_w + cols];
        for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            *d = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
