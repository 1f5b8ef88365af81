// File: crates/dashboard/src/main.rs
// Summary: Loads a dataset, mounts every configured panel, exports one PNG per panel and prints legends and tables.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scatter_core::theme::find as find_theme;
use scatter_core::{legend, telemetry, Dataset, Host, Viewport};
use scatter_dashboard::{mount_panels, DashboardConfig};
use tracing::{info, warn};

/// Groups printed as text tables after the charts.
const TABLE_GROUPS: [&str; 2] = ["culture", "sensitivity"];

/// Render a scatter dashboard to PNG files
#[derive(Parser, Debug)]
#[command(name = "scatter-dashboard")]
#[command(version)]
struct Args {
    /// Dataset: a JSON file or a directory of CSV files (one per group)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Layout config (TOML); the built-in layout when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for exported PNGs
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Theme preset name (dark, light)
    #[arg(long)]
    theme: Option<String>,

    /// Panel width in logical pixels
    #[arg(long)]
    width: Option<f32>,

    /// Device pixel ratio of the exported images
    #[arg(long)]
    dpr: Option<f32>,

    /// Render only the panel with this id
    #[arg(long)]
    only: Option<String>,

    /// Print the effective layout as TOML and exit
    #[arg(long)]
    print_config: bool,
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
    if let Some(w) = args.width {
        cfg.panel_width = w;
    }
    if let Some(d) = args.dpr {
        cfg.device_pixel_ratio = d;
    }

    if args.print_config {
        print!("{}", cfg.to_toml()?);
        return Ok(());
    }

    let data = args.data.as_ref().context("--data is required unless --print-config is given")?;
    let ds = Dataset::load(data).with_context(|| format!("failed to load dataset '{}'", data.display()))?;
    info!(path = %data.display(), groups = ds.group_names().count(), "dataset loaded");

    println!("{}", ds.meta_summary());

    let host = Host::new(Viewport::new(cfg.viewport_width, cfg.device_pixel_ratio), find_theme(&cfg.theme));
    let mut panels = mount_panels(&host, &ds, &cfg, args.only.as_deref());
    if panels.is_empty() {
        anyhow::bail!("no panel could be mounted; check group and column names");
    }

    for p in &mut panels {
        let name = format!("{}.png", p.config.id);
        let path = p
            .chart
            .export_image(&args.out, Some(name.as_str()))
            .with_context(|| format!("failed to export panel '{}'", p.config.id))?;
        println!("Wrote {}", path.display());
        let entries: Vec<String> = legend(p.chart.series()).into_iter().map(|e| format!("{} {}", e.color, e.name)).collect();
        println!("  legend: {}", entries.join(" | "));
    }

    for group in TABLE_GROUPS {
        match ds.table(group) {
            Ok(table) => println!("\n[{group}]\n{}", table.to_text()),
            Err(err) => warn!(group, error = %err, "table skipped"),
        }
    }

    for p in panels {
        p.chart.destroy();
    }
    Ok(())
}
