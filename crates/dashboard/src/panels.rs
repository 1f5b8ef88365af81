// File: crates/dashboard/src/panels.rs
// Summary: Turns panel configs into series and mounted charts; panels with missing data are skipped.

use scatter_core::{palette_color, ChartOptions, ChartResult, Container, Dataset, Host, Page, ScatterChart, Series};
use tracing::{debug, warn};

use crate::config::{DashboardConfig, PanelConfig};

pub struct MountedPanel {
    pub config: PanelConfig,
    pub chart: ScatterChart,
}

/// Series for one panel, colored from the config or the palette.
pub fn build_series(ds: &Dataset, panel: &PanelConfig) -> ChartResult<Vec<Series>> {
    let x = ds.column(&panel.group, &panel.x)?;
    panel
        .series
        .iter()
        .enumerate()
        .map(|(i, sc)| {
            let y = ds.column(&panel.group, &sc.column)?;
            let color = sc.color.clone().unwrap_or_else(|| palette_color(i).to_string());
            Series::new(sc.display_name(), x.to_vec(), y.to_vec(), color)
        })
        .collect()
}

fn options(panel: &PanelConfig) -> ChartOptions {
    let mut opts = ChartOptions::labeled(panel.x_label.clone(), panel.y_label.clone()).with_y_log(panel.y_log);
    if let Some(padding) = panel.padding {
        opts.padding = padding;
    }
    opts
}

/// Lay out one container per panel and mount a chart in each. `only`
/// restricts to a single panel id.
pub fn mount_panels(host: &Host, ds: &Dataset, cfg: &DashboardConfig, only: Option<&str>) -> Vec<MountedPanel> {
    let mut page = Page::new();
    for p in &cfg.panels {
        let mut c = Container::new(p.id.clone(), cfg.panel_width);
        if let Some(h) = p.height {
            c = c.with_height_hint(h.to_string());
        }
        page.insert(c);
    }

    let mut mounted = Vec::new();
    for p in cfg.panels.iter().filter(|p| only.map_or(true, |id| p.id == id)) {
        match mount_one(host, &mut page, ds, p) {
            Ok(chart) => {
                debug!(panel = %p.id, series = chart.series().len(), "panel mounted");
                mounted.push(MountedPanel { config: p.clone(), chart });
            }
            Err(err) => warn!(panel = %p.id, error = %err, "panel skipped"),
        }
    }
    mounted
}

fn mount_one(host: &Host, page: &mut Page, ds: &Dataset, p: &PanelConfig) -> ChartResult<ScatterChart> {
    let series = build_series(ds, p)?;
    let container = page.container_mut(&p.id)?;
    ScatterChart::mount(host, container, series, options(p))
}
