// File: crates/dashboard/tests/panels.rs
// Purpose: Default layout, TOML config parsing and panel mounting against the bundled sample dataset.

use scatter_core::{Dataset, Host, Insets};
use scatter_dashboard::{build_series, mount_panels, DashboardConfig, PanelConfig};

fn sample() -> Dataset {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample.json");
    Dataset::load(path).expect("sample dataset")
}

#[test]
fn default_layout_has_every_panel() {
    let cfg = DashboardConfig::default();
    let ids: Vec<&str> = cfg.panels.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), 10);
    assert_eq!(ids[0], "routine-inputs-chart");
    assert!(ids.contains(&"sens-entropy-chart"));
    let drug = cfg.panel("transform-drug-chart").expect("drug panel");
    assert!(drug.y_log);
    assert_eq!(drug.series[0].display_name(), "D (Drug level)");
}

#[test]
fn toml_round_trip_keeps_layout() {
    let cfg = DashboardConfig::default();
    let text = cfg.to_toml().expect("serialize");
    assert_eq!(DashboardConfig::from_toml_str(&text).expect("parse"), cfg);
}

#[test]
fn partial_toml_fills_defaults() {
    let cfg = DashboardConfig::from_toml_str(
        r#"
        theme = "light"

        [[panels]]
        id = "only"
        group = "routine"
        x = "time_s"
        series = [{ column = "E" }, { column = "C", label = "Context" }]
        "#,
    )
    .expect("parse");
    assert_eq!(cfg.theme, "light");
    assert_eq!(cfg.panel_width, 640.0);
    assert_eq!(cfg.panels.len(), 1);
    assert!(!cfg.panels[0].y_log);
    assert_eq!(cfg.panels[0].series[1].display_name(), "Context");
}

#[test]
fn panel_padding_reaches_the_chart() {
    let cfg = DashboardConfig::from_toml_str(
        r#"
        [[panels]]
        id = "padded"
        group = "routine"
        x = "time_s"
        padding = { l = 60, r = 10, t = 8, b = 30 }
        series = [{ column = "E" }]
        "#,
    )
    .expect("parse");
    assert_eq!(cfg.panels[0].padding, Some(Insets::new(60.0, 10.0, 8.0, 30.0)));
    assert_eq!(DashboardConfig::from_toml_str(&cfg.to_toml().expect("serialize")).expect("reparse"), cfg);

    let host = Host::default();
    let panels = mount_panels(&host, &sample(), &cfg, None);
    let chart = &panels[0].chart;
    assert_eq!(chart.options().padding, Insets::new(60.0, 10.0, 8.0, 30.0));
    assert_eq!(chart.scales().expect("drawn").plot_rect().left, 60.0);
}

#[test]
fn series_take_palette_colors_in_order() {
    let ds = sample();
    let panel: PanelConfig = DashboardConfig::from_toml_str(
        r#"
        [[panels]]
        id = "p"
        group = "routine"
        x = "time_s"
        series = [{ column = "H_e" }, { column = "H_c" }]
        "#,
    )
    .unwrap()
    .panels
    .remove(0);
    let series = build_series(&ds, &panel).expect("series");
    assert_eq!(series[0].name, "H_e");
    assert_eq!(series[0].color, scatter_core::PALETTE[0]);
    assert_eq!(series[1].color, scatter_core::PALETTE[1]);
    assert_eq!(series[0].len(), ds.column("routine", "time_s").unwrap().len());
}

#[test]
fn all_default_panels_mount_on_sample() {
    let host = Host::default();
    let panels = mount_panels(&host, &sample(), &DashboardConfig::default(), None);
    assert_eq!(panels.len(), 10);
    assert!(panels.iter().all(|p| p.chart.frames_drawn() == 1));
    assert_eq!(host.resize.len(), 10);
}

#[test]
fn panels_with_missing_data_are_skipped() {
    let host = Host::default();
    let mut ds = sample();
    ds.insert_group("culture", Default::default());
    let panels = mount_panels(&host, &ds, &DashboardConfig::default(), None);
    assert_eq!(panels.len(), 9);
    assert!(panels.iter().all(|p| p.config.id != "cultural-chart"));
}

#[test]
fn only_filter_mounts_one_panel() {
    let host = Host::default();
    let panels = mount_panels(&host, &sample(), &DashboardConfig::default(), Some("transform-drug-chart"));
    assert_eq!(panels.len(), 1);
    // D is zero at t=0; that sample is dropped on the log axis.
    let cache = panels[0].chart.pixel_cache();
    assert_eq!(cache[0].points.len(), 24);
}
