// File: crates/dashboard/src/config.rs
// Summary: TOML-backed dashboard layout with a built-in default mirroring the research dashboard.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use scatter_core::{palette_color, Insets};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub theme: String,
    pub viewport_width: f32,
    pub device_pixel_ratio: f32,
    /// Container width every panel is laid out at.
    pub panel_width: f32,
    pub panels: Vec<PanelConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            viewport_width: 1280.0,
            device_pixel_ratio: 1.0,
            panel_width: 640.0,
            panels: default_panels(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid dashboard config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }

    pub fn panel(&self, id: &str) -> Option<&PanelConfig> {
        self.panels.iter().find(|p| p.id == id)
    }
}

/// One chart: a dataset group, its x column and the y columns to plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub id: String,
    pub group: String,
    pub x: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    #[serde(default)]
    pub y_log: bool,
    /// Height hint handed to the container, in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Plot padding (`l`, `r`, `t`, `b`); the chart default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Insets>,
    pub series: Vec<SeriesConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub column: String,
    /// Display name; the column name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Palette slot by declaration order when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SeriesConfig {
    fn new(column: &str, label: &str, palette_index: usize) -> Self {
        Self {
            column: column.to_string(),
            label: (label != column).then(|| label.to_string()),
            color: Some(palette_color(palette_index).to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.column)
    }
}

fn panel(id: &str, group: &str, x: &str, series: Vec<SeriesConfig>, x_label: &str, y_label: &str) -> PanelConfig {
    PanelConfig {
        id: id.to_string(),
        group: group.to_string(),
        x: x.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        y_log: false,
        height: None,
        padding: None,
        series,
    }
}

/// Routine, transformative, cultural and sensitivity panels.
pub fn default_panels() -> Vec<PanelConfig> {
    let s = SeriesConfig::new;
    vec![
        panel("routine-inputs-chart", "routine", "time_s", vec![s("E", "E (Input)", 0), s("C", "C (Context)", 1)], "time (s)", "value"),
        panel("routine-meaning-chart", "routine", "time_s", vec![s("M_r", "M_r (Meaning)", 0), s("Psi", "Psi", 2)], "time (s)", "value"),
        panel("routine-entropy-chart", "routine", "time_s", vec![s("H_e", "H_e", 3), s("H_c", "H_c", 4)], "time (s)", "entropy"),
        panel("transform-meaning-chart", "transform", "time_h", vec![s("M_t", "M_t (Transform)", 1)], "time (h)", "value"),
        PanelConfig {
            y_log: true,
            ..panel("transform-drug-chart", "transform", "time_h", vec![s("D", "D (Drug level)", 0)], "time (h)", "D")
        },
        panel(
            "transform-entropy-chart",
            "transform",
            "time_h",
            vec![s("H_e", "H_e", 3), s("E", "E", 0), s("C", "C", 2)],
            "time (h)",
            "value",
        ),
        panel(
            "cultural-chart",
            "culture",
            "psi0",
            vec![
                s("M_r_final", "M_r_final", 0),
                s("H_e_final", "H_e_final", 3),
                s("time_to_M_gt_0p35_s", "time_to_M>0.35 (s)", 1),
            ],
            "psi0",
            "outcome",
        ),
        panel("sens-meaning-chart", "sensitivity", "alpha_E", vec![s("M_r_final", "M_r_final", 0)], "alpha_E", "M_r_final"),
        panel(
            "sens-time-chart",
            "sensitivity",
            "alpha_E",
            vec![s("time_to_M_gt_0p40_s", "time_to_M>0.40 (s)", 1)],
            "alpha_E",
            "time (s)",
        ),
        panel("sens-entropy-chart", "sensitivity", "alpha_E", vec![s("H_e_final", "H_e_final", 3)], "alpha_E", "H_e_final"),
    ]
}
