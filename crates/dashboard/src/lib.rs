// File: crates/dashboard/src/lib.rs
// Summary: Dashboard layout config and panel mounting, shared by the headless and windowed binaries.

pub mod config;
pub mod panels;

pub use config::{DashboardConfig, PanelConfig, SeriesConfig};
pub use panels::{build_series, mount_panels, MountedPanel};
