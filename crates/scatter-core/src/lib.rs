// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatter chart engine, host stand-ins and dataset loading.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod range;
pub mod projection;
pub mod hover;
pub mod format;
pub mod theme;
pub mod text;
pub mod render;
pub mod host;
pub mod dataset;
pub mod error;
pub mod telemetry;

pub use chart::{ChartOptions, RasterFrame, ScatterChart, DEFAULT_EXPORT_NAME};
pub use series::{legend, palette_color, LegendEntry, Series, PALETTE};
pub use axis::{Axis, ScaleKind};
pub use grid::nice_ticks;
pub use types::{Insets, SurfaceSize};
pub use scale::{ScaleTransform, Scales};
pub use range::Range;
pub use projection::{build_pixel_cache, PixelPoint, PixelSeries};
pub use hover::{nearest_by_x, place_tooltip, resolve_hover, HoverItem, HoverState, Tooltip};
pub use format::{fmt, fmt_opt, PLACEHOLDER};
pub use theme::{parse_color, Theme};
pub use text::TextShaper;
pub use host::{initial_height, Container, ContainerContent, Host, Page, ResizeObserver, ResizeSubscription, Viewport};
pub use dataset::{Dataset, Table};
pub use error::{ChartError, ChartResult};
