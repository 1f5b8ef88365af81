// File: crates/scatter-core/src/error.rs
// Summary: Library error type shared by construction, export and dataset loading.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series '{name}' has {x_len} x values but {y_len} y values")]
    SeriesLengthMismatch { name: String, x_len: usize, y_len: usize },

    #[error("failed to create raster surface ({width}x{height})")]
    SurfaceCreation { width: i32, height: i32 },

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid dataset CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset group '{0}' not found")]
    MissingGroup(String),

    #[error("dataset column '{group}.{column}' not found")]
    MissingColumn { group: String, column: String },

    #[error("container '{0}' not found")]
    MissingContainer(String),
}
