//! Error types for the weather processing pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while computing temperature statistics
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot aggregate temperatures of an empty dataset")]
    EmptyDataset,
}

/// Errors raised by a chart sink
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart has no values to plot")]
    Empty,

    #[error("chart has {labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },

    #[error("failed to encode chart image: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while writing or reading an exported dataset
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("weather data JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that abort a pipeline run
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
