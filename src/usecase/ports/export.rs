use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered(PathBuf),
    Cancelled,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render csv: {0}")]
    Render(String),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Render(err.to_string())
    }
}

/// Hands a rendered report to the user (save dialog, folder, ...).
pub trait ExportSink: Send + Sync {
    fn deliver(&self, file_name: &str, contents: &str) -> Result<DeliveryOutcome, ExportError>;
}
