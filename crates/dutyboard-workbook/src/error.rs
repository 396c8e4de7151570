use std::path::PathBuf;

use dutyboard_common::MarkerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "umya")]
    #[error("xlsx decode error: {0}")]
    Umya(#[from] umya_spreadsheet::XlsxError),

    #[cfg(feature = "calamine")]
    #[error("spreadsheet decode error: {0}")]
    Calamine(#[from] calamine::Error),

    #[error("unsupported roster file '{0}' (enable the matching backend feature)")]
    UnsupportedFormat(String),

    #[error("workbook has no sheets")]
    NoSheets,

    #[error("sheet '{0}' not found")]
    SheetNotFound(String),

    #[error("sheet index {index} out of range ({count} sheets)")]
    SheetIndex { index: usize, count: usize },

    #[error("invalid highlight marker: {0}")]
    Marker(#[from] MarkerError),

    #[error("invalid board config: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl WorkbookError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WorkbookError::Io {
            path: path.into(),
            source,
        }
    }
}
