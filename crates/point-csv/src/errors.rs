use std::path::PathBuf;

use point_types::PointError;

/// Errors from reading or writing CSV point lists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CsvError {
    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("invalid point in row {row}: {source}")]
    InvalidPoint {
        row: usize,
        #[source]
        source: PointError,
    },

    #[error("failed to encode points: {reason}")]
    Encode { reason: String },

    #[error("I/O error on '{}': {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}

impl CsvError {
    /// Zero-based row index the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            CsvError::MalformedRow { row, .. } | CsvError::InvalidPoint { row, .. } => Some(*row),
            CsvError::Encode { .. } | CsvError::Io { .. } => None,
        }
    }
}
