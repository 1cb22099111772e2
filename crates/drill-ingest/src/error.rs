//! Error types for drill-hole data ingestion.

use std::path::PathBuf;

use drill_model::{CheckError, DatasetKind};
use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// File is neither valid UTF-8 nor UTF-16.
    #[error("could not decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    // === CSV Parsing Errors ===
    /// No header row could be read.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has a header but no data rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl IngestError {
    /// Converts into the user-facing failure for the dataset being loaded.
    pub fn into_check_error(self, dataset: DatasetKind) -> CheckError {
        match self {
            Self::EmptyCsv { .. } => CheckError::EmptyDataset { dataset },
            other => CheckError::Decode {
                dataset,
                message: other.to_string(),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
