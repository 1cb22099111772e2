use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::DatasetKind;
use crate::hole::HoleId;
use crate::status::RuleKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARN",
        }
    }
}

/// Failure of a single validation action.
///
/// None of these abort the process: each is caught at the boundary of the
/// action that raised it and reported to the user.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    /// A dataset the action needs was not supplied.
    #[error("no {dataset} data supplied")]
    MissingInput { dataset: DatasetKind },

    /// Required columns are absent from a dataset.
    #[error("{dataset} is missing required columns: {}", .missing.join(", "))]
    Schema {
        dataset: DatasetKind,
        missing: Vec<String>,
    },

    /// Filtering a dataset by hole produced no rows.
    #[error("no {dataset} rows found for hole {hole}")]
    EmptyResult { dataset: DatasetKind, hole: HoleId },

    /// The dataset could not be decoded or parsed.
    #[error("could not read {dataset} data: {message}")]
    Decode {
        dataset: DatasetKind,
        message: String,
    },

    /// The dataset decoded but holds no records.
    #[error("{dataset} dataset is empty")]
    EmptyDataset { dataset: DatasetKind },

    /// A column access or frame operation failed inside a rule.
    #[error("{rule} failed: {message}")]
    Validation { rule: RuleKind, message: String },
}

impl CheckError {
    pub fn severity(&self) -> Severity {
        match self {
            Self::EmptyResult { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }

    /// The dataset the failure concerns, when there is one.
    pub fn dataset(&self) -> Option<DatasetKind> {
        match self {
            Self::MissingInput { dataset }
            | Self::Schema { dataset, .. }
            | Self::EmptyResult { dataset, .. }
            | Self::Decode { dataset, .. }
            | Self::EmptyDataset { dataset } => Some(*dataset),
            Self::Validation { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
