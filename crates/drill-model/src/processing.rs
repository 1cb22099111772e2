use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dataset::DatasetKind;
use crate::error::{CheckError, Severity};
use crate::hole::HoleId;
use crate::status::RuleKind;

/// Row counts for one rule's result table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub rows: usize,
    pub passed: usize,
    pub flagged: usize,
}

impl RuleSummary {
    pub fn is_clean(&self) -> bool {
        self.flagged == 0
    }
}

/// How a triggered action ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Completed { summary: RuleSummary },
    Failed {
        severity: Severity,
        message: String,
        /// Dataset the failure is attributed to, when there is one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dataset: Option<DatasetKind>,
    },
    Skipped { reason: String },
}

impl ActionOutcome {
    pub fn failed(error: &CheckError) -> Self {
        Self::Failed {
            severity: error.severity(),
            message: error.to_string(),
            dataset: error.dataset(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::Failed {
                severity: Severity::Error,
                ..
            }
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionReport {
    pub rule: RuleKind,
    pub outcome: ActionOutcome,
    /// Additional non-fatal failures (one per interval source that could not be checked).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub output: Option<PathBuf>,
}

/// Everything one CLI invocation did for a hole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub hole: HoleId,
    pub generated_at: DateTime<Utc>,
    pub actions: Vec<ActionReport>,
}

impl RunReport {
    pub fn new(hole: HoleId) -> Self {
        Self {
            hole,
            generated_at: Utc::now(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, action: ActionReport) {
        self.actions.push(action);
    }

    pub fn has_errors(&self) -> bool {
        self.actions.iter().any(|action| action.outcome.is_error())
    }
}
