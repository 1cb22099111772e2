//! Rule identities and the status vocabulary written into result tables.
//!
//! Status strings are domain vocabulary shared with the field geologists, so
//! they stay exactly as the logging teams read them (`Correcto`, `Observado`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Geology,
    SampleStandards,
    Alteration,
    Intervals,
    RockType,
    StandardsRatio,
}

impl RuleKind {
    pub const ALL: [RuleKind; 6] = [
        RuleKind::Geology,
        RuleKind::SampleStandards,
        RuleKind::StandardsRatio,
        RuleKind::Alteration,
        RuleKind::Intervals,
        RuleKind::RockType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Geology => "Geology",
            Self::SampleStandards => "Sample & Standards",
            Self::Alteration => "Alteration",
            Self::Intervals => "Intervals",
            Self::RockType => "Major vs Geology",
            Self::StandardsRatio => "Standards ratio",
        }
    }

    /// Stem used for exported result files.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Geology => "geology",
            Self::SampleStandards => "sample_standards",
            Self::Alteration => "alteration",
            Self::Intervals => "intervals",
            Self::RockType => "major",
            Self::StandardsRatio => "standards_ratio",
        }
    }

    /// Column carrying the per-row verdict, if the rule produces one.
    pub fn status_column(self) -> Option<&'static str> {
        match self {
            Self::Geology => Some(columns::GEOLOGY_STATUS),
            Self::SampleStandards => Some(columns::INTERVAL_STATUS),
            Self::Alteration | Self::Intervals | Self::RockType => Some(columns::STATUS),
            Self::StandardsRatio => None,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns true for a verdict that counts as passing in any rule's status column.
pub fn is_pass_status(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("correcto")
}

/// Lithology (clito, unit) verdict. Lowercase by convention of the geology sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeologyStatus {
    Correct,
    Incorrect,
}

impl GeologyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correcto",
            Self::Incorrect => "incorrecto",
        }
    }
}

/// Sample depth-interval verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleIntervalStatus {
    Correct,
    Observed,
}

impl SampleIntervalStatus {
    pub const MIN_RANGE: f64 = 0.5;
    pub const MAX_RANGE: f64 = 1.5;

    /// Classifies a sample length; an unknown length is observed.
    pub fn from_range(range: Option<f64>) -> Self {
        match range {
            Some(value) if (Self::MIN_RANGE..=Self::MAX_RANGE).contains(&value) => Self::Correct,
            _ => Self::Observed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "Correcto",
            Self::Observed => "Observado",
        }
    }
}

/// Plain match verdict used by the interval cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Correct,
    Incorrect,
}

impl MatchStatus {
    pub fn from_bool(matched: bool) -> Self {
        if matched { Self::Correct } else { Self::Incorrect }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "Correcto",
            Self::Incorrect => "Incorrecto",
        }
    }
}

/// Major interval rock-type verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RockTypeStatus {
    Correct,
    NoContainedSegments,
    Mismatch,
}

impl RockTypeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "Correcto",
            Self::NoContainedSegments => "Incorrecto (no contained segments)",
            Self::Mismatch => "Incorrecto (rock type mismatch)",
        }
    }
}
