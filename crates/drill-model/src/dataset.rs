use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds of tabular extract a drill-hole campaign produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Geology,
    Sample,
    Standards,
    Alteration,
    Mine,
    Major,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Geology,
        DatasetKind::Sample,
        DatasetKind::Standards,
        DatasetKind::Alteration,
        DatasetKind::Mine,
        DatasetKind::Major,
    ];

    /// Secondary interval sources, in the order their checks are reported.
    pub const INTERVAL_SOURCES: [DatasetKind; 4] = [
        DatasetKind::Geology,
        DatasetKind::Major,
        DatasetKind::Alteration,
        DatasetKind::Mine,
    ];

    /// Display label, also written into the `archivo` column of interval checks.
    pub fn label(self) -> &'static str {
        match self {
            Self::Geology => "Geology",
            Self::Sample => "Sample",
            Self::Standards => "Standards",
            Self::Alteration => "Alteration",
            Self::Mine => "Mine",
            Self::Major => "Major",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
