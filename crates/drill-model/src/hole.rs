use std::fmt;

use serde::{Deserialize, Serialize};

/// Drill-hole identifier used as the primary filter key across datasets.
///
/// Matching is done on the trimmed text form of a cell, so numeric hole
/// numbers loaded as floats (`101.0`) still match the identifier `101`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoleId(String);

impl HoleId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true when a cell's text form refers to this hole.
    pub fn matches(&self, cell: &str) -> bool {
        !self.0.is_empty() && cell.trim() == self.0
    }

    /// File-name friendly form of the identifier.
    pub fn file_stem(&self) -> String {
        self.0
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                    ch
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl fmt::Display for HoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HoleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HoleId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
