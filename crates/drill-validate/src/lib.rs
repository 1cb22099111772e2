//! Validation rules for drill-hole datasets.
//!
//! Each rule is an independent, stateless function over already-loaded
//! frames and a hole identifier:
//!
//! - [`validate_geology`]: (clito, unit) pairs against the lithology table
//! - [`merge_samples_and_standards`]: assay samples + standards, with
//!   sample length checks
//! - [`validate_alteration`]: intensity/distribution compatibility
//! - [`check_intervals`]: secondary depth intervals against sample depths
//! - [`check_rock_types`]: Major rock types against contained Geology units
//! - [`standards_ratio`]: share of QC samples for the hole
//!
//! Rules never panic on missing data: an absent hole yields
//! [`CheckError::EmptyResult`](drill_model::CheckError::EmptyResult).

mod alteration;
mod frame;
mod geology;
mod intervals;
mod ratio;
mod rock_type;
mod samples;

pub use alteration::{alteration_status, slot_violation, validate_alteration};
pub use geology::{geology_status, validate_geology};
pub use intervals::{IntervalBatch, IntervalCheck, check_interval_sources, check_intervals, interval_checks};
pub use ratio::{StandardsRatio, standards_ratio};
pub use rock_type::{RockTypeCheck, check_rock_types, rock_type_checks};
pub use samples::{MergedSample, merge_sample_rows, merge_samples_and_standards};

use drill_ingest::column_text;
use drill_model::{RuleKind, RuleSummary, is_pass_status};
use polars::prelude::DataFrame;

/// Counts passing and flagged rows in a rule's result table.
///
/// Rows with a null verdict (standards rows in the sample merge) count
/// toward `rows` only.
pub fn summarize(rule: RuleKind, df: &DataFrame) -> RuleSummary {
    let rows = df.height();
    let Some(column) = rule.status_column() else {
        return RuleSummary {
            rows,
            ..RuleSummary::default()
        };
    };
    let Ok(statuses) = column_text(df, column) else {
        return RuleSummary {
            rows,
            ..RuleSummary::default()
        };
    };
    let mut summary = RuleSummary {
        rows,
        ..RuleSummary::default()
    };
    for status in statuses.iter().flatten() {
        if is_pass_status(status) {
            summary.passed += 1;
        } else {
            summary.flagged += 1;
        }
    }
    summary
}
