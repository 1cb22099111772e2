//! Shared model for the drill-hole validation crates.
//!
//! Every other crate in the workspace speaks in these types: which dataset a
//! table came from, which hole it is filtered to, which rule produced a
//! result, and how a failed check is reported.

pub mod columns;
pub mod dataset;
pub mod error;
pub mod hole;
pub mod lookup;
pub mod processing;
pub mod status;

pub use dataset::DatasetKind;
pub use error::{CheckError, Result, Severity};
pub use hole::HoleId;
pub use lookup::ColumnLookup;
pub use processing::{ActionOutcome, ActionReport, RuleSummary, RunReport};
pub use status::{
    GeologyStatus, MatchStatus, RockTypeStatus, RuleKind, SampleIntervalStatus, is_pass_status,
};
