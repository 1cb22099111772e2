//! Helpers shared by the rules: column resolution and hole selection.

use drill_ingest::filter_by_hole;
use drill_model::{CheckError, ColumnLookup, DatasetKind, HoleId, Result, RuleKind};
use polars::prelude::{DataFrame, PolarsError};

/// Resolves required columns to their names in `df`, reporting every missing one.
pub(crate) fn require_columns<const N: usize>(
    df: &DataFrame,
    dataset: DatasetKind,
    names: [&str; N],
) -> Result<[String; N]> {
    let lookup = ColumnLookup::new(df.get_column_names_owned());
    let missing = lookup.missing(&names);
    if !missing.is_empty() {
        return Err(CheckError::Schema {
            dataset,
            missing: missing.into_iter().map(str::to_string).collect(),
        });
    }
    Ok(std::array::from_fn(|idx| {
        lookup.get(names[idx]).unwrap_or(names[idx]).to_string()
    }))
}

/// Rows of `df` belonging to `hole`; may be empty.
pub(crate) fn hole_rows(
    df: &DataFrame,
    hole_column: &str,
    hole: &HoleId,
    rule: RuleKind,
) -> Result<DataFrame> {
    filter_by_hole(df, hole_column, hole).map_err(frame_fault(rule))
}

/// Rows of `df` belonging to `hole`, failing with `EmptyResult` when there are none.
pub(crate) fn require_hole_rows(
    df: &DataFrame,
    hole_column: &str,
    dataset: DatasetKind,
    hole: &HoleId,
    rule: RuleKind,
) -> Result<DataFrame> {
    let filtered = hole_rows(df, hole_column, hole, rule)?;
    if filtered.height() == 0 {
        return Err(CheckError::EmptyResult {
            dataset,
            hole: hole.clone(),
        });
    }
    Ok(filtered)
}

/// Wraps a frame operation failure as a rule failure.
pub(crate) fn frame_fault(rule: RuleKind) -> impl Fn(PolarsError) -> CheckError {
    move |error| CheckError::Validation {
        rule,
        message: error.to_string(),
    }
}
