//! Geology lithology check.

use drill_ingest::{column_f64, column_text};
use drill_model::columns::{CLITO, GEOLOGY_STATUS, HOLE_NUMBER, UNIT};
use drill_model::{DatasetKind, GeologyStatus, HoleId, Result, RuleKind};
use drill_standards::is_valid_lithology;
use polars::prelude::{Column, DataFrame};
use tracing::{debug, info};

use crate::frame::{frame_fault, require_columns, require_hole_rows};

/// Verdict for a single (clito, unit) pair.
///
/// `clito` must be a whole number that is a known lithology code; anything
/// else, including a missing unit, is incorrect.
pub fn geology_status(clito: Option<f64>, unit: Option<&str>) -> GeologyStatus {
    match (clito.and_then(clito_code), unit) {
        (Some(code), Some(unit)) if is_valid_lithology(code, unit) => GeologyStatus::Correct,
        _ => GeologyStatus::Incorrect,
    }
}

fn clito_code(value: f64) -> Option<u16> {
    if value.fract() != 0.0 || !(0.0..=f64::from(u16::MAX)).contains(&value) {
        return None;
    }
    Some(value as u16)
}

/// Rows of the hole with a `validacion_geo` verdict column appended.
///
/// Running the rule on its own output replaces the verdict column, so the
/// result is stable under re-application.
pub fn validate_geology(geology: &DataFrame, hole: &HoleId) -> Result<DataFrame> {
    let rule = RuleKind::Geology;
    let [hole_col, clito_col, unit_col] =
        require_columns(geology, DatasetKind::Geology, [HOLE_NUMBER, CLITO, UNIT])?;
    let mut rows = require_hole_rows(geology, &hole_col, DatasetKind::Geology, hole, rule)?;
    debug!(hole = %hole, rows = rows.height(), "validating geology lithology");

    let clitos = column_f64(&rows, &clito_col).map_err(frame_fault(rule))?;
    let units = column_text(&rows, &unit_col).map_err(frame_fault(rule))?;
    let statuses: Vec<&str> = clitos
        .iter()
        .zip(&units)
        .map(|(clito, unit)| geology_status(*clito, unit.as_deref()).as_str())
        .collect();
    let incorrect = statuses
        .iter()
        .filter(|status| **status == GeologyStatus::Incorrect.as_str())
        .count();

    rows.with_column(Column::new(GEOLOGY_STATUS.into(), statuses))
        .map_err(frame_fault(rule))?;
    info!(hole = %hole, rows = rows.height(), incorrect, "geology validation complete");
    Ok(rows)
}
