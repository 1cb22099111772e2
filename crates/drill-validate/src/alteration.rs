//! Alteration intensity/distribution compatibility.

use drill_ingest::column_text;
use drill_model::columns::{DISTRIBUTION, HOLE_NUMBER, INTENSITY, STATUS};
use drill_model::{DatasetKind, HoleId, MatchStatus, Result, RuleKind};
use drill_standards::intensity_rule;
use polars::prelude::{Column, DataFrame};
use tracing::{debug, info};

use crate::frame::{frame_fault, require_columns, require_hole_rows};

/// Violation message for one intensity/distribution slot (1-based), if any.
pub fn slot_violation(slot: usize, intensity: Option<&str>, distribution: Option<&str>) -> Option<String> {
    let rule = intensity_rule(intensity?)?;
    if rule.distribution.allows(distribution) {
        return None;
    }
    Some(format!(
        "Incorrecto en intensity_{slot} y distribution_{slot} (esperado {})",
        rule.distribution.expectation()
    ))
}

/// Row verdict from its slot violations: `Correcto`, or the violations joined by ` | `.
pub fn alteration_status(violations: &[String]) -> String {
    if violations.is_empty() {
        MatchStatus::Correct.as_str().to_string()
    } else {
        violations.join(" | ")
    }
}

/// Rows of the hole with a `validacion` column appended.
pub fn validate_alteration(alteration: &DataFrame, hole: &HoleId) -> Result<DataFrame> {
    let rule = RuleKind::Alteration;
    let [hole_col, i1, i2, i3, d1, d2, d3] = require_columns(
        alteration,
        DatasetKind::Alteration,
        [
            HOLE_NUMBER,
            INTENSITY[0],
            INTENSITY[1],
            INTENSITY[2],
            DISTRIBUTION[0],
            DISTRIBUTION[1],
            DISTRIBUTION[2],
        ],
    )?;
    let mut rows = require_hole_rows(alteration, &hole_col, DatasetKind::Alteration, hole, rule)?;
    debug!(hole = %hole, rows = rows.height(), "validating alteration");

    let mut slots = Vec::with_capacity(3);
    for (intensity, distribution) in [(&i1, &d1), (&i2, &d2), (&i3, &d3)] {
        slots.push((
            column_text(&rows, intensity).map_err(frame_fault(rule))?,
            column_text(&rows, distribution).map_err(frame_fault(rule))?,
        ));
    }

    let statuses: Vec<String> = (0..rows.height())
        .map(|row| {
            let violations: Vec<String> = slots
                .iter()
                .enumerate()
                .filter_map(|(idx, (intensities, distributions))| {
                    slot_violation(idx + 1, intensities[row].as_deref(), distributions[row].as_deref())
                })
                .collect();
            alteration_status(&violations)
        })
        .collect();
    let flagged = statuses
        .iter()
        .filter(|status| *status != MatchStatus::Correct.as_str())
        .count();

    rows.with_column(Column::new(STATUS.into(), statuses))
        .map_err(frame_fault(rule))?;
    info!(hole = %hole, rows = rows.height(), flagged, "alteration validation complete");
    Ok(rows)
}
