//! Depth interval cross-check between samples and secondary datasets.

use drill_ingest::column_f64;
use drill_model::columns::{DEPTH_FROM, DEPTH_TO, HOLE_NUMBER, SOURCE_FILE, STATUS};
use drill_model::{CheckError, DatasetKind, HoleId, MatchStatus, Result, RuleKind};
use polars::prelude::{Column, DataFrame};
use tracing::{debug, info, warn};

use crate::frame::{frame_fault, require_columns, require_hole_rows};

const RULE: RuleKind = RuleKind::Intervals;

/// One secondary interval and whether both its ends appear in the samples.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalCheck {
    pub hole_number: String,
    pub depth_from: Option<f64>,
    pub depth_to: Option<f64>,
    pub source: DatasetKind,
    pub status: MatchStatus,
}

/// Checks each `source` interval of the hole against sample depths.
///
/// `depth_from` must equal some sample's `depth_from` and `depth_to` some
/// sample's `depth_to`; the two need not come from the same sample.
pub fn interval_checks(
    samples: &DataFrame,
    secondary: &DataFrame,
    source: DatasetKind,
    hole: &HoleId,
) -> Result<Vec<IntervalCheck>> {
    let [s_hole, s_from, s_to] =
        require_columns(samples, DatasetKind::Sample, [HOLE_NUMBER, DEPTH_FROM, DEPTH_TO])?;
    let [o_hole, o_from, o_to] =
        require_columns(secondary, source, [HOLE_NUMBER, DEPTH_FROM, DEPTH_TO])?;
    let sample_rows = require_hole_rows(samples, &s_hole, DatasetKind::Sample, hole, RULE)?;
    let other_rows = require_hole_rows(secondary, &o_hole, source, hole, RULE)?;
    debug!(hole = %hole, source = %source, intervals = other_rows.height(), "checking intervals");

    let sample_froms: Vec<f64> = column_f64(&sample_rows, &s_from)
        .map_err(frame_fault(RULE))?
        .into_iter()
        .flatten()
        .collect();
    let sample_tos: Vec<f64> = column_f64(&sample_rows, &s_to)
        .map_err(frame_fault(RULE))?
        .into_iter()
        .flatten()
        .collect();

    let froms = column_f64(&other_rows, &o_from).map_err(frame_fault(RULE))?;
    let tos = column_f64(&other_rows, &o_to).map_err(frame_fault(RULE))?;
    Ok(froms
        .into_iter()
        .zip(tos)
        .map(|(depth_from, depth_to)| {
            let matched = depth_from.is_some_and(|from| sample_froms.contains(&from))
                && depth_to.is_some_and(|to| sample_tos.contains(&to));
            IntervalCheck {
                hole_number: hole.to_string(),
                depth_from,
                depth_to,
                source,
                status: MatchStatus::from_bool(matched),
            }
        })
        .collect())
}

/// [`interval_checks`] as a table tagged with the source in `archivo`.
pub fn check_intervals(
    samples: &DataFrame,
    secondary: &DataFrame,
    source: DatasetKind,
    hole: &HoleId,
) -> Result<DataFrame> {
    let checks = interval_checks(samples, secondary, source, hole)?;
    let frame = interval_frame(&checks)?;
    info!(hole = %hole, source = %source, rows = frame.height(), "interval check complete");
    Ok(frame)
}

/// Result of checking several secondary sources in one pass.
#[derive(Debug, Default)]
pub struct IntervalBatch {
    /// Rows from every source that could be checked, in source order.
    pub frame: Option<DataFrame>,
    /// One entry per source that failed; the others still contribute rows.
    pub failures: Vec<CheckError>,
}

/// Checks each supplied source in turn and concatenates the results.
pub fn check_interval_sources(
    samples: &DataFrame,
    sources: &[(DatasetKind, &DataFrame)],
    hole: &HoleId,
) -> IntervalBatch {
    let mut batch = IntervalBatch::default();
    let mut rows = Vec::new();
    for (source, secondary) in sources {
        match interval_checks(samples, secondary, *source, hole) {
            Ok(checks) => rows.extend(checks),
            Err(error) => {
                warn!(hole = %hole, source = %source, error = %error, "interval source skipped");
                batch.failures.push(error);
            }
        }
    }
    if !rows.is_empty() {
        match interval_frame(&rows) {
            Ok(frame) => batch.frame = Some(frame),
            Err(error) => batch.failures.push(error),
        }
    }
    batch
}

fn interval_frame(checks: &[IntervalCheck]) -> Result<DataFrame> {
    DataFrame::new(vec![
        Column::new(
            HOLE_NUMBER.into(),
            checks.iter().map(|c| c.hole_number.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            DEPTH_FROM.into(),
            checks.iter().map(|c| c.depth_from).collect::<Vec<_>>(),
        ),
        Column::new(
            DEPTH_TO.into(),
            checks.iter().map(|c| c.depth_to).collect::<Vec<_>>(),
        ),
        Column::new(
            SOURCE_FILE.into(),
            checks.iter().map(|c| c.source.label()).collect::<Vec<_>>(),
        ),
        Column::new(
            STATUS.into(),
            checks.iter().map(|c| c.status.as_str()).collect::<Vec<_>>(),
        ),
    ])
    .map_err(frame_fault(RULE))
}
