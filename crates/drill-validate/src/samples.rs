//! Sample and standards merge with sample length checks.

use std::cmp::Ordering;
use std::collections::HashSet;

use drill_ingest::{column_f64, column_text, parse_f64};
use drill_model::columns::{
    DEPTH_FROM, DEPTH_RANGE, DEPTH_TO, HOLE_NUMBER, INTERVAL_STATUS, PARENT_SAMPLE_NUMBER,
    SAMPLE_NUMBER, SAMPLE_TYPE, SAMPLE_TYPE_CODE, STANDARD_CODE,
};
use drill_model::{CheckError, DatasetKind, HoleId, Result, RuleKind, SampleIntervalStatus};
use polars::prelude::{Column, DataFrame};
use tracing::{debug, info};

use crate::frame::{frame_fault, hole_rows, require_columns};

const RULE: RuleKind = RuleKind::SampleStandards;

/// One row of the merged sample/standards table.
///
/// Standards rows carry no depths, so their range and verdict are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSample {
    pub hole_number: String,
    pub sample_number: Option<String>,
    pub sample_type: Option<String>,
    pub parent_sample_number: Option<String>,
    pub depth_from: Option<f64>,
    pub depth_to: Option<f64>,
    pub depth_range: Option<f64>,
    pub interval_status: Option<SampleIntervalStatus>,
}

impl MergedSample {
    fn key(&self) -> (String, String, String) {
        (
            self.hole_number.clone(),
            self.sample_number.clone().unwrap_or_default(),
            self.sample_type.clone().unwrap_or_default(),
        )
    }
}

/// Merged rows for the hole, deduplicated and ordered by sample number.
///
/// Only fails with `EmptyResult` when neither input has rows for the hole.
/// Column problems on either side are reported as a rule failure since the
/// merge has no single dataset to blame.
pub fn merge_sample_rows(
    samples: &DataFrame,
    standards: &DataFrame,
    hole: &HoleId,
) -> Result<Vec<MergedSample>> {
    let [s_hole, s_number, s_from, s_to, s_type, s_parent] = require_columns(
        samples,
        DatasetKind::Sample,
        [
            HOLE_NUMBER,
            SAMPLE_NUMBER,
            DEPTH_FROM,
            DEPTH_TO,
            SAMPLE_TYPE_CODE,
            PARENT_SAMPLE_NUMBER,
        ],
    )
    .map_err(as_rule_failure)?;
    let [q_hole, q_number, q_code] = require_columns(
        standards,
        DatasetKind::Standards,
        [HOLE_NUMBER, SAMPLE_NUMBER, STANDARD_CODE],
    )
    .map_err(as_rule_failure)?;

    let sample_rows = hole_rows(samples, &s_hole, hole, RULE)?;
    let standard_rows = hole_rows(standards, &q_hole, hole, RULE)?;
    if sample_rows.height() == 0 && standard_rows.height() == 0 {
        return Err(CheckError::EmptyResult {
            dataset: DatasetKind::Sample,
            hole: hole.clone(),
        });
    }
    debug!(
        hole = %hole,
        samples = sample_rows.height(),
        standards = standard_rows.height(),
        "merging samples and standards"
    );

    let mut merged = Vec::with_capacity(sample_rows.height() + standard_rows.height());
    let numbers = column_text(&sample_rows, &s_number).map_err(frame_fault(RULE))?;
    let froms = column_f64(&sample_rows, &s_from).map_err(frame_fault(RULE))?;
    let tos = column_f64(&sample_rows, &s_to).map_err(frame_fault(RULE))?;
    let types = column_text(&sample_rows, &s_type).map_err(frame_fault(RULE))?;
    let parents = column_text(&sample_rows, &s_parent).map_err(frame_fault(RULE))?;
    for idx in 0..sample_rows.height() {
        let depth_range = depth_range(froms[idx], tos[idx]);
        merged.push(MergedSample {
            hole_number: hole.to_string(),
            sample_number: numbers[idx].clone(),
            sample_type: types[idx].clone(),
            parent_sample_number: parents[idx].clone(),
            depth_from: froms[idx],
            depth_to: tos[idx],
            depth_range,
            interval_status: Some(SampleIntervalStatus::from_range(depth_range)),
        });
    }

    let numbers = column_text(&standard_rows, &q_number).map_err(frame_fault(RULE))?;
    let codes = column_text(&standard_rows, &q_code).map_err(frame_fault(RULE))?;
    for (number, code) in numbers.into_iter().zip(codes) {
        merged.push(MergedSample {
            hole_number: hole.to_string(),
            sample_number: number,
            sample_type: code,
            parent_sample_number: None,
            depth_from: None,
            depth_to: None,
            depth_range: None,
            interval_status: None,
        });
    }

    let mut seen = HashSet::new();
    merged.retain(|row| seen.insert(row.key()));
    sort_by_sample_number(&mut merged);
    Ok(merged)
}

/// [`merge_sample_rows`] as a table with `tipo_muestra`, `depth_range` and
/// `tramo_valido` columns.
pub fn merge_samples_and_standards(
    samples: &DataFrame,
    standards: &DataFrame,
    hole: &HoleId,
) -> Result<DataFrame> {
    let rows = merge_sample_rows(samples, standards, hole)?;
    let observed = rows
        .iter()
        .filter(|row| row.interval_status == Some(SampleIntervalStatus::Observed))
        .count();

    let frame = DataFrame::new(vec![
        Column::new(
            HOLE_NUMBER.into(),
            rows.iter().map(|row| row.hole_number.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            SAMPLE_NUMBER.into(),
            rows.iter()
                .map(|row| row.sample_number.as_deref())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            SAMPLE_TYPE.into(),
            rows.iter()
                .map(|row| row.sample_type.as_deref())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            PARENT_SAMPLE_NUMBER.into(),
            rows.iter()
                .map(|row| row.parent_sample_number.as_deref())
                .collect::<Vec<_>>(),
        ),
        Column::new(
            DEPTH_FROM.into(),
            rows.iter().map(|row| row.depth_from).collect::<Vec<_>>(),
        ),
        Column::new(
            DEPTH_TO.into(),
            rows.iter().map(|row| row.depth_to).collect::<Vec<_>>(),
        ),
        Column::new(
            DEPTH_RANGE.into(),
            rows.iter().map(|row| row.depth_range).collect::<Vec<_>>(),
        ),
        Column::new(
            INTERVAL_STATUS.into(),
            rows.iter()
                .map(|row| row.interval_status.map(SampleIntervalStatus::as_str))
                .collect::<Vec<_>>(),
        ),
    ])
    .map_err(frame_fault(RULE))?;
    info!(hole = %hole, rows = frame.height(), observed, "sample merge complete");
    Ok(frame)
}

/// Length of a sample, rounded to micrometres to drop float noise.
fn depth_range(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let range = to? - from?;
    Some((range * 1e6).round() / 1e6)
}

fn as_rule_failure(error: CheckError) -> CheckError {
    CheckError::Validation {
        rule: RULE,
        message: error.to_string(),
    }
}

/// Numeric sample numbers first in numeric order, then the rest in text order.
/// Missing numbers sort last; ties keep input order.
fn sort_by_sample_number(rows: &mut [MergedSample]) {
    rows.sort_by(|a, b| {
        let (x, y) = (a.sample_number.as_deref(), b.sample_number.as_deref());
        missing_last(x, y, compare_sample_numbers)
    });
}

fn compare_sample_numbers(a: &str, b: &str) -> Ordering {
    if let (Ok(x), Ok(y)) = (a.parse::<i64>(), b.parse::<i64>()) {
        return x.cmp(&y);
    }
    match (parse_f64(a), parse_f64(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
