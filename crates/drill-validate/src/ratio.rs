//! Share of QC samples for a hole.

use drill_ingest::column_text;
use drill_model::columns::{
    HOLE_NUMBER, SAMPLE_TYPE_CODE, STANDARDS_PCT, TOTAL_DP_RG, TOTAL_OR, TOTAL_STANDARDS,
};
use drill_model::{CheckError, DatasetKind, HoleId, Result, RuleKind};
use drill_standards::is_duplicate_or_reject_type;
use polars::prelude::{Column, DataFrame, PolarsResult};
use tracing::info;

use crate::frame::{frame_fault, hole_rows, require_columns};

const RULE: RuleKind = RuleKind::StandardsRatio;

/// QC counts for one hole.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardsRatio {
    pub hole: HoleId,
    /// Original samples: every sample whose type is not DP or RG.
    pub total_or: usize,
    pub total_standards: usize,
    /// Duplicates and rejects.
    pub total_dp_rg: usize,
}

impl StandardsRatio {
    /// QC samples over all samples; zero when there are no samples.
    pub fn ratio(&self) -> f64 {
        let qc = self.total_standards + self.total_dp_rg;
        let total = self.total_or + qc;
        if total == 0 {
            return 0.0;
        }
        qc as f64 / total as f64
    }

    pub fn percentage(&self) -> f64 {
        self.ratio() * 100.0
    }

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            Column::new(HOLE_NUMBER.into(), [self.hole.as_str()]),
            Column::new(TOTAL_OR.into(), [self.total_or as u64]),
            Column::new(TOTAL_STANDARDS.into(), [self.total_standards as u64]),
            Column::new(TOTAL_DP_RG.into(), [self.total_dp_rg as u64]),
            Column::new(STANDARDS_PCT.into(), [self.percentage()]),
        ])
    }
}

/// Counts original, standard, and duplicate/reject samples for the hole.
pub fn standards_ratio(samples: &DataFrame, standards: &DataFrame, hole: &HoleId) -> Result<StandardsRatio> {
    let [s_hole, s_type] =
        require_columns(samples, DatasetKind::Sample, [HOLE_NUMBER, SAMPLE_TYPE_CODE])?;
    let [q_hole] = require_columns(standards, DatasetKind::Standards, [HOLE_NUMBER])?;
    let sample_rows = hole_rows(samples, &s_hole, hole, RULE)?;
    let standard_rows = hole_rows(standards, &q_hole, hole, RULE)?;
    if sample_rows.height() == 0 && standard_rows.height() == 0 {
        return Err(CheckError::EmptyResult {
            dataset: DatasetKind::Sample,
            hole: hole.clone(),
        });
    }

    let types = column_text(&sample_rows, &s_type).map_err(frame_fault(RULE))?;
    let total_dp_rg = types
        .iter()
        .flatten()
        .filter(|sample_type| is_duplicate_or_reject_type(sample_type))
        .count();
    let ratio = StandardsRatio {
        hole: hole.clone(),
        total_or: types.len() - total_dp_rg,
        total_standards: standard_rows.height(),
        total_dp_rg,
    };
    info!(
        hole = %hole,
        total_or = ratio.total_or,
        total_standards = ratio.total_standards,
        total_dp_rg = ratio.total_dp_rg,
        pct = ratio.percentage(),
        "standards ratio computed"
    );
    Ok(ratio)
}
