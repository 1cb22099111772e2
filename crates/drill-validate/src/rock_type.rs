//! Major rock-type consistency against contained Geology units.

use drill_ingest::{column_f64, column_text};
use drill_model::columns::{
    DEPTH_FROM, DEPTH_FROM_MAJOR, DEPTH_TO, DEPTH_TO_MAJOR, HOLE_NUMBER, ROCK_TYPE_CODE,
    ROCK_TYPE_MAJOR, STATUS, UNIT,
};
use drill_model::{DatasetKind, HoleId, Result, RockTypeStatus, RuleKind};
use drill_standards::rock_type_for_unit;
use polars::prelude::{Column, DataFrame};
use tracing::{debug, info};

use crate::frame::{frame_fault, require_columns, require_hole_rows};

const RULE: RuleKind = RuleKind::RockType;

/// One Major interval and its verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct RockTypeCheck {
    pub hole_number: String,
    pub depth_from: Option<f64>,
    pub depth_to: Option<f64>,
    pub rock_type: Option<String>,
    pub status: RockTypeStatus,
}

struct Segment {
    from: f64,
    to: f64,
    unit: Option<String>,
}

/// Verdict for each Major interval of the hole.
///
/// A Geology segment is contained when it lies fully inside the Major
/// interval. Every distinct contained unit must map to the declared rock
/// type; a unit with no mapping never matches.
pub fn rock_type_checks(
    lithology: &DataFrame,
    major: &DataFrame,
    hole: &HoleId,
) -> Result<Vec<RockTypeCheck>> {
    let [g_hole, g_from, g_to, g_unit] = require_columns(
        lithology,
        DatasetKind::Geology,
        [HOLE_NUMBER, DEPTH_FROM, DEPTH_TO, UNIT],
    )?;
    let [m_hole, m_from, m_to, m_rock] = require_columns(
        major,
        DatasetKind::Major,
        [HOLE_NUMBER, DEPTH_FROM, DEPTH_TO, ROCK_TYPE_CODE],
    )?;
    let geology_rows = require_hole_rows(lithology, &g_hole, DatasetKind::Geology, hole, RULE)?;
    let major_rows = require_hole_rows(major, &m_hole, DatasetKind::Major, hole, RULE)?;
    debug!(
        hole = %hole,
        segments = geology_rows.height(),
        intervals = major_rows.height(),
        "checking major rock types"
    );

    let froms = column_f64(&geology_rows, &g_from).map_err(frame_fault(RULE))?;
    let tos = column_f64(&geology_rows, &g_to).map_err(frame_fault(RULE))?;
    let units = column_text(&geology_rows, &g_unit).map_err(frame_fault(RULE))?;
    let segments: Vec<Segment> = froms
        .into_iter()
        .zip(tos)
        .zip(units)
        .filter_map(|((from, to), unit)| Some(Segment { from: from?, to: to?, unit }))
        .collect();

    let major_froms = column_f64(&major_rows, &m_from).map_err(frame_fault(RULE))?;
    let major_tos = column_f64(&major_rows, &m_to).map_err(frame_fault(RULE))?;
    let rock_types = column_text(&major_rows, &m_rock).map_err(frame_fault(RULE))?;
    Ok(major_froms
        .into_iter()
        .zip(major_tos)
        .zip(rock_types)
        .map(|((depth_from, depth_to), rock_type)| {
            let status = interval_status(&segments, depth_from, depth_to, rock_type.as_deref());
            RockTypeCheck {
                hole_number: hole.to_string(),
                depth_from,
                depth_to,
                rock_type,
                status,
            }
        })
        .collect())
}

fn interval_status(
    segments: &[Segment],
    from: Option<f64>,
    to: Option<f64>,
    rock_type: Option<&str>,
) -> RockTypeStatus {
    let (Some(from), Some(to)) = (from, to) else {
        return RockTypeStatus::NoContainedSegments;
    };
    let mut contained = segments
        .iter()
        .filter(|segment| segment.from >= from && segment.to <= to)
        .peekable();
    if contained.peek().is_none() {
        return RockTypeStatus::NoContainedSegments;
    }
    let consistent = contained.all(|segment| {
        let mapped = segment.unit.as_deref().and_then(rock_type_for_unit);
        matches!((mapped, rock_type), (Some(mapped), Some(declared)) if mapped == declared)
    });
    if consistent {
        RockTypeStatus::Correct
    } else {
        RockTypeStatus::Mismatch
    }
}

/// [`rock_type_checks`] as a table with `*_major` columns and `validacion`.
pub fn check_rock_types(lithology: &DataFrame, major: &DataFrame, hole: &HoleId) -> Result<DataFrame> {
    let checks = rock_type_checks(lithology, major, hole)?;
    let frame = DataFrame::new(vec![
        Column::new(
            HOLE_NUMBER.into(),
            checks.iter().map(|c| c.hole_number.as_str()).collect::<Vec<_>>(),
        ),
        Column::new(
            DEPTH_FROM_MAJOR.into(),
            checks.iter().map(|c| c.depth_from).collect::<Vec<_>>(),
        ),
        Column::new(
            DEPTH_TO_MAJOR.into(),
            checks.iter().map(|c| c.depth_to).collect::<Vec<_>>(),
        ),
        Column::new(
            ROCK_TYPE_MAJOR.into(),
            checks.iter().map(|c| c.rock_type.as_deref()).collect::<Vec<_>>(),
        ),
        Column::new(
            STATUS.into(),
            checks.iter().map(|c| c.status.as_str()).collect::<Vec<_>>(),
        ),
    ])
    .map_err(frame_fault(RULE))?;
    info!(hole = %hole, rows = frame.height(), "rock type check complete");
    Ok(frame)
}
