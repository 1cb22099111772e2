use drill_ingest::column_text;
use drill_model::{CheckError, DatasetKind, HoleId, MatchStatus, RockTypeStatus};
use drill_validate::{
    check_interval_sources, check_intervals, check_rock_types, interval_checks, rock_type_checks,
};
use polars::prelude::{Column, DataFrame};

fn samples() -> DataFrame {
    DataFrame::new(vec![
        Column::new("hole_number".into(), ["PE-1", "PE-1", "PE-1"]),
        Column::new("depth_from".into(), [0.0, 1.0, 2.0]),
        Column::new("depth_to".into(), [1.0, 2.0, 3.0]),
    ])
    .expect("df")
}

fn intervals(hole: &str, from: [f64; 2], to: [f64; 2]) -> DataFrame {
    DataFrame::new(vec![
        Column::new("hole_number".into(), [hole, hole]),
        Column::new("depth_from".into(), from),
        Column::new("depth_to".into(), to),
    ])
    .expect("df")
}

#[test]
fn interval_ends_must_both_appear_in_samples() {
    let mine = intervals("PE-1", [1.0, 1.0], [2.0, 5.0]);
    let checks = interval_checks(&samples(), &mine, DatasetKind::Mine, &HoleId::new("PE-1"))
        .expect("intervals");

    assert_eq!(checks[0].status, MatchStatus::Correct);
    assert_eq!(checks[1].status, MatchStatus::Incorrect);
    assert!(checks.iter().all(|check| check.source == DatasetKind::Mine));
}

#[test]
fn ends_may_come_from_different_samples() {
    let major = intervals("PE-1", [0.0, 0.5], [3.0, 3.0]);
    let checks = interval_checks(&samples(), &major, DatasetKind::Major, &HoleId::new("PE-1"))
        .expect("intervals");
    assert_eq!(checks[0].status, MatchStatus::Correct);
    assert_eq!(checks[1].status, MatchStatus::Incorrect);
}

#[test]
fn interval_table_is_tagged_with_source() {
    let geology = intervals("PE-1", [0.0, 1.0], [1.0, 2.0]);
    let df = check_intervals(&samples(), &geology, DatasetKind::Geology, &HoleId::new("PE-1"))
        .expect("intervals");
    assert_eq!(
        column_text(&df, "archivo").expect("source"),
        vec![Some("Geology".to_string()), Some("Geology".to_string())]
    );
    assert_eq!(
        column_text(&df, "validacion").expect("status"),
        vec![Some("Correcto".to_string()), Some("Correcto".to_string())]
    );
}

#[test]
fn empty_side_names_the_dataset() {
    let mine = intervals("PE-2", [1.0, 1.0], [2.0, 5.0]);
    let err = interval_checks(&samples(), &mine, DatasetKind::Mine, &HoleId::new("PE-1")).unwrap_err();
    assert!(matches!(
        err,
        CheckError::EmptyResult {
            dataset: DatasetKind::Mine,
            ..
        }
    ));

    let err = interval_checks(&samples(), &mine, DatasetKind::Mine, &HoleId::new("PE-2")).unwrap_err();
    assert!(matches!(
        err,
        CheckError::EmptyResult {
            dataset: DatasetKind::Sample,
            ..
        }
    ));
}

#[test]
fn batch_keeps_successful_sources_and_reports_failures() {
    let geology = intervals("PE-1", [0.0, 1.0], [1.0, 2.0]);
    let mine = intervals("PE-2", [1.0, 1.0], [2.0, 5.0]);
    let broken = DataFrame::new(vec![Column::new("hole_number".into(), ["PE-1"])]).expect("df");

    let batch = check_interval_sources(
        &samples(),
        &[
            (DatasetKind::Geology, &geology),
            (DatasetKind::Mine, &mine),
            (DatasetKind::Alteration, &broken),
        ],
        &HoleId::new("PE-1"),
    );

    let frame = batch.frame.expect("geology rows");
    assert_eq!(frame.height(), 2);
    assert_eq!(batch.failures.len(), 2);
    assert!(batch.failures[0].is_warning());
    assert!(matches!(
        batch.failures[1],
        CheckError::Schema {
            dataset: DatasetKind::Alteration,
            ..
        }
    ));
}

fn lithology(units: [&str; 3]) -> DataFrame {
    DataFrame::new(vec![
        Column::new("hole_number".into(), ["PE-1", "PE-1", "PE-1"]),
        Column::new("depth_from".into(), [0.0, 4.0, 12.0]),
        Column::new("depth_to".into(), [4.0, 10.0, 15.0]),
        Column::new("unit".into(), units),
    ])
    .expect("df")
}

fn major() -> DataFrame {
    DataFrame::new(vec![
        Column::new("hole_number".into(), ["PE-1", "PE-1"]),
        Column::new("depth_from".into(), [0.0, 20.0]),
        Column::new("depth_to".into(), [10.0, 30.0]),
        Column::new("rock_type_code".into(), ["ANDS", "ANDS"]),
    ])
    .expect("df")
}

#[test]
fn contained_units_must_map_to_declared_rock_type() {
    let hole = HoleId::new("PE-1");

    let checks = rock_type_checks(&lithology(["D", "VAND", "Q"]), &major(), &hole).expect("major");
    assert_eq!(checks[0].status, RockTypeStatus::Correct);
    assert_eq!(checks[1].status, RockTypeStatus::NoContainedSegments);

    let checks = rock_type_checks(&lithology(["D", "Q", "D"]), &major(), &hole).expect("major");
    assert_eq!(checks[0].status, RockTypeStatus::Mismatch);
}

#[test]
fn unmapped_unit_never_matches() {
    let checks = rock_type_checks(&lithology(["D", "ZZZ", "D"]), &major(), &HoleId::new("PE-1"))
        .expect("major");
    assert_eq!(checks[0].status, RockTypeStatus::Mismatch);
}

#[test]
fn rock_type_table_columns() {
    let df = check_rock_types(&lithology(["D", "Q", "D"]), &major(), &HoleId::new("PE-1"))
        .expect("major");
    assert_eq!(df.height(), 2);
    assert_eq!(
        column_text(&df, "validacion").expect("status"),
        vec![
            Some("Incorrecto (rock type mismatch)".to_string()),
            Some("Incorrecto (no contained segments)".to_string()),
        ]
    );
    assert!(df.column("depth_from_major").is_ok());
    assert!(df.column("rock_type_major").is_ok());
}

#[test]
fn rock_type_absent_hole_is_a_warning() {
    let err = check_rock_types(&lithology(["D", "D", "D"]), &major(), &HoleId::new("PE-7"))
        .unwrap_err();
    assert!(matches!(
        err,
        CheckError::EmptyResult {
            dataset: DatasetKind::Geology,
            ..
        }
    ));
}
