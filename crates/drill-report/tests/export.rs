use drill_model::{ActionOutcome, ActionReport, HoleId, RuleKind, RuleSummary, RunReport};
use drill_report::style::{CATEGORY_COLUMN, HEADER_FILL, category_fill, hex_to_rgb};
use drill_report::{
    SUMMARY_FILE_NAME, export_headers, output_file_name, write_csv_to, write_json_summary,
    write_rule_csv,
};
use polars::prelude::{Column, DataFrame};

fn merged_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("hole_number".into(), ["PE-1", "PE-1"]),
        Column::new("sample_number".into(), ["1000", "1001"]),
        Column::new("tipo_muestra".into(), ["PECLSTD006", "OR"]),
        Column::new("depth_range".into(), [None, Some(0.8)]),
        Column::new("tramo_valido".into(), [None, Some("Correcto")]),
    ])
    .expect("df")
}

#[test]
fn csv_export_uppercases_headers() {
    let mut buffer = Vec::new();
    write_csv_to(&mut buffer, &merged_frame()).expect("csv");
    let text = String::from_utf8(buffer).expect("utf8");

    insta::assert_snapshot!(text, @r"
    HOLE_NUMBER,SAMPLE_NUMBER,TIPO_MUESTRA,DEPTH_RANGE,TRAMO_VALIDO
    PE-1,1000,PECLSTD006,,
    PE-1,1001,OR,0.8,Correcto
    ");
}

#[test]
fn rule_csv_lands_in_output_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_dir = dir.path().join("out");
    let hole = HoleId::new("PE 1/A");

    let path = write_rule_csv(&output_dir, RuleKind::SampleStandards, &hole, &merged_frame())
        .expect("write");

    assert_eq!(path, output_dir.join("sample_standards_PE_1_A.csv"));
    let written = std::fs::read_to_string(&path).expect("read");
    assert!(written.starts_with("HOLE_NUMBER,"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn file_names_follow_rule_stems() {
    let hole = HoleId::new("PE-1");
    assert_eq!(output_file_name(RuleKind::Geology, &hole), "geology_PE-1.csv");
    assert_eq!(output_file_name(RuleKind::RockType, &hole), "major_PE-1.csv");
    assert_eq!(
        output_file_name(RuleKind::StandardsRatio, &hole),
        "standards_ratio_PE-1.csv"
    );
}

#[test]
fn palette() {
    assert_eq!(HEADER_FILL, "FFC000");
    assert!(export_headers(&merged_frame()).contains(&CATEGORY_COLUMN.to_string()));
    assert_eq!(category_fill("PECLSTD006"), Some("F7F99F"));
    assert_eq!(category_fill("PECLSTD007"), Some("3785BF"));
    assert_eq!(category_fill(" RG "), Some("F0DEF2"));
    assert_eq!(category_fill("DP"), Some("B5E6A2"));
    assert_eq!(category_fill("OR"), None);
    assert_eq!(hex_to_rgb("FFC000"), Some((255, 192, 0)));
    assert_eq!(hex_to_rgb("#3785BF"), Some((0x37, 0x85, 0xBF)));
    assert_eq!(hex_to_rgb("XYZ123"), None);
    assert_eq!(hex_to_rgb("FFF"), None);
}

#[test]
fn json_summary_records_every_action() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(SUMMARY_FILE_NAME);

    let mut report = RunReport::new(HoleId::new("PE-1"));
    report.push(ActionReport {
        rule: RuleKind::Geology,
        outcome: ActionOutcome::Completed {
            summary: RuleSummary {
                rows: 3,
                passed: 2,
                flagged: 1,
            },
        },
        notes: Vec::new(),
        output: None,
    });
    report.push(ActionReport {
        rule: RuleKind::Alteration,
        outcome: ActionOutcome::Skipped {
            reason: "no Alteration data supplied".to_string(),
        },
        notes: Vec::new(),
        output: None,
    });

    write_json_summary(&path, &report).expect("summary");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");

    assert_eq!(value["hole"], "PE-1");
    let actions = value["actions"].as_array().expect("actions");
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["rule"], "geology");
    assert_eq!(actions[0]["outcome"]["outcome"], "completed");
    assert_eq!(actions[0]["outcome"]["summary"]["flagged"], 1);
    assert_eq!(actions[1]["outcome"]["outcome"], "skipped");
}
