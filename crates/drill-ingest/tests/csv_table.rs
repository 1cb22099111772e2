//! Integration tests for CSV loading and hole filtering.

use std::io::Write;
use std::path::Path;

use drill_ingest::{
    IngestError, TextEncoding, column_f64, column_text, filter_by_hole, read_csv_str,
    read_csv_table,
};
use drill_model::{DatasetKind, HoleId};
use polars::prelude::DataType;
use tempfile::NamedTempFile;

fn temp_csv(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(bytes).expect("write csv");
    file
}

#[test]
fn headers_are_normalized() {
    let file = temp_csv(b" HOLE_NUMBER , Depth_From ,UNIT\nPE-1,0,D\n");
    let loaded = read_csv_table(file.path()).expect("read csv");
    let names: Vec<String> = loaded
        .frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, vec!["hole_number", "depth_from", "unit"]);
}

#[test]
fn numeric_columns_are_inferred() {
    let file = temp_csv(b"hole_number,sample_number,depth_from,unit\nPE-1,101,0.5,D\nPE-1,102,,D1\n");
    let loaded = read_csv_table(file.path()).expect("read csv");
    let frame = &loaded.frame;
    assert_eq!(frame.column("hole_number").unwrap().dtype(), &DataType::String);
    assert_eq!(frame.column("sample_number").unwrap().dtype(), &DataType::Int64);
    assert_eq!(frame.column("depth_from").unwrap().dtype(), &DataType::Float64);
    assert_eq!(
        column_f64(frame, "depth_from").unwrap(),
        vec![Some(0.5), None]
    );
    assert_eq!(
        column_text(frame, "sample_number").unwrap(),
        vec![Some("101".to_string()), Some("102".to_string())]
    );
}

#[test]
fn long_integer_ids_keep_every_digit() {
    let file = temp_csv(
        b"hole_number,sample_number\n12345678901234567,12345678901234567\n12345678901234567,12345678901234568\n",
    );
    let loaded = read_csv_table(file.path()).expect("read csv");
    let frame = &loaded.frame;
    assert_eq!(frame.column("sample_number").unwrap().dtype(), &DataType::Int64);
    assert_eq!(
        column_text(frame, "sample_number").unwrap(),
        vec![
            Some("12345678901234567".to_string()),
            Some("12345678901234568".to_string())
        ]
    );
    let hole = HoleId::new("12345678901234567");
    assert_eq!(filter_by_hole(frame, "hole_number", &hole).unwrap().height(), 2);
}

#[test]
fn integers_beyond_i64_stay_text() {
    let file = temp_csv(b"hole_number,sample_number\nPE-1,123456789012345678901\n");
    let loaded = read_csv_table(file.path()).expect("read csv");
    assert_eq!(
        loaded.frame.column("sample_number").unwrap().dtype(),
        &DataType::String
    );
}

#[test]
fn zero_padded_codes_stay_text() {
    let file = temp_csv(b"hole_number,unit\n0012,D\n0013,D\n");
    let loaded = read_csv_table(file.path()).expect("read csv");
    assert_eq!(
        column_text(&loaded.frame, "hole_number").unwrap(),
        vec![Some("0012".to_string()), Some("0013".to_string())]
    );
}

#[test]
fn overlong_rows_are_skipped_and_short_rows_padded() {
    let file = temp_csv(b"hole_number,clito,unit\nPE-1,3,D\nPE-1,3,D,extra\nPE-2,3\n");
    let loaded = read_csv_table(file.path()).expect("read csv");
    assert_eq!(loaded.skipped_rows, 1);
    assert_eq!(loaded.frame.height(), 2);
    assert_eq!(
        column_text(&loaded.frame, "unit").unwrap(),
        vec![Some("D".to_string()), None]
    );
}

#[test]
fn null_tokens_load_as_null() {
    let file = temp_csv(b"hole_number,distribution_1\nPE-1,NaN\nPE-1,\nPE-1,PERV\n");
    let loaded = read_csv_table(file.path()).expect("read csv");
    assert_eq!(
        column_text(&loaded.frame, "distribution_1").unwrap(),
        vec![None, None, Some("PERV".to_string())]
    );
}

#[test]
fn utf16_files_are_decoded() {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "hole_number,unit\nPE-1,VAND\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let file = temp_csv(&bytes);
    let loaded = read_csv_table(file.path()).expect("read csv");
    assert_eq!(loaded.encoding, TextEncoding::Utf16Le);
    assert_eq!(
        column_text(&loaded.frame, "unit").unwrap(),
        vec![Some("VAND".to_string())]
    );
}

#[test]
fn header_only_file_is_empty() {
    let file = temp_csv(b"hole_number,unit\n");
    let result = read_csv_table(file.path());
    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}

#[test]
fn blank_file_has_no_header() {
    let file = temp_csv(b"\n\n");
    let result = read_csv_table(file.path());
    assert!(matches!(result, Err(IngestError::CsvParse { .. })));
}

#[test]
fn missing_file_is_reported() {
    let result = read_csv_table(std::path::Path::new("/nonexistent/geology.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn filter_matches_numeric_hole_numbers() {
    let file = temp_csv(b"hole_number,unit\n101,D\n102,Q\n101,VD\n");
    let loaded = read_csv_table(file.path()).expect("read csv");
    let filtered = filter_by_hole(&loaded.frame, "hole_number", &HoleId::new("101")).unwrap();
    assert_eq!(filtered.height(), 2);
    assert_eq!(
        column_text(&filtered, "unit").unwrap(),
        vec![Some("D".to_string()), Some("VD".to_string())]
    );

    let none = filter_by_hole(&loaded.frame, "hole_number", &HoleId::new("999")).unwrap();
    assert_eq!(none.height(), 0);
}

#[test]
fn parses_in_memory_text() {
    let loaded =
        read_csv_str("hole_number,unit\nPE-1,D\nPE-1,Q\n", Path::new("inline")).expect("parse");
    assert_eq!(loaded.encoding, TextEncoding::Utf8);
    assert_eq!(
        column_text(&loaded.frame, "unit").expect("unit"),
        vec![Some("D".to_string()), Some("Q".to_string())]
    );

    let err = read_csv_str("hole_number\n", Path::new("inline")).unwrap_err();
    assert!(matches!(
        err.into_check_error(DatasetKind::Mine),
        drill_model::CheckError::EmptyDataset {
            dataset: DatasetKind::Mine
        }
    ));
}
