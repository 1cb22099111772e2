//! CSV parsing into typed DataFrames.

use std::path::Path;

use polars::prelude::{Column, DataFrame};

use crate::error::{IngestError, Result};
use crate::values::{is_null_token, parse_f64};

use super::encoding::{TextEncoding, decode_text};
use super::header::normalize_headers;

/// A dataset loaded from disk.
#[derive(Debug, Clone)]
pub struct LoadedCsv {
    pub frame: DataFrame,
    pub encoding: TextEncoding,
    /// Rows dropped because they had more fields than the header.
    pub skipped_rows: usize,
}

/// Reads a delimited text file, detecting its encoding.
pub fn read_csv_table(path: &Path) -> Result<LoadedCsv> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let (text, encoding) = decode_text(&bytes).map_err(|message| IngestError::Decode {
        path: path.to_path_buf(),
        message,
    })?;
    let (frame, skipped_rows) = parse_table(&text, path)?;
    tracing::debug!(
        path = %path.display(),
        encoding = encoding.label(),
        rows = frame.height(),
        columns = frame.width(),
        "loaded csv"
    );
    Ok(LoadedCsv {
        frame,
        encoding,
        skipped_rows,
    })
}

/// Parses already-decoded text; `source` is only used in error messages.
pub fn read_csv_str(text: &str, source: &Path) -> Result<LoadedCsv> {
    let (frame, skipped_rows) = parse_table(text, source)?;
    Ok(LoadedCsv {
        frame,
        encoding: TextEncoding::Utf8,
        skipped_rows,
    })
}

fn parse_table(text: &str, path: &Path) -> Result<(DataFrame, usize)> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut skipped = 0usize;

    for (line, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                tracing::debug!(path = %path.display(), line = line + 1, %error, "skipping unreadable row");
                skipped += 1;
                continue;
            }
        };
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let Some(names) = headers.as_ref() else {
            headers = Some(normalize_headers(record.iter()));
            continue;
        };
        if record.len() > names.len() {
            tracing::debug!(
                path = %path.display(),
                line = line + 1,
                fields = record.len(),
                expected = names.len(),
                "skipping malformed row"
            );
            skipped += 1;
            continue;
        }
        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|cell| {
                let cell = cell.trim();
                (!is_null_token(cell)).then(|| cell.to_string())
            })
            .collect();
        row.resize(names.len(), None);
        rows.push(row);
    }

    let Some(headers) = headers else {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: "no header row".to_string(),
        });
    };
    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if skipped > 0 {
        tracing::warn!(path = %path.display(), skipped, "skipped malformed rows");
    }

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<Option<String>> = rows.iter().map(|row| row[idx].clone()).collect();
            typed_column(name, values)
        })
        .collect();
    Ok((DataFrame::new(columns)?, skipped))
}

/// Builds an Int64 column when every present value is a whole number, a Float64
/// column when every present value is otherwise numeric, else String.
fn typed_column(name: &str, values: Vec<Option<String>>) -> Column {
    let present: Vec<&String> = values.iter().flatten().collect();
    if present.is_empty() {
        return Column::new(name.into(), values);
    }
    if present.iter().all(|value| parse_integer_cell(value).is_some()) {
        let parsed: Vec<Option<i64>> = values
            .iter()
            .map(|value| value.as_deref().and_then(parse_integer_cell))
            .collect();
        return Column::new(name.into(), parsed);
    }
    if present.iter().all(|value| is_numeric_cell(value)) {
        let parsed: Vec<Option<f64>> = values
            .iter()
            .map(|value| value.as_deref().and_then(parse_f64))
            .collect();
        return Column::new(name.into(), parsed);
    }
    Column::new(name.into(), values)
}

/// Plain integer cells that fit in i64; zero-padded codes are rejected.
fn parse_integer_cell(value: &str) -> Option<i64> {
    let value = value.trim();
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    value.parse::<i64>().ok()
}

/// Numeric cells, excluding zero-padded codes such as `0012` and digit runs
/// too long for i64, which would lose precision as floats.
fn is_numeric_cell(value: &str) -> bool {
    let trimmed = value.trim();
    let digits = trimmed.trim_start_matches(['-', '+']);
    let zero_padded = digits.len() > 1 && digits.starts_with('0') && !digits.starts_with("0.");
    let overlong_integer = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && trimmed.parse::<i64>().is_err();
    !zero_padded && !overlong_integer && parse_f64(value).is_some()
}
