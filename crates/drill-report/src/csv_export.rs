//! CSV export of rule result tables.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use drill_ingest::any_to_string;
use drill_model::{HoleId, RuleKind};
use polars::prelude::DataFrame;

use crate::error::{ReportError, Result};

/// Export header names: the frame's column names uppercased.
pub fn export_headers(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_uppercase())
        .collect()
}

/// `<rule>_<hole>.csv`
pub fn output_file_name(rule: RuleKind, hole: &HoleId) -> String {
    format!("{}_{}.csv", rule.file_stem(), hole.file_stem())
}

/// Writes `df` as CSV; nulls become empty fields.
pub fn write_csv_to<W: Write>(writer: W, df: &DataFrame) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(export_headers(df))?;

    let columns = df.get_columns();
    let mut record = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        for column in columns {
            record.push(any_to_string(column.get(idx)?));
        }
        out.write_record(&record)?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes a rule's result table into `output_dir`, creating the directory
/// if needed, and returns the written path.
pub fn write_rule_csv(
    output_dir: &Path,
    rule: RuleKind,
    hole: &HoleId,
    df: &DataFrame,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(output_file_name(rule, hole));
    let file = File::create(&path).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    write_csv_to(BufWriter::new(file), df)?;
    tracing::info!(path = %path.display(), rows = df.height(), rule = %rule, "wrote result table");
    Ok(path)
}
