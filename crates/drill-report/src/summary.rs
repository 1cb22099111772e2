use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use drill_model::RunReport;

use crate::error::{ReportError, Result};

pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// Writes the run report as pretty-printed JSON.
pub fn write_json_summary(path: &Path, report: &RunReport) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    Ok(())
}
