//! Output generation for drill-hole check results.
//!
//! - **CSV**: one file per rule and hole, header row uppercased
//! - **Palette**: header highlight and `TIPO_MUESTRA` category fills used
//!   when rendering result tables
//! - **Summary**: JSON record of every action in a run

mod csv_export;
mod error;
pub mod style;
mod summary;

pub use csv_export::{export_headers, output_file_name, write_csv_to, write_rule_csv};
pub use error::{ReportError, Result};
pub use summary::{SUMMARY_FILE_NAME, write_json_summary};
