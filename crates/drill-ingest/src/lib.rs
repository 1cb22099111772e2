//! Drill-hole data ingestion utilities.
//!
//! This crate turns delimited text extracts into Polars DataFrames that the
//! validation rules can consume.
//!
//! # Features
//!
//! - **Encoding detection**: UTF-8 preferred, UTF-16 (LE/BE) as fallback
//! - **Header normalization**: names trimmed and lowercased once, at load
//! - **Lenient rows**: overlong rows are skipped, short rows padded with nulls
//! - **Hole filtering**: select the rows of one drill hole by text match
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use drill_ingest::{filter_by_hole, read_csv_table};
//! use drill_model::HoleId;
//!
//! let loaded = read_csv_table(Path::new("data/geology.csv"))?;
//! let hole = filter_by_hole(&loaded.frame, "hole_number", &HoleId::new("PE-101"))?;
//! ```

mod csv;
mod error;
mod frame;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{LoadedCsv, TextEncoding, decode_text, read_csv_str, read_csv_table};

// === Frame Access ===
pub use frame::{column_f64, column_text, filter_by_hole};

// === Value Conversion ===
pub use values::{
    any_to_f64, any_to_string, any_to_string_non_empty, format_numeric, is_null_token, parse_f64,
};
