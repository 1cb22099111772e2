//! Column extraction and hole filtering over loaded frames.

use drill_model::HoleId;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray, PolarsResult};

use crate::values::{any_to_f64, any_to_string, any_to_string_non_empty};

/// Trimmed text of every cell in a column; null and blank cells are None.
pub fn column_text(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string_non_empty(column.get(idx)?));
    }
    Ok(values)
}

/// Numeric value of every cell in a column; unparseable cells are None.
pub fn column_f64(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_f64(column.get(idx)?));
    }
    Ok(values)
}

/// Keeps the rows whose `column` refers to `hole`.
pub fn filter_by_hole(df: &DataFrame, column: &str, hole: &HoleId) -> PolarsResult<DataFrame> {
    let series = df.column(column)?;
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        keep.push(hole.matches(&any_to_string(value)));
    }
    let mask = BooleanChunked::from_slice("hole_filter".into(), &keep);
    df.filter(&mask)
}
