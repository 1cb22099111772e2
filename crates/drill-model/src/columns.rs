//! Normalized column names used by the validation rules.
//!
//! Input headers are trimmed and lowercased at load time, so every name here
//! is lowercase. Output-only columns keep the names the field teams already
//! know from the exported workbooks.

pub const HOLE_NUMBER: &str = "hole_number";
pub const DEPTH_FROM: &str = "depth_from";
pub const DEPTH_TO: &str = "depth_to";

// Geology
pub const CLITO: &str = "clito";
pub const UNIT: &str = "unit";

// Sample / Standards
pub const SAMPLE_NUMBER: &str = "sample_number";
pub const SAMPLE_TYPE_CODE: &str = "assay_sample_type_code";
pub const PARENT_SAMPLE_NUMBER: &str = "parent_sample_number";
pub const STANDARD_CODE: &str = "assay_standard_code";

// Alteration
pub const INTENSITY: [&str; 3] = ["intensity_1", "intensity_2", "intensity_3"];
pub const DISTRIBUTION: [&str; 3] = ["distribution_1", "distribution_2", "distribution_3"];

// Major
pub const ROCK_TYPE_CODE: &str = "rock_type_code";

// Output columns
pub const GEOLOGY_STATUS: &str = "validacion_geo";
pub const STATUS: &str = "validacion";
pub const SAMPLE_TYPE: &str = "tipo_muestra";
pub const DEPTH_RANGE: &str = "depth_range";
pub const INTERVAL_STATUS: &str = "tramo_valido";
pub const SOURCE_FILE: &str = "archivo";
pub const DEPTH_FROM_MAJOR: &str = "depth_from_major";
pub const DEPTH_TO_MAJOR: &str = "depth_to_major";
pub const ROCK_TYPE_MAJOR: &str = "rock_type_major";
pub const TOTAL_OR: &str = "total_or";
pub const TOTAL_STANDARDS: &str = "total_standards";
pub const TOTAL_DP_RG: &str = "total_dp_rg";
pub const STANDARDS_PCT: &str = "standards_pct";

/// Normalizes a raw header: trimmed, BOM removed, lowercased.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_lowercase()
}
