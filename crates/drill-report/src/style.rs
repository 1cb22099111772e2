//! Display palette for result tables.
//!
//! Colors are kept as hex strings so renderers can map them onto whatever
//! color type they use.

/// Header row fill; headers are also bold.
pub const HEADER_FILL: &str = "FFC000";

/// Column whose values select a category fill.
pub const CATEGORY_COLUMN: &str = "TIPO_MUESTRA";

const CATEGORY_FILLS: &[(&str, &str)] = &[
    ("PECLSTD006", "F7F99F"),
    ("PECLSTD007", "3785BF"),
    ("RG", "F0DEF2"),
    ("DP", "B5E6A2"),
];

/// Fill for a sample type or standard code in [`CATEGORY_COLUMN`].
pub fn category_fill(value: &str) -> Option<&'static str> {
    let value = value.trim();
    CATEGORY_FILLS
        .iter()
        .find(|(category, _)| *category == value)
        .map(|(_, fill)| *fill)
}

/// Parses a six-digit hex color.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
