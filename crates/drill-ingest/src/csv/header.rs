//! Header normalization.

use std::collections::HashMap;

use drill_model::columns::normalize_column_name;

/// Normalizes a header row: trimmed, lowercased, blank names filled in, and
/// repeated names suffixed (`unit`, `unit.1`) so every column stays addressable.
pub fn normalize_headers<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::new();
    for (idx, value) in raw.into_iter().enumerate() {
        let mut name = normalize_column_name(value);
        if name.is_empty() {
            name = format!("unnamed_{idx}");
        }
        let count = seen.entry(name.clone()).or_insert(0);
        let unique = if *count == 0 {
            name.clone()
        } else {
            format!("{name}.{count}")
        };
        *count += 1;
        headers.push(unique);
    }
    headers
}
