use std::collections::HashMap;

use crate::columns::normalize_column_name;

/// Resolves normalized column names to the names actually present in a frame.
///
/// Loaded frames are already normalized, but frames assembled elsewhere may
/// carry `HOLE_NUMBER` or ` Depth_From `; rules look columns up through this
/// map so they never depend on input formatting.
#[derive(Debug, Clone, Default)]
pub struct ColumnLookup {
    map: HashMap<String, String>,
}

impl ColumnLookup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            map.entry(normalize_column_name(name))
                .or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map
            .get(&normalize_column_name(name))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&normalize_column_name(name))
    }

    /// Returns the requested names that are absent, in request order.
    pub fn missing<'a>(&self, names: &[&'a str]) -> Vec<&'a str> {
        names
            .iter()
            .copied()
            .filter(|name| !self.contains(name))
            .collect()
    }
}
