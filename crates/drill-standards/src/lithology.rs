//! Lithology reference tables.
//!
//! - `condiciones`: rock subtype code (`clito`) to the unit codes it may carry.
//! - `correspondencias`: unit code to the coarse rock type used by Major logs.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Allowed units per rock subtype code.
const LITHOLOGY_CODES: &[(u16, &[&str])] = &[
    (31, &["VD"]),
    (3, &["D", "D1"]),
    (37, &["VAND"]),
    (2, &["VL"]),
    (28, &["VM"]),
    (6, &["SPP"]),
    (7, &["SOP"]),
    (9, &["SPB"]),
    (10, &["SOB"]),
    (25, &["SSL"]),
    (5, &["SSM"]),
    (34, &["BXMM"]),
    (30, &["I"]),
    (14, &["P"]),
    (8, &["BXC"]),
    (32, &["VRD"]),
    (33, &["VRD"]),
    (12, &["CO"]),
    (13, &["Q"]),
    (17, &["LOST"]),
    (15, &["F"]),
];

/// Unit to rock type, in the order the logging manual lists them.
///
/// LOST appears twice in the manual; the later entry wins and the earlier one
/// is kept in [`SHADOWED_CORRESPONDENCES`] so it is reported instead of
/// silently dropped.
const RAW_CORRESPONDENCES: &[(&str, &str)] = &[
    ("D", "ANDS"),
    ("VAND", "ANDS"),
    ("D1", "DIOR"),
    ("VL", "DACT"),
    ("VM", "DACT"),
    ("VD", "DACT"),
    ("SPP", "MASS"),
    ("SOP", "MASS"),
    ("SPB", "MASS"),
    ("SOB", "MASS"),
    ("SSL", "MASS"),
    ("SSM", "SMSS"),
    ("BXMM", "FSTF"),
    ("I", "GRDR"),
    ("P", "PEGM"),
    ("BXC", "BRTC"),
    ("VRD", "RIDC"),
    ("CO", "SOLO"),
    ("Q", "VTQZ"),
    ("LOST", "XXXX"),
    ("F", "PNZO"),
    ("LOST", "YYYY"),
];

/// Correspondences overridden by a later duplicate key (likely data-entry defects).
pub const SHADOWED_CORRESPONDENCES: &[(&str, &str)] = &[("LOST", "XXXX")];

static CONDICIONES: LazyLock<BTreeMap<u16, &'static [&'static str]>> =
    LazyLock::new(|| LITHOLOGY_CODES.iter().copied().collect());

static CORRESPONDENCIAS: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    for (unit, rock_type) in RAW_CORRESPONDENCES {
        if let Some(previous) = map.insert(*unit, *rock_type) {
            tracing::debug!(
                unit = %unit,
                shadowed = %previous,
                effective = %rock_type,
                "duplicate unit in rock type correspondences"
            );
        }
    }
    map
});

/// Units allowed for a rock subtype code, or `None` for an unknown code.
pub fn allowed_units(clito: u16) -> Option<&'static [&'static str]> {
    CONDICIONES.get(&clito).copied()
}

/// True iff `clito` is a known code and `unit` is one of its allowed units.
pub fn is_valid_lithology(clito: u16, unit: &str) -> bool {
    allowed_units(clito).is_some_and(|units| units.contains(&unit))
}

/// Rock type a unit code maps to, or `None` when the unit is unmapped.
pub fn rock_type_for_unit(unit: &str) -> Option<&'static str> {
    CORRESPONDENCIAS.get(unit).copied()
}

/// All lithology codes, ordered by code.
pub fn lithology_codes() -> impl Iterator<Item = (u16, &'static [&'static str])> {
    CONDICIONES.iter().map(|(code, units)| (*code, *units))
}

/// All effective unit to rock type correspondences, ordered by unit.
pub fn rock_type_correspondences() -> impl Iterator<Item = (&'static str, &'static str)> {
    CORRESPONDENCIAS.iter().map(|(unit, rock)| (*unit, *rock))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadowed_list_matches_raw_duplicates() {
        let mut seen = BTreeMap::new();
        let mut shadowed = Vec::new();
        for (unit, rock_type) in RAW_CORRESPONDENCES {
            if let Some(previous) = seen.insert(*unit, *rock_type) {
                shadowed.push((*unit, previous));
            }
        }
        assert_eq!(shadowed, SHADOWED_CORRESPONDENCES);
    }
}
