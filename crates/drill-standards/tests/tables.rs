//! Tests for the static reference tables.

use drill_standards::{
    DistributionRule, SHADOWED_CORRESPONDENCES, allowed_units, intensity_rule,
    is_duplicate_or_reject_type, is_valid_lithology, lithology_codes, rock_type_correspondences,
    rock_type_for_unit,
};
use proptest::prelude::*;

#[test]
fn lithology_table_has_twenty_one_codes() {
    assert_eq!(lithology_codes().count(), 21);
}

#[test]
fn known_pairs_are_valid() {
    assert!(is_valid_lithology(3, "D"));
    assert!(is_valid_lithology(3, "D1"));
    assert!(is_valid_lithology(32, "VRD"));
    assert!(is_valid_lithology(33, "VRD"));
    assert!(!is_valid_lithology(3, "VD"));
}

#[test]
fn unknown_code_is_never_valid() {
    assert_eq!(allowed_units(99), None);
    assert!(!is_valid_lithology(99, "D"));
}

#[test]
fn lost_maps_to_last_definition() {
    assert_eq!(rock_type_for_unit("LOST"), Some("YYYY"));
    assert_eq!(SHADOWED_CORRESPONDENCES, &[("LOST", "XXXX")]);
}

#[test]
fn correspondences_cover_every_allowed_unit() {
    for (_, units) in lithology_codes() {
        for unit in units {
            assert!(
                rock_type_for_unit(unit).is_some(),
                "unit {unit} has no rock type"
            );
        }
    }
    assert_eq!(rock_type_correspondences().count(), 21);
}

#[test]
fn unmapped_unit_has_no_rock_type() {
    assert_eq!(rock_type_for_unit("XYZ"), None);
    assert_eq!(rock_type_for_unit("d"), None);
}

#[test]
fn alteration_rules() {
    let fort = intensity_rule("FORT").expect("FORT rule");
    assert!(fort.distribution.allows(Some("PERV")));
    assert!(!fort.distribution.allows(Some("PUNT")));
    assert!(!fort.distribution.allows(None));

    let mode = intensity_rule("MODE").expect("MODE rule");
    assert_eq!(mode.distribution, DistributionRule::Blank);
    assert!(mode.distribution.allows(None));
    assert!(!mode.distribution.allows(Some("PERV")));

    let frca = intensity_rule("FRCA").expect("FRCA rule");
    assert!(frca.distribution.allows(Some("VEIN")));
    assert_eq!(frca.distribution.expectation(), "PUNT o VEIN");

    assert!(intensity_rule("DEBL").is_none());
}

#[test]
fn qc_types() {
    assert!(is_duplicate_or_reject_type("DP"));
    assert!(is_duplicate_or_reject_type(" RG "));
    assert!(!is_duplicate_or_reject_type("OR"));
}

proptest! {
    #[test]
    fn validity_is_membership(clito in 0u16..40, unit in "[A-Z]{1,4}") {
        let expected = allowed_units(clito).is_some_and(|units| units.contains(&unit.as_str()));
        prop_assert_eq!(is_valid_lithology(clito, &unit), expected);
        prop_assert_eq!(is_valid_lithology(clito, &unit), is_valid_lithology(clito, &unit));
    }
}
