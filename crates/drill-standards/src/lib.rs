//! Reference tables for drill-hole validation.
//!
//! All tables are immutable and built once per process.

pub mod alteration;
pub mod lithology;
pub mod qc;

pub use alteration::{DistributionRule, IntensityRule, intensity_rule};
pub use lithology::{
    SHADOWED_CORRESPONDENCES, allowed_units, is_valid_lithology, lithology_codes,
    rock_type_correspondences, rock_type_for_unit,
};
pub use qc::{QC_SAMPLE_TYPES, is_duplicate_or_reject_type};
