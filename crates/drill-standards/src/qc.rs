//! Quality-control sample type codes.

/// Sample types that are field duplicates or rejects rather than ore samples.
pub const QC_SAMPLE_TYPES: &[&str] = &["DP", "RG"];

/// True for DP/RG sample types, which count as standards in the QC ratio.
pub fn is_duplicate_or_reject_type(sample_type: &str) -> bool {
    QC_SAMPLE_TYPES.contains(&sample_type.trim())
}
