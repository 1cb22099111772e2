//! Intensity/distribution compatibility for alteration logging.

/// What distribution an intensity code allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionRule {
    /// Distribution must be one of the listed codes.
    OneOf(&'static [&'static str]),
    /// Distribution must be left blank.
    Blank,
}

impl DistributionRule {
    pub fn allows(self, distribution: Option<&str>) -> bool {
        match self {
            Self::OneOf(codes) => distribution.is_some_and(|value| codes.contains(&value)),
            Self::Blank => distribution.is_none(),
        }
    }

    /// Human wording of the expected value, as logged in violation messages.
    pub fn expectation(self) -> String {
        match self {
            Self::OneOf(codes) => codes.join(" o "),
            Self::Blank => "vacío".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityRule {
    pub intensity: &'static str,
    pub distribution: DistributionRule,
}

const INTENSITY_RULES: &[IntensityRule] = &[
    IntensityRule {
        intensity: "FORT",
        distribution: DistributionRule::OneOf(&["PERV"]),
    },
    IntensityRule {
        intensity: "MODE",
        distribution: DistributionRule::Blank,
    },
    IntensityRule {
        intensity: "FRCA",
        distribution: DistributionRule::OneOf(&["PUNT", "VEIN"]),
    },
];

/// Rule for an intensity code; intensities without a rule accept any distribution.
pub fn intensity_rule(intensity: &str) -> Option<&'static IntensityRule> {
    INTENSITY_RULES
        .iter()
        .find(|rule| rule.intensity == intensity)
}
