//! Named modular ratios borrowed from musical intervals

use std::fmt;
use std::str::FromStr;

use crate::error::ScaleError;

/// The classic type scale ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModularRatio {
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    AugmentedFourth,
    PerfectFifth,
    GoldenRatio,
}

impl ModularRatio {
    /// Every named ratio, smallest first
    pub const ALL: [ModularRatio; 8] = [
        Self::MinorSecond,
        Self::MajorSecond,
        Self::MinorThird,
        Self::MajorThird,
        Self::PerfectFourth,
        Self::AugmentedFourth,
        Self::PerfectFifth,
        Self::GoldenRatio,
    ];

    pub const fn value(self) -> f64 {
        match self {
            Self::MinorSecond => 1.067,
            Self::MajorSecond => 1.125,
            Self::MinorThird => 1.2,
            Self::MajorThird => 1.25,
            Self::PerfectFourth => 1.333,
            Self::AugmentedFourth => 1.414,
            Self::PerfectFifth => 1.5,
            Self::GoldenRatio => 1.618,
        }
    }

    /// Human-readable name, e.g. "Perfect fourth"
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinorSecond => "Minor second",
            Self::MajorSecond => "Major second",
            Self::MinorThird => "Minor third",
            Self::MajorThird => "Major third",
            Self::PerfectFourth => "Perfect fourth",
            Self::AugmentedFourth => "Augmented fourth",
            Self::PerfectFifth => "Perfect fifth",
            Self::GoldenRatio => "Golden ratio",
        }
    }

    /// Identifier accepted on the command line and in query strings
    pub const fn id(self) -> &'static str {
        match self {
            Self::MinorSecond => "minor-second",
            Self::MajorSecond => "major-second",
            Self::MinorThird => "minor-third",
            Self::MajorThird => "major-third",
            Self::PerfectFourth => "perfect-fourth",
            Self::AugmentedFourth => "augmented-fourth",
            Self::PerfectFifth => "perfect-fifth",
            Self::GoldenRatio => "golden-ratio",
        }
    }
}

impl fmt::Display for ModularRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

impl FromStr for ModularRatio {
    type Err = ScaleError;

    /// Accepts the kebab-case id; camelCase and underscores are tolerated
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.id().replace('-', "") == wanted)
            .ok_or_else(|| ScaleError::UnknownRatio(s.to_string()))
    }
}

/// Read a ratio given either as a number (`1.333`) or by name (`perfect-fourth`)
pub fn parse_ratio(text: &str) -> Result<f64, ScaleError> {
    match text.trim().parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => text.parse::<ModularRatio>().map(ModularRatio::value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_are_sorted_and_above_one() {
        let values: Vec<f64> = ModularRatio::ALL.iter().map(|r| r.value()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(values.iter().all(|v| *v > 1.0));
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!(
            "perfect-fourth".parse::<ModularRatio>().unwrap(),
            ModularRatio::PerfectFourth
        );
        assert_eq!(
            "goldenRatio".parse::<ModularRatio>().unwrap(),
            ModularRatio::GoldenRatio
        );
        assert_eq!(
            "MAJOR_THIRD".parse::<ModularRatio>().unwrap(),
            ModularRatio::MajorThird
        );
        assert!("tritone".parse::<ModularRatio>().is_err());
    }

    #[test]
    fn test_parse_ratio_accepts_numbers_and_names() {
        assert_eq!(parse_ratio("1.2").unwrap(), 1.2);
        assert_eq!(parse_ratio(" perfect-fifth ").unwrap(), 1.5);
        assert!(matches!(
            parse_ratio("huge"),
            Err(ScaleError::UnknownRatio(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ModularRatio::MajorThird.to_string(),
            "Major third (1.25)"
        );
    }
}
