//! The input side of a type scale: what the user asked for

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, SpecError};
use crate::format::MAX_DECIMAL_PLACES;
use crate::ratio::ModularRatio;
use crate::scale::check_finite_sizes;

/// Pixels per rem when the caller does not say otherwise
pub const DEFAULT_REM_VALUE_PX: f64 = 16.0;

/// Step names of a freshly opened calculator
pub const DEFAULT_STEPS: [&str; 7] = ["sm", "base", "md", "lg", "xl", "xxl", "xxxl"];

/// Name of the step anchored to the min/max font sizes by default
pub const DEFAULT_BASE_STEP: &str = "base";

/// Which CSS unit the bounds and the fixed `calc()` term are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    #[default]
    Rem,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
        }
    }

    /// Express a pixel length in this unit
    pub fn from_px(self, px: f64, rem_value_px: f64) -> f64 {
        match self {
            Self::Px => px,
            Self::Rem => px / rem_value_px,
        }
    }

    /// Express a length in this unit as pixels
    pub fn to_px(self, value: f64, rem_value_px: f64) -> f64 {
        match self {
            Self::Px => value,
            Self::Rem => value * rem_value_px,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Unit {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "px" => Ok(Self::Px),
            "rem" => Ok(Self::Rem),
            other => Err(ScaleError::UnknownUnit(other.to_string())),
        }
    }
}

/// Everything needed to compute a fluid type scale
///
/// Built once per submission and consumed by [`ScaleComputer`](crate::ScaleComputer).
/// The [`Default`] is the calculator's initial state: 16px→19px between a
/// 400px and a 1280px viewport, major third → perfect fourth, seven steps
/// around `base`, two decimals, rem output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleSpec {
    /// Base step font size at the min viewport width
    pub min_font_size_px: f64,
    /// Base step font size at the max viewport width
    pub max_font_size_px: f64,
    pub min_screen_width_px: f64,
    pub max_screen_width_px: f64,
    /// Modular ratio between adjacent steps at the min viewport width
    pub min_ratio: f64,
    /// Modular ratio between adjacent steps at the max viewport width
    pub max_ratio: f64,
    /// Ordered step names; position relative to `base_step` is the exponent
    pub steps: Vec<String>,
    pub base_step: String,
    pub rounding_decimal_places: u32,
    pub unit: Unit,
    /// Pixels per rem, only consulted for [`Unit::Rem`]
    pub rem_value_px: f64,
}

impl Default for ScaleSpec {
    fn default() -> Self {
        Self {
            min_font_size_px: 16.0,
            max_font_size_px: 19.0,
            min_screen_width_px: 400.0,
            max_screen_width_px: 1280.0,
            min_ratio: ModularRatio::MajorThird.value(),
            max_ratio: ModularRatio::PerfectFourth.value(),
            steps: DEFAULT_STEPS.iter().map(|s| s.to_string()).collect(),
            base_step: DEFAULT_BASE_STEP.to_string(),
            rounding_decimal_places: 2,
            unit: Unit::Rem,
            rem_value_px: DEFAULT_REM_VALUE_PX,
        }
    }
}

impl ScaleSpec {
    /// Replace the step list, keeping everything else
    pub fn with_steps<I, S>(mut self, steps: I, base_step: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self.base_step = base_step.into();
        self
    }

    /// Check the structural invariants and locate the base step
    ///
    /// Returns the index of `base_step` within `steps`.
    pub fn validate(&self) -> Result<usize, SpecError> {
        positive("minFontSizePx", self.min_font_size_px)?;
        positive("maxFontSizePx", self.max_font_size_px)?;
        positive("minScreenWidthPx", self.min_screen_width_px)?;
        positive("maxScreenWidthPx", self.max_screen_width_px)?;
        positive("remValuePx", self.rem_value_px)?;

        if self.max_screen_width_px <= self.min_screen_width_px {
            return Err(SpecError::InvalidScreenRange {
                min: self.min_screen_width_px,
                max: self.max_screen_width_px,
            });
        }

        ratio("minRatio", self.min_ratio)?;
        ratio("maxRatio", self.max_ratio)?;

        if self.rounding_decimal_places > MAX_DECIMAL_PLACES {
            return Err(SpecError::PrecisionTooLarge(self.rounding_decimal_places));
        }

        if self.steps.is_empty() {
            return Err(SpecError::EmptySteps);
        }

        let mut seen = HashSet::with_capacity(self.steps.len());
        for step in &self.steps {
            if !seen.insert(step.as_str()) {
                return Err(SpecError::DuplicateStep(step.clone()));
            }
        }

        let base_index = self
            .steps
            .iter()
            .position(|step| *step == self.base_step)
            .ok_or_else(|| SpecError::BaseStepMissing(self.base_step.clone()))?;

        check_finite_sizes(self, base_index)?;
        Ok(base_index)
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), SpecError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SpecError::NonPositive { name, value })
    }
}

fn ratio(name: &'static str, value: f64) -> Result<(), SpecError> {
    if value.is_finite() && value > 1.0 {
        Ok(())
    } else {
        Err(SpecError::InvalidRatio { name, value })
    }
}
