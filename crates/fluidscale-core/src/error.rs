//! Error types for fluidscale

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScaleError>;

/// Main error type for fluidscale
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("Invalid scale spec: {0}")]
    InvalidSpec(#[from] SpecError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Unknown modular ratio: {0}")]
    UnknownRatio(String),

    #[error("Unknown unit: {0} (expected px or rem)")]
    UnknownUnit(String),
}

/// Structural problems with a [`ScaleSpec`](crate::ScaleSpec)
///
/// Any of these aborts the whole computation; no partial scale is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("Type scale needs at least one step")]
    EmptySteps,

    #[error("Duplicate step name: {0}")]
    DuplicateStep(String),

    #[error("Base step '{0}' is not one of the type scale steps")]
    BaseStepMissing(String),

    #[error("Max screen width ({max}px) must be greater than min screen width ({min}px)")]
    InvalidScreenRange { min: f64, max: f64 },

    #[error("{name} must be greater than 1, got {value}")]
    InvalidRatio { name: &'static str, value: f64 },

    #[error("{name} must be a positive, finite number, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Rounding precision of {0} decimal places exceeds the maximum of {max}", max = crate::format::MAX_DECIMAL_PLACES)]
    PrecisionTooLarge(u32),

    #[error("Step '{0}' is too large to represent as a finite font size")]
    NonFiniteSize(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Invalid naming convention: {0}")]
    InvalidNamingConvention(String),
}
