//! Input validation errors

use fluidscale_core::SpecError;

/// Why a query string could not become a request
///
/// Every variant names the offending query key so callers can point at it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{key}: '{value}' is not a number")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key}: '{value}' is not a whole number")]
    InvalidInteger { key: &'static str, value: String },

    #[error("{key}: {value} is out of range ({expected})")]
    OutOfRange {
        key: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("{key}: '{value}' is not a comma-separated list of letters, digits and hyphens")]
    InvalidStepList { key: &'static str, value: String },

    #[error("{key}: '{value}' is not a valid custom property prefix")]
    InvalidNamingConvention { key: &'static str, value: String },

    #[error("{key}: '{value}' is not one of the type scale steps")]
    BaseStepNotInSteps { key: &'static str, value: String },

    #[error("{key}: no value and no default")]
    Missing { key: &'static str },

    #[error(transparent)]
    Spec(#[from] SpecError),
}

pub type Result<T> = std::result::Result<T, InputError>;
