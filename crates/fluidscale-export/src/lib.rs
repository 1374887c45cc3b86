//! Export formats for fluid type scales
//!
//! Two ways out of the pipeline:
//!
//! - [`CssExporter`] - custom property declarations, optionally wrapped in
//!   `@supports` blocks with static fallbacks
//! - [`JsonExporter`] - every step's strings and numeric bounds

pub mod css;
pub mod json;

pub use css::{CssExporter, DEFAULT_NAMING_CONVENTION};
pub use json::{JsonExporter, ScaleDocument, StepDocument};

use fluidscale_core::traits::Exporter;

/// Output formats known to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Css,
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
        }
    }
}

/// Pick an exporter for `format`
///
/// `css` carries the naming and fallback choices; JSON ignores them.
pub fn exporter_for(format: Format, css: CssExporter, pretty: bool) -> Box<dyn Exporter> {
    match format {
        Format::Css => Box::new(css),
        Format::Json if pretty => Box::new(JsonExporter::with_pretty_print()),
        Format::Json => Box::new(JsonExporter::new()),
    }
}
