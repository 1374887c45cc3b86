//! Calculator requests from shareable query strings
//!
//! A scale can be described by a URL query such as
//! `?minFontSize=16&maxFontSize=19&steps=sm,base,md&baseStep=base&useRems=on`.
//! This crate decodes such queries against a fixed [`schema`], validates
//! each field, and produces a [`CalculatorRequest`] ready for computation.
//!
//! ```
//! use fluidscale_input::CalculatorRequest;
//!
//! let request = CalculatorRequest::from_query("?minRatio=major-second&decimals=3").unwrap();
//! assert_eq!(request.spec.min_ratio, 1.125);
//! assert_eq!(request.spec.rounding_decimal_places, 3);
//! ```

pub mod error;
pub mod schema;

pub use error::{InputError, Result};

use std::collections::HashMap;

use fluidscale_core::{ScaleSpec, TypeScale, Unit};
use fluidscale_export::{CssExporter, DEFAULT_NAMING_CONVENTION};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use schema::{keys, ParsedQuery, FIELDS};

/// Everything the calculator needs: the scale plus CSS output choices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorRequest {
    pub spec: ScaleSpec,
    pub naming_convention: String,
    pub include_fallbacks: bool,
}

impl Default for CalculatorRequest {
    fn default() -> Self {
        Self {
            spec: ScaleSpec::default(),
            naming_convention: DEFAULT_NAMING_CONVENTION.to_string(),
            include_fallbacks: false,
        }
    }
}

impl CalculatorRequest {
    /// Decode and validate a query string
    ///
    /// A leading `?` is optional. Repeated keys keep their last value and
    /// unknown keys are ignored. A query that names none of the schema keys
    /// is a fresh visit and yields [`CalculatorRequest::default`].
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        if !FIELDS.iter().any(|field| pairs.contains_key(field.key)) {
            log::debug!("Query names no known fields, using defaults");
            return Ok(Self::default());
        }

        let parsed = ParsedQuery::from_pairs(&pairs)?;
        Self::from_parsed(&parsed)
    }

    fn from_parsed(parsed: &ParsedQuery) -> Result<Self> {
        let steps = parsed.list(keys::STEPS)?;
        let base_step = parsed.text(keys::BASE_STEP)?;
        if !steps.contains(&base_step) {
            return Err(InputError::BaseStepNotInSteps {
                key: keys::BASE_STEP,
                value: base_step,
            });
        }

        let unit = if parsed.flag(keys::USE_REMS)? {
            Unit::Rem
        } else {
            Unit::Px
        };

        let spec = ScaleSpec {
            min_font_size_px: parsed.number(keys::MIN_FONT_SIZE)?,
            max_font_size_px: parsed.number(keys::MAX_FONT_SIZE)?,
            min_screen_width_px: parsed.number(keys::MIN_WIDTH)?,
            max_screen_width_px: parsed.number(keys::MAX_WIDTH)?,
            min_ratio: parsed.number(keys::MIN_RATIO)?,
            max_ratio: parsed.number(keys::MAX_RATIO)?,
            steps,
            base_step,
            rounding_decimal_places: parsed.integer(keys::DECIMALS)?,
            unit,
            rem_value_px: parsed.number(keys::REM_VALUE)?,
        };
        spec.validate()?;

        Ok(Self {
            spec,
            naming_convention: parsed.text(keys::NAMING_CONVENTION)?,
            include_fallbacks: parsed.flag(keys::INCLUDE_FALLBACKS)?,
        })
    }

    /// Encode as a query string (without the leading `?`)
    ///
    /// Checkboxes are written as `on` when set and omitted otherwise, the
    /// way an HTML form submits them.
    pub fn to_query_string(&self) -> String {
        let spec = &self.spec;
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair(keys::MIN_FONT_SIZE, &spec.min_font_size_px.to_string())
            .append_pair(keys::MAX_FONT_SIZE, &spec.max_font_size_px.to_string())
            .append_pair(keys::MIN_WIDTH, &spec.min_screen_width_px.to_string())
            .append_pair(keys::MAX_WIDTH, &spec.max_screen_width_px.to_string())
            .append_pair(keys::MIN_RATIO, &spec.min_ratio.to_string())
            .append_pair(keys::MAX_RATIO, &spec.max_ratio.to_string())
            .append_pair(keys::STEPS, &spec.steps.join(","))
            .append_pair(keys::BASE_STEP, &spec.base_step)
            .append_pair(keys::NAMING_CONVENTION, &self.naming_convention)
            .append_pair(keys::DECIMALS, &spec.rounding_decimal_places.to_string())
            .append_pair(keys::REM_VALUE, &spec.rem_value_px.to_string());
        if spec.unit == Unit::Rem {
            query.append_pair(keys::USE_REMS, "on");
        }
        if self.include_fallbacks {
            query.append_pair(keys::INCLUDE_FALLBACKS, "on");
        }
        query.finish()
    }

    pub fn compute(&self) -> fluidscale_core::Result<TypeScale> {
        fluidscale_core::compute(&self.spec)
    }

    /// A CSS exporter configured with this request's prefix and fallbacks
    pub fn css_exporter(&self) -> fluidscale_core::Result<CssExporter> {
        Ok(CssExporter::new(self.naming_convention.as_str())?.with_fallbacks(self.include_fallbacks))
    }

    /// Compute the scale and render it as CSS
    pub fn to_css(&self) -> fluidscale_core::Result<String> {
        let scale = self.compute()?;
        Ok(self.css_exporter()?.to_css(&scale))
    }
}
