//! Subcommand implementations

pub mod batch;
pub mod calculate;
pub mod preview;
pub mod ratios;

use anyhow::{bail, Context, Result};

use fluidscale_core::parse_ratio;
use fluidscale_export::css::is_valid_naming_convention;
use fluidscale_input::{
    schema::{self, keys, Value},
    CalculatorRequest,
};

use crate::cli::ScaleArgs;

/// Merge `--query`, then individual flags, into a validated request
pub fn resolve_request(args: &ScaleArgs) -> Result<CalculatorRequest> {
    let mut request = match &args.query {
        Some(query) => CalculatorRequest::from_query(query).context("Invalid --query")?,
        None => CalculatorRequest::default(),
    };
    let spec = &mut request.spec;

    if let Some(size) = args.min_font_size {
        spec.min_font_size_px = size;
    }
    if let Some(size) = args.max_font_size {
        spec.max_font_size_px = size;
    }
    if let Some(width) = args.min_width {
        spec.min_screen_width_px = width;
    }
    if let Some(width) = args.max_width {
        spec.max_screen_width_px = width;
    }
    if let Some(ratio) = &args.min_ratio {
        spec.min_ratio = parse_ratio(ratio).context("Invalid --min-ratio")?;
    }
    if let Some(ratio) = &args.max_ratio {
        spec.max_ratio = parse_ratio(ratio).context("Invalid --max-ratio")?;
    }
    if let Some(steps) = &args.steps {
        if let Value::List(steps) =
            schema::parse_step_list(keys::STEPS, Some(steps)).context("Invalid --steps")?
        {
            spec.steps = steps;
        }
    }
    if let Some(base_step) = &args.base_step {
        spec.base_step = base_step.clone();
    }
    if let Some(decimals) = args.decimals {
        spec.rounding_decimal_places = decimals;
    }
    if let Some(unit) = args.unit {
        spec.unit = unit.into();
    }
    if let Some(rem_value) = args.rem_value {
        spec.rem_value_px = rem_value;
    }
    if let Some(prefix) = &args.prefix {
        request.naming_convention = prefix.clone();
    }
    if args.fallbacks {
        request.include_fallbacks = true;
    }

    if !is_valid_naming_convention(&request.naming_convention) {
        bail!(
            "Invalid --prefix '{}': use letters, digits, '-' or '_'",
            request.naming_convention
        );
    }
    request.spec.validate().context("Invalid type scale")?;

    log::debug!("Resolved request: {}", request.to_query_string());
    Ok(request)
}
