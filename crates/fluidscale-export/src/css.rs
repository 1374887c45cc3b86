//! CSS custom property export
//!
//! Writes one `--<prefix>-<step>: clamp(...);` declaration per step. With
//! fallbacks enabled the declarations are wrapped in feature queries, and
//! engines without `clamp()` get the static min sizes, switching to the max
//! sizes past the max screen width.

use fluidscale_core::{
    error::{ExportError, Result},
    traits::Exporter,
    TypeScale,
};

/// Prefix used when the caller does not pick one
pub const DEFAULT_NAMING_CONVENTION: &str = "font-size";

const SUPPORTS_CLAMP: &str = "(font-size: clamp(1rem, 1vw, 1rem))";

/// Whether `prefix` can sit between `--` and `-<step>` in a custom property
pub fn is_valid_naming_convention(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// `--<prefix>-<step>`
pub fn custom_property_name(prefix: &str, step: &str) -> String {
    format!("--{prefix}-{step}")
}

/// The fluid declarations, one per line, each indented by `indent_level` tabs
pub fn fluid_declarations(scale: &TypeScale, prefix: &str, indent_level: usize) -> String {
    declarations(scale, prefix, indent_level, |step| step.clamp())
}

/// Static declarations for engines without `clamp()`: the min sizes
pub fn min_fallback_declarations(scale: &TypeScale, prefix: &str, indent_level: usize) -> String {
    declarations(scale, prefix, indent_level, |step| step.min())
}

/// Static declarations for engines without `clamp()`: the max sizes
pub fn max_fallback_declarations(scale: &TypeScale, prefix: &str, indent_level: usize) -> String {
    declarations(scale, prefix, indent_level, |step| step.max())
}

fn declarations<'a, F>(scale: &'a TypeScale, prefix: &str, indent_level: usize, value: F) -> String
where
    F: Fn(&'a fluidscale_core::FluidStep) -> &'a str,
{
    let indentation = "\t".repeat(indent_level);
    scale
        .iter()
        .map(|step| {
            format!(
                "{indentation}{}: {};",
                custom_property_name(prefix, step.step()),
                value(step)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The full stylesheet with `@supports` fallbacks
pub fn fallback_stylesheet(scale: &TypeScale, prefix: &str) -> String {
    let breakpoint = format_breakpoint(scale.max_screen_width_px());
    let mut css = String::new();
    css.push_str("/* Fluid font size variables, for browsers that support clamp */\n");
    css.push_str(&format!("@supports {SUPPORTS_CLAMP} {{\n"));
    css.push_str("\t:root {\n");
    css.push_str(&fluid_declarations(scale, prefix, 2));
    css.push_str("\n\t}\n}\n");
    css.push_str("/* Fallback variables for browsers that don't support clamp */\n");
    css.push_str(&format!("@supports not {SUPPORTS_CLAMP} {{\n"));
    css.push_str("\t:root {\n");
    css.push_str(&min_fallback_declarations(scale, prefix, 2));
    css.push_str("\n\t}\n");
    css.push_str(&format!(
        "\t@media screen and (min-width: {breakpoint}px) {{\n"
    ));
    css.push_str("\t\t:root {\n");
    css.push_str(&max_fallback_declarations(scale, prefix, 3));
    css.push_str("\n\t\t}\n\t}\n}");
    css
}

/// Whole pixel widths print without a decimal point
fn format_breakpoint(width_px: f64) -> String {
    if width_px.fract() == 0.0 {
        format!("{width_px:.0}")
    } else {
        width_px.to_string()
    }
}

/// Exports a type scale as CSS custom properties
///
/// ```ignore
/// use fluidscale_export::CssExporter;
///
/// let exporter = CssExporter::new("font-size")?.with_fallbacks(true);
/// let css = exporter.to_css(&scale);
/// ```
#[derive(Debug, Clone)]
pub struct CssExporter {
    naming_convention: String,
    include_fallbacks: bool,
    indent_level: usize,
}

impl CssExporter {
    pub fn new(naming_convention: impl Into<String>) -> Result<Self> {
        let naming_convention = naming_convention.into();
        if !is_valid_naming_convention(&naming_convention) {
            return Err(ExportError::InvalidNamingConvention(naming_convention).into());
        }
        Ok(Self {
            naming_convention,
            include_fallbacks: false,
            indent_level: 0,
        })
    }

    /// Wrap the output in `@supports` blocks with static fallbacks
    pub fn with_fallbacks(mut self, include_fallbacks: bool) -> Self {
        self.include_fallbacks = include_fallbacks;
        self
    }

    /// Indent plain declarations for pasting inside an existing rule
    ///
    /// Ignored when fallbacks are on; that layout has fixed nesting.
    pub fn with_indent(mut self, indent_level: usize) -> Self {
        self.indent_level = indent_level;
        self
    }

    pub fn to_css(&self, scale: &TypeScale) -> String {
        if self.include_fallbacks {
            fallback_stylesheet(scale, &self.naming_convention)
        } else {
            fluid_declarations(scale, &self.naming_convention, self.indent_level)
        }
    }
}

impl Default for CssExporter {
    fn default() -> Self {
        Self {
            naming_convention: DEFAULT_NAMING_CONVENTION.to_string(),
            include_fallbacks: false,
            indent_level: 0,
        }
    }
}

impl Exporter for CssExporter {
    fn name(&self) -> &'static str {
        "css"
    }

    fn export(&self, scale: &TypeScale) -> Result<Vec<u8>> {
        log::debug!(
            "Exporting {} steps as CSS (prefix '{}', fallbacks: {})",
            scale.len(),
            self.naming_convention,
            self.include_fallbacks
        );
        let mut css = self.to_css(scale);
        css.push('\n');
        Ok(css.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "css"
    }

    fn mime_type(&self) -> &'static str {
        "text/css"
    }
}
