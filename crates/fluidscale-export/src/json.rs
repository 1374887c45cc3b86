//! JSON export format
//!
//! Emits every step's strings and numeric bounds so other tools can consume
//! a scale without parsing CSS.

use serde::{Deserialize, Serialize};
use fluidscale_core::{
    error::{ExportError, Result},
    traits::Exporter,
    TypeScale, Unit,
};

/// JSON exporter for computed type scales
///
/// # Examples
///
/// ```ignore
/// use fluidscale_export::JsonExporter;
///
/// let exporter = JsonExporter::with_pretty_print();
/// let json = exporter.export(&scale)?;
/// println!("{}", String::from_utf8_lossy(&json));
/// ```
pub struct JsonExporter {
    /// Whether to pretty-print the JSON
    pretty: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty_print() -> Self {
        Self { pretty: true }
    }

    /// The serializable view of a scale, steps in declaration order
    pub fn document(scale: &TypeScale) -> ScaleDocument {
        ScaleDocument {
            unit: scale.unit(),
            min_screen_width_px: scale.min_screen_width_px(),
            max_screen_width_px: scale.max_screen_width_px(),
            steps: scale
                .iter()
                .map(|step| StepDocument {
                    step: step.step().to_string(),
                    exponent: step.exponent(),
                    min: step.min().to_string(),
                    max: step.max().to_string(),
                    preferred: step.preferred().to_string(),
                    clamp: step.clamp().to_string(),
                    min_value: step.min_value(),
                    max_value: step.max_value(),
                })
                .collect(),
        }
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn export(&self, scale: &TypeScale) -> Result<Vec<u8>> {
        let document = Self::document(scale);
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;

        Ok(json.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

/// Top-level JSON structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleDocument {
    pub unit: Unit,
    pub min_screen_width_px: f64,
    pub max_screen_width_px: f64,
    pub steps: Vec<StepDocument>,
}

/// One step as it appears in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDocument {
    pub step: String,
    pub exponent: i32,
    pub min: String,
    pub max: String,
    pub preferred: String,
    pub clamp: String,
    pub min_value: f64,
    pub max_value: f64,
}
