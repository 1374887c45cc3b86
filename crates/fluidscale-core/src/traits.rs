//! The contract every output format implements
//!
//! A computed [`TypeScale`] is only useful once it lands somewhere: a
//! stylesheet, a JSON document, a clipboard. Exporters turn the scale into
//! bytes without touching the numbers.
//!
//! ```ignore
//! struct PlainList;
//!
//! impl Exporter for PlainList {
//!     fn name(&self) -> &'static str {
//!         "plain"
//!     }
//!
//!     fn export(&self, scale: &TypeScale) -> Result<Vec<u8>> {
//!         let lines: Vec<_> = scale.iter().map(|s| s.clamp().to_string()).collect();
//!         Ok(lines.join("\n").into_bytes())
//!     }
//!
//!     fn extension(&self) -> &'static str {
//!         "txt"
//!     }
//!
//!     fn mime_type(&self) -> &'static str {
//!         "text/plain"
//!     }
//! }
//! ```

use crate::{error::Result, TypeScale};

/// Turns a computed scale into a file format
pub trait Exporter: Send + Sync {
    /// Used in logs and for format selection
    fn name(&self) -> &'static str;

    /// Serialize the scale, preserving step order
    fn export(&self, scale: &TypeScale) -> Result<Vec<u8>>;

    /// File extension without the dot
    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}
