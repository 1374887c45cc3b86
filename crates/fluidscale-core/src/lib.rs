//! Fluidscale Core: font sizes that grow with the viewport
//!
//! A fluid type scale is a set of named font-size steps. Each step has one
//! size at a small viewport and another at a large viewport, and CSS
//! `clamp()` slides smoothly between them. This crate does the arithmetic;
//! everything around it (forms, query strings, stylesheets) lives elsewhere.
//!
//! ## Computing a scale
//!
//! 1. **Describe it** - fill in a [`ScaleSpec`] (or start from its default)
//! 2. **Validate it** - [`ScaleComputer::new`] rejects impossible specs
//! 3. **Compute it** - [`ScaleComputer::compute`] yields a [`TypeScale`]
//! 4. **Use it** - read the `clamp()` strings, or ask a step for its size at
//!    any viewport width
//!
//! ```rust
//! use fluidscale_core::{compute, ScaleSpec, Unit};
//!
//! let spec = ScaleSpec {
//!     unit: Unit::Px,
//!     ..ScaleSpec::default()
//! }
//! .with_steps(["sm", "base", "md"], "base");
//!
//! let scale = compute(&spec)?;
//! let md = scale.get("md").unwrap();
//!
//! assert_eq!(md.min(), "20.00px");
//! assert_eq!(md.max(), "25.33px");
//! assert!(md.clamp().starts_with("clamp(20.00px, calc("));
//! # Ok::<(), fluidscale_core::ScaleError>(())
//! ```
//!
//! The computation is pure: the same spec always produces byte-identical
//! output, and nothing is cached between calls.

pub mod error;
pub mod format;
pub mod ratio;
pub mod scale;
pub mod spec;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{ExportError, Result, ScaleError, SpecError};
pub use ratio::{parse_ratio, ModularRatio};
pub use scale::{compute, interpolate_font_size, FluidCurve, FluidStep, ScaleComputer, TypeScale};
pub use spec::{ScaleSpec, Unit, DEFAULT_BASE_STEP, DEFAULT_REM_VALUE_PX, DEFAULT_STEPS};
pub use traits::Exporter;
