//! From a [`ScaleSpec`] to a set of `clamp()` expressions
//!
//! Each step sits at a signed distance from the base step. That distance is
//! the exponent applied to the min and max ratios, giving one font size per
//! breakpoint. The two sizes are joined by a straight line across the
//! viewport range, which CSS expresses as `calc(<intercept> + <slope>vw)` and
//! bounds with `clamp()`.
//!
//! ```
//! use fluidscale_core::{ScaleSpec, ScaleComputer, Unit};
//!
//! let spec = ScaleSpec {
//!     unit: Unit::Px,
//!     ..ScaleSpec::default()
//! };
//! let scale = ScaleComputer::new(&spec)?.compute();
//!
//! let base = scale.get("base").unwrap();
//! assert_eq!(base.min(), "16.00px");
//! assert_eq!(base.max(), "19.00px");
//! assert_eq!(base.font_size_at_screen_width(400.0), 16.0);
//! # Ok::<(), fluidscale_core::ScaleError>(())
//! ```

use log::{debug, trace, warn};

use crate::error::{Result, SpecError};
use crate::format::{
    bound_in_unit, format_fixed, format_length, preferred_decimal_places, round_to,
};
use crate::spec::{ScaleSpec, Unit};

/// Font size in px at `width_px` on the line through `(min_screen, min_px)`
/// and `(max_screen, max_px)`, held flat outside the viewport range.
pub fn interpolate_font_size(
    min_px: f64,
    max_px: f64,
    min_screen_width_px: f64,
    max_screen_width_px: f64,
    width_px: f64,
) -> f64 {
    if width_px <= min_screen_width_px {
        return min_px;
    }
    if width_px >= max_screen_width_px {
        return max_px;
    }
    let slope = (max_px - min_px) / (max_screen_width_px - min_screen_width_px);
    min_px + slope * (width_px - min_screen_width_px)
}

/// The line a fluid step follows between the two breakpoints, in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidCurve {
    pub min_px: f64,
    pub max_px: f64,
    pub min_screen_width_px: f64,
    pub max_screen_width_px: f64,
}

impl FluidCurve {
    /// px of font size gained per px of viewport width
    pub fn slope(&self) -> f64 {
        (self.max_px - self.min_px) / (self.max_screen_width_px - self.min_screen_width_px)
    }

    /// Coefficient of the `vw` term; 1vw is 1% of the viewport width
    pub fn slope_vw(&self) -> f64 {
        self.slope() * 100.0
    }

    /// Font size the line would have at a zero-width viewport
    pub fn intercept_px(&self) -> f64 {
        self.min_px - self.slope() * self.min_screen_width_px
    }

    pub fn font_size_px_at(&self, width_px: f64) -> f64 {
        interpolate_font_size(
            self.min_px,
            self.max_px,
            self.min_screen_width_px,
            self.max_screen_width_px,
            width_px,
        )
    }
}

/// One computed step of a type scale
///
/// Immutable once built; all strings are ready to paste into a stylesheet.
///
/// [`min`](Self::min) is the size at the min viewport width and
/// [`max`](Self::max) the size at the max viewport width. When the max ratio
/// is below the min ratio, steps far enough above the base shrink as the
/// viewport grows, so `min` can be numerically larger than `max` (see
/// [`is_inverted`](Self::is_inverted)). The [`clamp`](Self::clamp) always
/// lists the smaller of the two first, and computing such a step logs a
/// warning.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidStep {
    step: String,
    exponent: i32,
    min: String,
    max: String,
    preferred: String,
    clamp: String,
    min_value: f64,
    max_value: f64,
    unit: Unit,
    rem_value_px: f64,
    curve: FluidCurve,
}

impl FluidStep {
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Signed distance from the base step
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Size at the min viewport width, e.g. `0.80rem`
    pub fn min(&self) -> &str {
        &self.min
    }

    /// Size at the max viewport width, e.g. `1.1875rem`
    pub fn max(&self) -> &str {
        &self.max
    }

    /// The `calc()` midpoint of the clamp
    pub fn preferred(&self) -> &str {
        &self.preferred
    }

    /// `clamp(<lower>, <preferred>, <upper>)`
    pub fn clamp(&self) -> &str {
        &self.clamp
    }

    /// Numeric value of [`min`](Self::min) in the output unit
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Numeric value of [`max`](Self::max) in the output unit
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn curve(&self) -> FluidCurve {
        self.curve
    }

    /// True when the step shrinks as the viewport grows
    pub fn is_inverted(&self) -> bool {
        self.max_value < self.min_value
    }

    /// Rendered font size at `width_px`, in the output unit
    ///
    /// Returns exactly [`min_value`](Self::min_value) at or below the min
    /// screen width and exactly [`max_value`](Self::max_value) at or above
    /// the max screen width.
    pub fn font_size_at_screen_width(&self, width_px: f64) -> f64 {
        if width_px <= self.curve.min_screen_width_px {
            return self.min_value;
        }
        if width_px >= self.curve.max_screen_width_px {
            return self.max_value;
        }
        self.unit
            .from_px(self.curve.font_size_px_at(width_px), self.rem_value_px)
    }
}

/// An ordered, computed type scale
#[derive(Debug, Clone, PartialEq)]
pub struct TypeScale {
    steps: Vec<FluidStep>,
    unit: Unit,
    min_screen_width_px: f64,
    max_screen_width_px: f64,
    rounding_decimal_places: u32,
}

impl TypeScale {
    /// Steps in the order they were declared
    pub fn steps(&self) -> &[FluidStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FluidStep> {
        self.steps.iter()
    }

    pub fn get(&self, step: &str) -> Option<&FluidStep> {
        self.steps.iter().find(|s| s.step == step)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn min_screen_width_px(&self) -> f64 {
        self.min_screen_width_px
    }

    pub fn max_screen_width_px(&self) -> f64 {
        self.max_screen_width_px
    }

    pub fn rounding_decimal_places(&self) -> u32 {
        self.rounding_decimal_places
    }
}

impl<'a> IntoIterator for &'a TypeScale {
    type Item = &'a FluidStep;
    type IntoIter = std::slice::Iter<'a, FluidStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Turns a validated [`ScaleSpec`] into a [`TypeScale`]
///
/// Construction validates; [`compute`](Self::compute) cannot fail.
#[derive(Debug, Clone, Copy)]
pub struct ScaleComputer<'a> {
    spec: &'a ScaleSpec,
    base_index: usize,
}

impl<'a> ScaleComputer<'a> {
    pub fn new(spec: &'a ScaleSpec) -> Result<Self> {
        let base_index = spec.validate()?;
        Ok(Self { spec, base_index })
    }

    /// Signed distance of the step at `index` from the base step
    pub fn exponent(&self, index: usize) -> i32 {
        index as i32 - self.base_index as i32
    }

    /// Unrounded `(min, max)` font sizes in px for an exponent
    pub fn raw_sizes_px(&self, exponent: i32) -> (f64, f64) {
        (
            self.spec.min_font_size_px * self.spec.min_ratio.powi(exponent),
            self.spec.max_font_size_px * self.spec.max_ratio.powi(exponent),
        )
    }

    /// `(min, max)` font sizes in px, rounded to the display precision
    pub fn rounded_sizes_px(&self, exponent: i32) -> (f64, f64) {
        let decimals = self.spec.rounding_decimal_places;
        let (raw_min_px, raw_max_px) = self.raw_sizes_px(exponent);
        (round_to(raw_min_px, decimals), round_to(raw_max_px, decimals))
    }

    fn curve(&self, min_px: f64, max_px: f64) -> FluidCurve {
        FluidCurve {
            min_px,
            max_px,
            min_screen_width_px: self.spec.min_screen_width_px,
            max_screen_width_px: self.spec.max_screen_width_px,
        }
    }

    pub fn compute(&self) -> TypeScale {
        let spec = self.spec;
        debug!(
            "Computing {} steps around '{}' ({}px..{}px viewport, unit {})",
            spec.steps.len(),
            spec.base_step,
            spec.min_screen_width_px,
            spec.max_screen_width_px,
            spec.unit
        );

        let steps = spec
            .steps
            .iter()
            .enumerate()
            .map(|(index, name)| self.step(name, self.exponent(index)))
            .collect();

        TypeScale {
            steps,
            unit: spec.unit,
            min_screen_width_px: spec.min_screen_width_px,
            max_screen_width_px: spec.max_screen_width_px,
            rounding_decimal_places: spec.rounding_decimal_places,
        }
    }

    fn step(&self, name: &str, exponent: i32) -> FluidStep {
        let spec = self.spec;
        let unit = spec.unit;
        let decimals = spec.rounding_decimal_places;

        // Rounded in px, then converted, so rem output maps back to the same px
        let (min_px, max_px) = self.rounded_sizes_px(exponent);
        let (min_value, min) = bound_in_unit(min_px, decimals, unit, spec.rem_value_px);
        let (max_value, max) = bound_in_unit(max_px, decimals, unit, spec.rem_value_px);

        // The line passes through the rounded bounds so the clamp has no kink
        let curve = self.curve(min_px, max_px);

        let precision = preferred_decimal_places(decimals);
        let intercept = unit.from_px(curve.intercept_px(), spec.rem_value_px);
        let preferred = format!(
            "calc({} + {}vw)",
            format_length(intercept, precision, unit),
            format_fixed(curve.slope_vw(), precision)
        );

        if max_value < min_value {
            warn!("Step '{name}' shrinks from {min} to {max} as the viewport grows");
        }
        let (lower, upper) = if max_value < min_value {
            (&max, &min)
        } else {
            (&min, &max)
        };
        let clamp = format!("clamp({lower}, {preferred}, {upper})");
        trace!("{name} (exponent {exponent}): {clamp}");

        FluidStep {
            step: name.to_string(),
            exponent,
            min,
            max,
            preferred,
            clamp,
            min_value,
            max_value,
            unit,
            rem_value_px: spec.rem_value_px,
            curve,
        }
    }
}

/// Fail on the first step whose sizes or `calc()` terms overflow `f64`
pub(crate) fn check_finite_sizes(
    spec: &ScaleSpec,
    base_index: usize,
) -> std::result::Result<(), SpecError> {
    let computer = ScaleComputer { spec, base_index };
    for (index, name) in spec.steps.iter().enumerate() {
        let (min_px, max_px) = computer.rounded_sizes_px(computer.exponent(index));
        let curve = computer.curve(min_px, max_px);
        let finite = [min_px, max_px, curve.intercept_px()]
            .into_iter()
            .map(|px| spec.unit.from_px(px, spec.rem_value_px))
            .chain([curve.slope_vw()])
            .all(f64::is_finite);
        if !finite {
            return Err(SpecError::NonFiniteSize(name.clone()));
        }
    }
    Ok(())
}

/// Validate `spec` and compute its type scale
pub fn compute(spec: &ScaleSpec) -> Result<TypeScale> {
    Ok(ScaleComputer::new(spec)?.compute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ScaleError, SpecError};

    fn px_spec() -> ScaleSpec {
        ScaleSpec {
            unit: Unit::Px,
            ..ScaleSpec::default()
        }
        .with_steps(["sm", "base", "md"], "base")
    }

    #[test]
    fn test_exponents_are_relative_to_base() {
        let spec = ScaleSpec::default();
        let computer = ScaleComputer::new(&spec).unwrap();
        assert_eq!(computer.exponent(0), -1);
        assert_eq!(computer.exponent(1), 0);
        assert_eq!(computer.exponent(6), 5);
    }

    #[test]
    fn test_reference_scale_in_px() {
        let scale = compute(&px_spec()).unwrap();

        let base = scale.get("base").unwrap();
        assert_eq!(base.min(), "16.00px");
        assert_eq!(base.max(), "19.00px");

        let md = scale.get("md").unwrap();
        assert_eq!(md.min(), "20.00px");
        assert_eq!(md.max(), "25.33px");

        let sm = scale.get("sm").unwrap();
        assert_eq!(sm.min(), "12.80px");
        assert_eq!(sm.max(), "14.25px");
    }

    #[test]
    fn test_preferred_and_clamp_strings() {
        let scale = compute(&px_spec()).unwrap();
        let base = scale.get("base").unwrap();
        // slope = 3 / 880, intercept = 16 - slope * 400
        assert_eq!(base.preferred(), "calc(14.6364px + 0.3409vw)");
        assert_eq!(
            base.clamp(),
            "clamp(16.00px, calc(14.6364px + 0.3409vw), 19.00px)"
        );
    }

    #[test]
    fn test_rem_output() {
        let scale = compute(&ScaleSpec::default()).unwrap();
        let base = scale.get("base").unwrap();
        assert_eq!(base.min(), "1.00rem");
        // 19px is 1.1875rem; two places would read back as 19.04px
        assert_eq!(base.max(), "1.1875rem");
        assert_eq!(base.max_value(), 1.1875);
        assert!(base.preferred().starts_with("calc(0.9"));
        assert!(base.preferred().ends_with("vw)"));
    }

    #[test]
    fn test_rem_at_zero_decimals_keeps_steps_apart() {
        let spec = ScaleSpec {
            rounding_decimal_places: 0,
            ..ScaleSpec::default()
        };
        let scale = compute(&spec).unwrap();

        let md = scale.get("md").unwrap();
        assert_eq!(md.min_value() * 16.0, 20.0);
        assert_eq!(md.min(), "1.25rem");
        assert_eq!(md.max(), "1.5625rem");

        let base = scale.get("base").unwrap();
        assert_eq!(base.min(), "1rem");
        assert_eq!(base.max(), "1.1875rem");
        assert_eq!(
            base.clamp(),
            format!("clamp(1rem, {}, 1.1875rem)", base.preferred())
        );

        let mins: Vec<f64> = scale.iter().map(FluidStep::min_value).collect();
        assert!(mins.windows(2).all(|pair| pair[0] < pair[1]), "{mins:?}");
    }

    #[test]
    fn test_rem_curve_uses_rounded_px() {
        let rem = compute(&ScaleSpec::default()).unwrap();
        let px = compute(&ScaleSpec {
            unit: Unit::Px,
            ..ScaleSpec::default()
        })
        .unwrap();
        for (r, p) in rem.iter().zip(&px) {
            assert_eq!(r.curve(), p.curve());
            assert_eq!(r.min_value() * 16.0, p.min_value());
            assert_eq!(r.max_value() * 16.0, p.max_value());
        }
    }

    #[test]
    fn test_overflowing_sizes_are_rejected() {
        let spec = ScaleSpec {
            min_font_size_px: 1e307,
            max_font_size_px: 1e308,
            min_ratio: 2.0,
            max_ratio: 2.0,
            unit: Unit::Px,
            ..ScaleSpec::default()
        }
        .with_steps(["base", "md"], "base");
        assert_eq!(
            spec.validate(),
            Err(SpecError::NonFiniteSize("md".into()))
        );
        assert!(matches!(
            compute(&spec),
            Err(ScaleError::InvalidSpec(SpecError::NonFiniteSize(step))) if step == "md"
        ));

        // Fits in px but not once divided by a tiny rem
        let rem = ScaleSpec {
            min_font_size_px: 1e307,
            max_font_size_px: 1e307,
            rem_value_px: 1e-3,
            ..ScaleSpec::default()
        }
        .with_steps(["base"], "base");
        assert_eq!(
            rem.validate(),
            Err(SpecError::NonFiniteSize("base".into()))
        );
    }

    #[test]
    fn test_endpoints_are_exact() {
        let scale = compute(&px_spec()).unwrap();
        let md = scale.get("md").unwrap();
        assert_eq!(md.font_size_at_screen_width(400.0), 20.0);
        assert_eq!(md.font_size_at_screen_width(1280.0), 25.33);
        assert_eq!(md.font_size_at_screen_width(100.0), 20.0);
        assert_eq!(md.font_size_at_screen_width(4000.0), 25.33);

        let mid = md.font_size_at_screen_width(840.0);
        assert!(mid > 20.0 && mid < 25.33);
        assert!((mid - 22.665).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_step_keeps_valid_clamp() {
        let spec = ScaleSpec {
            unit: Unit::Px,
            min_ratio: 1.618,
            max_ratio: 1.067,
            ..ScaleSpec::default()
        }
        .with_steps(["base", "huge"], "base");
        let scale = compute(&spec).unwrap();
        let huge = scale.get("huge").unwrap();

        assert!(huge.is_inverted());
        assert_eq!(huge.min(), "25.89px");
        assert_eq!(huge.max(), "20.27px");
        assert!(huge.clamp().starts_with("clamp(20.27px, calc("));
        assert!(huge.clamp().ends_with(", 25.89px)"));
        assert!(huge.preferred().contains(" + -"));
        assert_eq!(huge.font_size_at_screen_width(400.0), 25.89);
        assert_eq!(huge.font_size_at_screen_width(1280.0), 20.27);
    }

    #[test]
    fn test_invalid_spec_produces_nothing() {
        let spec = ScaleSpec {
            min_screen_width_px: 400.0,
            max_screen_width_px: 400.0,
            ..ScaleSpec::default()
        };
        assert!(matches!(
            compute(&spec),
            Err(ScaleError::InvalidSpec(SpecError::InvalidScreenRange { .. }))
        ));
    }

    #[test]
    fn test_interpolate_font_size_is_flat_outside_range() {
        assert_eq!(interpolate_font_size(10.0, 20.0, 100.0, 200.0, 0.0), 10.0);
        assert_eq!(interpolate_font_size(10.0, 20.0, 100.0, 200.0, 150.0), 15.0);
        assert_eq!(interpolate_font_size(10.0, 20.0, 100.0, 200.0, 500.0), 20.0);
    }

    #[test]
    fn test_curve_evaluates_to_bounds() {
        let curve = FluidCurve {
            min_px: 16.0,
            max_px: 19.0,
            min_screen_width_px: 400.0,
            max_screen_width_px: 1280.0,
        };
        let at_min = curve.intercept_px() + curve.slope_vw() / 100.0 * 400.0;
        let at_max = curve.intercept_px() + curve.slope_vw() / 100.0 * 1280.0;
        assert!((at_min - 16.0).abs() < 1e-9);
        assert!((at_max - 19.0).abs() < 1e-9);
    }
}
