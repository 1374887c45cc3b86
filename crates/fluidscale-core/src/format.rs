//! Rounding and CSS length formatting
//!
//! Every number that ends up in a stylesheet goes through these helpers, so
//! the visible bounds and the `calc()` terms follow one precision policy.
//! Bounds are rounded in px to the requested decimal places. A rem bound is
//! that px value divided by the rem size, printed with up to
//! [`REM_EXTRA_DECIMAL_PLACES`] more digits so it parses back to the same
//! px. `calc()` terms use at least [`MIN_PREFERRED_DECIMAL_PLACES`].

use crate::spec::Unit;

/// Largest rounding precision accepted by [`ScaleSpec`](crate::ScaleSpec)
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// Floor on the precision of the slope and intercept inside `calc()`
pub const MIN_PREFERRED_DECIMAL_PLACES: u32 = 4;

/// Digits beyond the rounding precision kept when a px bound becomes rem.
/// Exact for a 16px rem, since dividing by 2^4 adds at most four digits.
pub const REM_EXTRA_DECIMAL_PLACES: u32 = 4;

/// Round half away from zero to `decimals` places.
///
/// Negative zero is folded into positive zero so it never prints as `-0.00`.
/// Values too large to scale are returned unchanged; they have no
/// fractional part left to round.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Precision used for the terms of the preferred `calc()` expression
pub fn preferred_decimal_places(decimals: u32) -> u32 {
    decimals.max(MIN_PREFERRED_DECIMAL_PLACES)
}

/// Fixed-point rendering of an already meaningful number, e.g. `12.80`
pub fn format_fixed(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round_to(value, decimals))
}

/// A CSS length such as `0.89rem` or `25.33px`
pub fn format_length(value: f64, decimals: u32, unit: Unit) -> String {
    format!("{}{}", format_fixed(value, decimals), unit.suffix())
}

/// Fixed-point with trailing zeroes dropped, but never fewer than
/// `min_decimals` digits after the point
pub fn format_trimmed(value: f64, min_decimals: u32, max_decimals: u32) -> String {
    let mut text = format_fixed(value, max_decimals);
    if let Some(point) = text.find('.') {
        let floor = point + 1 + min_decimals.min(max_decimals) as usize;
        while text.len() > floor && text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

/// A value already in `unit`, printed the way bounds are printed
///
/// px keeps exactly `decimals` places. rem keeps at least `decimals` and
/// up to [`REM_EXTRA_DECIMAL_PLACES`] more.
pub fn format_in_unit(value: f64, decimals: u32, unit: Unit) -> String {
    match unit {
        Unit::Px => format_length(value, decimals, unit),
        Unit::Rem => format!(
            "{}{}",
            format_trimmed(value, decimals, decimals + REM_EXTRA_DECIMAL_PLACES),
            unit.suffix()
        ),
    }
}

/// A px bound, already rounded, as its value and text in `unit`
pub fn bound_in_unit(
    rounded_px: f64,
    decimals: u32,
    unit: Unit,
    rem_value_px: f64,
) -> (f64, String) {
    let value = match unit {
        Unit::Px => rounded_px,
        Unit::Rem => round_to(
            unit.from_px(rounded_px, rem_value_px),
            decimals + REM_EXTRA_DECIMAL_PLACES,
        ),
    };
    (value, format_in_unit(value, decimals, unit))
}

/// Read a length produced by [`format_length`] back into its parts
///
/// Only `px` and `rem` suffixes are recognised.
pub fn parse_length(text: &str) -> Option<(f64, Unit)> {
    let text = text.trim();
    let (number, unit) = if let Some(number) = text.strip_suffix("rem") {
        (number, Unit::Rem)
    } else if let Some(number) = text.strip_suffix("px") {
        (number, Unit::Px)
    } else {
        return None;
    };
    let value: f64 = number.parse().ok()?;
    value.is_finite().then_some((value, unit))
}
