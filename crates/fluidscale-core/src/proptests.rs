use super::*;
use proptest::prelude::*;

fn arb_spec() -> impl Strategy<Value = ScaleSpec> {
    (
        (8.0f64..32.0, 8.0f64..48.0, 200.0f64..800.0, 100.0f64..1600.0),
        (1.01f64..2.0, 1.01f64..2.0, 1usize..10),
        (0u32..=4, any::<bool>(), 10.0f64..24.0),
    )
        .prop_flat_map(
            |((min_fs, max_fs, min_w, span), (min_r, max_r, count), (decimals, rem, rem_px))| {
                (0..count).prop_map(move |base| {
                    let steps: Vec<String> = (0..count).map(|i| format!("step-{i}")).collect();
                    let base_step = steps[base].clone();
                    ScaleSpec {
                        min_font_size_px: min_fs,
                        max_font_size_px: max_fs,
                        min_screen_width_px: min_w,
                        max_screen_width_px: min_w + span,
                        min_ratio: min_r,
                        max_ratio: max_r,
                        steps,
                        base_step,
                        rounding_decimal_places: decimals,
                        unit: if rem { Unit::Rem } else { Unit::Px },
                        rem_value_px: rem_px,
                    }
                })
            },
        )
}

// Property: the rendered size at each breakpoint is exactly the visible bound
proptest! {
    #[test]
    fn prop_endpoints_match_bounds(spec in arb_spec()) {
        let scale = compute(&spec).unwrap();
        for step in &scale {
            let (min, _) = format::parse_length(step.min()).unwrap();
            let (max, _) = format::parse_length(step.max()).unwrap();
            prop_assert_eq!(step.font_size_at_screen_width(spec.min_screen_width_px), min);
            prop_assert_eq!(step.font_size_at_screen_width(spec.max_screen_width_px), max);
        }
    }
}

// Property: growing steps never shrink as the viewport widens
proptest! {
    #[test]
    fn prop_monotonic_in_width(spec in arb_spec(), a in 0.0f64..3000.0, b in 0.0f64..3000.0) {
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        let scale = compute(&spec).unwrap();
        for step in scale.iter().filter(|s| !s.is_inverted()) {
            let at_narrow = step.font_size_at_screen_width(narrow);
            let at_wide = step.font_size_at_screen_width(wide);
            prop_assert!(at_narrow <= at_wide + 1e-9, "{} > {}", at_narrow, at_wide);
        }
    }
}

// Property: the clamp never lets the size escape its bounds
proptest! {
    #[test]
    fn prop_size_stays_within_bounds(spec in arb_spec(), width in 0.0f64..3000.0) {
        let scale = compute(&spec).unwrap();
        for step in &scale {
            let lower = step.min_value().min(step.max_value());
            let upper = step.min_value().max(step.max_value());
            let size = step.font_size_at_screen_width(width);
            prop_assert!(size >= lower - 1e-9 && size <= upper + 1e-9);
        }
    }
}

// Property: same spec, same output
proptest! {
    #[test]
    fn prop_computation_is_pure(spec in arb_spec()) {
        let first = compute(&spec).unwrap();
        let second = compute(&spec.clone()).unwrap();
        prop_assert_eq!(first, second);
    }
}

// Property: rem output converts back to the px output, rounded in px first
proptest! {
    #[test]
    fn prop_rem_round_trips_to_px(spec in arb_spec()) {
        let px = compute(&ScaleSpec { unit: Unit::Px, ..spec.clone() }).unwrap();
        let rem = compute(&ScaleSpec { unit: Unit::Rem, ..spec.clone() }).unwrap();
        let extra = spec.rounding_decimal_places + format::REM_EXTRA_DECIMAL_PLACES;
        let tolerance = spec.rem_value_px * 10f64.powi(-(extra as i32)) + 1e-9;

        for (p, r) in px.iter().zip(rem.iter()) {
            prop_assert_eq!(p.step(), r.step());
            prop_assert_eq!(p.curve(), r.curve());
            let (min, _) = format::parse_length(r.min()).unwrap();
            let (max, _) = format::parse_length(r.max()).unwrap();
            prop_assert!((min * spec.rem_value_px - p.min_value()).abs() <= tolerance, "{} vs {}", r.min(), p.min());
            prop_assert!((max * spec.rem_value_px - p.max_value()).abs() <= tolerance, "{} vs {}", r.max(), p.max());
        }
    }
}

// Property: sizes follow base * ratio^exponent before rounding
proptest! {
    #[test]
    fn prop_modular_formula(spec in arb_spec()) {
        let spec = ScaleSpec { unit: Unit::Px, ..spec };
        let scale = compute(&spec).unwrap();
        let half_unit = 0.5 * 10f64.powi(-(spec.rounding_decimal_places as i32)) + 1e-9;

        for step in &scale {
            let expected_min = spec.min_font_size_px * spec.min_ratio.powi(step.exponent());
            let expected_max = spec.max_font_size_px * spec.max_ratio.powi(step.exponent());
            prop_assert!((step.min_value() - expected_min).abs() <= half_unit);
            prop_assert!((step.max_value() - expected_max).abs() <= half_unit);
        }
    }
}

// Property: step order survives computation
proptest! {
    #[test]
    fn prop_step_order_preserved(spec in arb_spec()) {
        let scale = compute(&spec).unwrap();
        let names: Vec<&str> = scale.iter().map(|s| s.step()).collect();
        let expected: Vec<&str> = spec.steps.iter().map(String::as_str).collect();
        prop_assert_eq!(names, expected);
    }
}
