//! Property-based tests for the BMI engine

use super::*;
use proptest::prelude::*;

fn arb_mass() -> impl Strategy<Value = f64> {
    (1u32..=5000).prop_map(|tenths| f64::from(tenths) / 10.0)
}

fn arb_height() -> impl Strategy<Value = f64> {
    (1u32..=3000).prop_map(|tenths| f64::from(tenths) / 10.0)
}

proptest! {
    #[test]
    fn valid_inputs_always_compute(mass in arb_mass(), height in arb_height()) {
        let metric = compute_metric(mass, height).unwrap();
        prop_assert!(metric.is_finite());
        prop_assert!(metric >= 0.0);
    }

    #[test]
    fn metric_has_at_most_one_decimal(mass in arb_mass(), height in arb_height()) {
        let metric = compute_metric(mass, height).unwrap();
        let scaled = metric * 10.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6, "metric {} not rounded", metric);
    }

    #[test]
    fn exactly_one_band_matches(metric in 0.0f64..200.0) {
        let band = classify(metric);
        let matches: Vec<Band> = Band::ALL
            .into_iter()
            .filter(|b| match b {
                Band::Low => metric < 18.5,
                Band::Normal => (18.5..25.0).contains(&metric),
                Band::High => (25.0..30.0).contains(&metric),
                Band::VeryHigh => metric >= 30.0,
            })
            .collect();
        prop_assert_eq!(matches, vec![band]);
    }

    #[test]
    fn bands_are_monotonic(a in 0.0f64..200.0, b in 0.0f64..200.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo) <= classify(hi));
    }

    #[test]
    fn validation_accepts_exactly_the_policy_range(value in -100.0f64..700.0) {
        let text = value.to_string();
        prop_assert_eq!(parse_mass(&text).is_ok(), value > 0.0 && value <= MAX_MASS_KG);
        prop_assert_eq!(parse_height(&text).is_ok(), value > 0.0 && value <= MAX_HEIGHT_CM);
    }

    #[test]
    fn non_numeric_tokens_never_validate(token in "[a-zA-Z#]{1,8}") {
        // "inf"/"nan" spellings parse as floats but are not finite
        prop_assert!(parse_mass(&token).is_err());
        prop_assert!(parse_height(&token).is_err());
    }
}
