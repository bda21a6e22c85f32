use kognit_core::models::metric::Direction;
use kognit_norms::scoring::{NormParams, normal_cdf, normalize, percentile};
use proptest::prelude::*;

const PARAMS: NormParams = NormParams {
    mean: 380.0,
    sd: 70.0,
};

#[test]
fn cdf_at_zero_is_fifty_percent() {
    assert!((normal_cdf(0.0) - 0.5).abs() < 1e-6);
    assert!((percentile(0.0) - 50.0).abs() < 1e-4);
}

#[test]
fn cdf_matches_known_values() {
    assert!((normal_cdf(1.0) - 0.841_344_7).abs() < 1e-6);
    assert!((normal_cdf(-1.96) - 0.024_997_9).abs() < 1e-6);
    assert!((normal_cdf(2.5) - 0.993_790_3).abs() < 1e-6);
}

#[test]
fn cdf_is_symmetric() {
    for z in [0.3, 1.1, 2.7] {
        assert!((normal_cdf(z) + normal_cdf(-z) - 1.0).abs() < 1e-12);
    }
}

proptest! {
    #[test]
    fn cdf_is_monotone(a in -8.0f64..8.0, b in -8.0f64..8.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(normal_cdf(lo) <= normal_cdf(hi));
    }

    #[test]
    fn percentile_stays_in_range(z in -40.0f64..40.0) {
        let p = percentile(z);
        prop_assert!((0.0..=100.0).contains(&p));
    }
}

#[test]
fn raw_at_mean_is_zero_for_either_direction() {
    let up = normalize(Some(380.0), PARAMS, Direction::HigherIsBetter);
    let down = normalize(Some(380.0), PARAMS, Direction::LowerIsBetter);
    assert_eq!(up.z, Some(0.0));
    assert_eq!(down.z.map(f64::abs), Some(0.0));
}

#[test]
fn lower_is_better_flips_sign() {
    let fast = normalize(Some(310.0), PARAMS, Direction::LowerIsBetter);
    let z = fast.z.unwrap();
    assert!((z - 1.0).abs() < 1e-12);
    assert!(fast.percentile.unwrap() > 50.0);

    let slow = normalize(Some(450.0), PARAMS, Direction::LowerIsBetter);
    assert!(slow.z.unwrap() < 0.0);
}

#[test]
fn missing_raw_is_absent_but_reports_params() {
    for direction in [Direction::HigherIsBetter, Direction::LowerIsBetter] {
        let result = normalize(None, PARAMS, direction);
        assert_eq!(result.z, None);
        assert_eq!(result.percentile, None);
        assert_eq!(result.mean, 380.0);
        assert_eq!(result.sd, 70.0);
    }
}

#[test]
fn non_finite_raw_is_treated_as_missing() {
    for raw in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = normalize(Some(raw), PARAMS, Direction::HigherIsBetter);
        assert_eq!(result.z, None);
        assert_eq!(result.percentile, None);
    }
}
