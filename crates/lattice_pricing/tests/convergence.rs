//! Convergence and cross-model integration tests.
//!
//! The CRR lattice value of a European option must converge to the
//! Black-Scholes closed form as the step count grows.

use approx::assert_relative_eq;
use lattice_core::types::{ExerciseStyle, PayoffType};
use lattice_pricing::analytical::price_european;
use lattice_pricing::instruments::OptionSpec;
use lattice_pricing::lattice::{crr, price_batch};

fn atm_spec(payoff_type: PayoffType) -> OptionSpec<f64> {
    OptionSpec::new(payoff_type, 100.0, 100.0, 0.05, 0.2, 1.0).unwrap()
}

#[test]
fn european_call_converges_to_black_scholes() {
    let spec = atm_spec(PayoffType::Call);
    let reference = price_european(&spec).unwrap();

    let errors: Vec<f64> = [50, 200, 1000]
        .map(|steps| {
            let price = crr::price(&spec.with_steps(steps).unwrap());
            (price - reference).abs()
        })
        .to_vec();

    assert!(errors[1] < errors[0], "errors = {errors:?}");
    assert!(errors[2] < errors[1], "errors = {errors:?}");
    assert!(errors[2] < 0.01, "errors = {errors:?}");
}

#[test]
fn european_put_converges_to_black_scholes() {
    let spec = atm_spec(PayoffType::Put);
    let reference = price_european(&spec).unwrap();

    let errors: Vec<f64> = [50, 200, 1000]
        .map(|steps| {
            let price = crr::price(&spec.with_steps(steps).unwrap());
            (price - reference).abs()
        })
        .to_vec();

    assert!(errors[1] < errors[0], "errors = {errors:?}");
    assert!(errors[2] < errors[1], "errors = {errors:?}");
    assert!(errors[2] < 0.01, "errors = {errors:?}");
}

#[test]
fn convergence_holds_away_from_the_money() {
    for strike in [80.0, 120.0] {
        let spec: OptionSpec<f64> =
            OptionSpec::new(PayoffType::Call, 100.0, strike, 0.05, 0.2, 1.0).unwrap();
        let reference = price_european(&spec).unwrap();
        let fine = crr::price(&spec.with_steps(2000).unwrap());
        assert!((fine - reference).abs() < 0.01, "strike = {strike}");
    }
}

#[test]
fn concrete_scenario_call_and_put() {
    // S=100, K=100, r=0.05, σ=0.2, T=1, N=200 (the default), European
    let call = crr::price(&atm_spec(PayoffType::Call));
    let put = crr::price(&atm_spec(PayoffType::Put));

    assert!((call - 10.45).abs() < 0.05, "call = {call}");
    assert!((put - 5.57).abs() < 0.05, "put = {put}");

    // The two values together satisfy put-call parity
    let forward = 100.0 - 100.0 * (-0.05_f64).exp();
    assert_relative_eq!(call - put, forward, epsilon = 1e-9);
}

#[test]
fn american_put_dominates_closed_form_european() {
    let spec = atm_spec(PayoffType::Put);
    let reference = price_european(&spec).unwrap();
    let american = crr::price(&spec.with_exercise_style(ExerciseStyle::American));
    assert!(american > reference);
}

#[test]
fn batch_pricing_matches_single_requests() {
    let specs: Vec<OptionSpec<f64>> = (0..100)
        .map(|i| {
            OptionSpec::new(
                if i % 2 == 0 {
                    PayoffType::Call
                } else {
                    PayoffType::Put
                },
                100.0,
                70.0 + i as f64,
                0.05,
                0.2,
                1.0,
            )
            .unwrap()
            .with_steps(64)
            .unwrap()
        })
        .collect();

    let prices = price_batch(&specs);
    for (spec, price) in specs.iter().zip(&prices) {
        assert_eq!(*price, crr::price(spec));
    }
}
