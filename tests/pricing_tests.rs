use pricegrid_lib::{price, MarketParams, PriceGridError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};

// Helper to build MarketParams more concisely
fn params(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> MarketParams {
    MarketParams {
        spot,
        strike,
        maturity,
        rate,
        volatility,
    }
}

fn parity_gap(p: pricegrid_lib::OptionPrice, m: MarketParams) -> f64 {
    let rhs = m.spot - m.strike * (-m.rate * m.maturity).exp();
    let scale = p.call.abs().max(p.put.abs()).max(1.0);
    ((p.call - p.put) - rhs).abs() / scale
}

/// Reference values for the at-the-money one-year option:
/// S=100, K=100, T=1, r=5%, sigma=20% -> call ~ 10.4506, put ~ 5.5735.
#[test]
fn test_reference_atm_one_year() {
    let quote = price(params(100.0, 100.0, 1.0, 0.05, 0.2)).expect("pricing failed");
    assert!(
        (quote.call - 10.4506).abs() < 1e-3,
        "call should be ~10.4506, got {}",
        quote.call
    );
    assert!(
        (quote.put - 5.5735).abs() < 1e-3,
        "put should be ~5.5735, got {}",
        quote.put
    );
}

/// The crate's erf-based normal CDF must agree with an independent
/// implementation: reprice a scattering of points with statrs' Normal and
/// compare to near machine precision.
#[test]
fn test_price_matches_statrs_cdf() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let cases = [
        params(100.0, 100.0, 1.0, 0.05, 0.2),
        params(80.0, 100.0, 0.25, 0.01, 0.45),
        params(150.0, 90.0, 2.0, 0.0, 0.1),
        params(42.0, 60.0, 0.1, 0.08, 0.9),
    ];
    for m in cases {
        let quote = price(m).expect("pricing failed");

        let sigma_sqrt_t = m.volatility * m.maturity.sqrt();
        let d1 = ((m.spot / m.strike).ln() + (m.rate + 0.5 * m.volatility * m.volatility) * m.maturity)
            / sigma_sqrt_t;
        let d2 = d1 - sigma_sqrt_t;
        let discount = (-m.rate * m.maturity).exp();
        let call = m.spot * normal.cdf(d1) - m.strike * discount * normal.cdf(d2);
        let put = m.strike * discount * normal.cdf(-d2) - m.spot * normal.cdf(-d1);

        assert!(
            (quote.call - call).abs() < 1e-9,
            "call mismatch vs statrs: {} vs {}",
            quote.call,
            call
        );
        assert!(
            (quote.put - put).abs() < 1e-9,
            "put mismatch vs statrs: {} vs {}",
            quote.put,
            put
        );
    }
}

/// Put-call parity, call - put = S - K e^(-rT), within 1e-9 relative
/// tolerance over a seeded random sample of valid parameters.
#[test]
fn test_put_call_parity_random() {
    let mut rng = StdRng::seed_from_u64(20240901);
    for _ in 0..500 {
        let m = params(
            rng.gen_range(1.0..500.0),
            rng.gen_range(1.0..500.0),
            rng.gen_range(0.01..5.0),
            rng.gen_range(0.0..0.15),
            rng.gen_range(0.01..1.5),
        );
        let quote = price(m).expect("pricing failed");
        assert!(quote.call.is_finite() && quote.put.is_finite());
        let gap = parity_gap(quote, m);
        assert!(gap < 1e-9, "parity violated by {} for {:?}", gap, m);
    }
}

/// Call prices are non-decreasing and put prices non-increasing in spot,
/// everything else held fixed.
#[test]
fn test_monotonicity_in_spot() {
    let mut prev: Option<pricegrid_lib::OptionPrice> = None;
    for i in 0..100 {
        let spot = 20.0 + i as f64 * 2.0;
        let quote = price(params(spot, 100.0, 1.0, 0.05, 0.2)).expect("pricing failed");
        if let Some(last) = prev {
            assert!(
                quote.call >= last.call,
                "call decreased moving spot up to {}",
                spot
            );
            assert!(
                quote.put <= last.put,
                "put increased moving spot up to {}",
                spot
            );
        }
        prev = Some(quote);
    }
}

/// As spot -> 0 the call tends to 0 and the put to K e^(-rT).
#[test]
fn test_boundary_small_spot() {
    let m = params(1e-6, 100.0, 1.0, 0.05, 0.2);
    let quote = price(m).expect("pricing failed");
    let discounted_strike = 100.0 * (-0.05_f64).exp();
    assert!(quote.call.abs() < 1e-9, "call should vanish, got {}", quote.call);
    assert!(
        (quote.put - discounted_strike).abs() < 1e-5,
        "put should approach K e^(-rT) = {}, got {}",
        discounted_strike,
        quote.put
    );
}

/// Zero volatility or zero maturity is a DegenerateInput error, never a
/// NaN-valued price.
#[test]
fn test_degenerate_inputs_are_rejected() {
    let err = price(params(100.0, 100.0, 1.0, 0.05, 0.0)).unwrap_err();
    assert!(
        matches!(err, PriceGridError::DegenerateInput { field: "volatility", .. }),
        "expected DegenerateInput for zero volatility, got {:?}",
        err
    );

    let err = price(params(100.0, 100.0, 0.0, 0.05, 0.2)).unwrap_err();
    assert!(
        matches!(err, PriceGridError::DegenerateInput { field: "maturity", .. }),
        "expected DegenerateInput for zero maturity, got {:?}",
        err
    );
}

/// Constraint violations are rejected before evaluation and name the field.
#[test]
fn test_invalid_parameters_name_the_field() {
    let cases: [(MarketParams, &str); 5] = [
        (params(-1.0, 100.0, 1.0, 0.05, 0.2), "spot"),
        (params(100.0, 0.0, 1.0, 0.05, 0.2), "strike"),
        (params(100.0, 100.0, -0.5, 0.05, 0.2), "maturity"),
        (params(100.0, 100.0, 1.0, -0.01, 0.2), "rate"),
        (params(100.0, 100.0, 1.0, 0.05, -0.2), "volatility"),
    ];
    for (m, expected_field) in cases {
        match price(m).unwrap_err() {
            PriceGridError::InvalidParameter { field, .. } => {
                assert_eq!(field, expected_field, "wrong field for {:?}", m)
            }
            other => panic!("expected InvalidParameter for {:?}, got {:?}", m, other),
        }
    }
}

/// Non-finite inputs are invalid parameters, not NaN outputs.
#[test]
fn test_non_finite_inputs_are_rejected() {
    let err = price(params(f64::NAN, 100.0, 1.0, 0.05, 0.2)).unwrap_err();
    assert!(matches!(err, PriceGridError::InvalidParameter { field: "spot", .. }));

    let err = price(params(100.0, 100.0, f64::INFINITY, 0.05, 0.2)).unwrap_err();
    assert!(matches!(
        err,
        PriceGridError::InvalidParameter { field: "maturity", .. }
    ));
}

/// Deep in- and out-of-the-money prices stay finite and ordered sanely.
#[test]
fn test_tail_inputs_stay_finite() {
    let deep_itm = price(params(1000.0, 10.0, 1.0, 0.05, 0.2)).expect("pricing failed");
    assert!(deep_itm.call.is_finite() && deep_itm.put.is_finite());
    assert!(deep_itm.put.abs() < 1e-9, "deep ITM call means worthless put");
    assert!(deep_itm.call > 990.0);

    let deep_otm = price(params(10.0, 1000.0, 1.0, 0.05, 0.2)).expect("pricing failed");
    assert!(deep_otm.call.abs() < 1e-9, "deep OTM call should be ~0");
    assert!(parity_gap(deep_otm, params(10.0, 1000.0, 1.0, 0.05, 0.2)) < 1e-9);
}
