// A minimal Black-Scholes implementation providing the call and put pricing
// helper required by the sweep generator.  Implied-volatility and Greeks are
// intentionally omitted to keep the lightweight focus of pricegrid-lib.
//
// Degenerate inputs (maturity or volatility exactly zero) are rejected by
// `MarketParams::validate` before this module is reached.  The closed-form
// limits, for reference: as T -> 0 the call tends to max(S - K, 0); as
// sigma -> 0 it tends to max(S - K*exp(-r*T), 0), with the symmetric
// expressions for the put.

use crate::params::{MarketParams, OptionPrice};

/// Standard normal CDF: 0.5 * [1 + erf(x / sqrt(2))].
///
/// `libm::erf` is accurate to double precision across the whole real line,
/// including the tails where polynomial CDF approximations break down.
pub(crate) fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Price a European call and put under Black-Scholes assumptions.
///
/// Callers must have validated `params` first: spot, strike, maturity and
/// volatility are all assumed strictly positive here, so d1 and d2 are
/// well defined and the result is finite.
#[allow(non_snake_case)]
pub(crate) fn call_put(params: MarketParams) -> OptionPrice {
    let S = params.spot;
    let K = params.strike;
    let T = params.maturity;
    let r = params.rate;
    let sigma = params.volatility;
    debug_assert!(S > 0.0 && K > 0.0 && T > 0.0 && sigma > 0.0);

    let sigma_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;
    let discount = (-r * T).exp();

    let call = S * norm_cdf(d1) - K * discount * norm_cdf(d2);
    let put = K * discount * norm_cdf(-d2) - S * norm_cdf(-d1);

    OptionPrice { call, put }
}
