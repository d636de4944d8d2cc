//! # PriceGrid-Lib: Black-Scholes Pricing and Sensitivity Sweep Grids
//!
//! `pricegrid-lib` computes European option prices under the Black-Scholes
//! model and assembles the sensitivity grids behind interactive pricing
//! dashboards: call/put heatmaps over (spot, volatility), a 3D price
//! surface, price-vs-spot and price-vs-volatility slices, and the flattened
//! price distribution.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricing**: Black-Scholes call and put prices with a
//!   double-precision normal CDF (no series approximations)
//! - **Sweep Grids**: fixed-shape call/put grids over spot x volatility
//!   ranges, with the base volatility always present on its axis
//! - **Strict Input Validation**: typed errors naming the offending field;
//!   degenerate inputs never propagate NaN into a chart
//! - **Chart-Ready Outputs**: index-aligned axes, grids, slices, and
//!   histogram/summary statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use pricegrid_lib::{price, sweep, MarketParams, SweepRange};
//!
//! let params = MarketParams {
//!     spot: 100.0,
//!     strike: 100.0,
//!     maturity: 1.0,
//!     rate: 0.05,
//!     volatility: 0.2,
//! };
//!
//! // Headline quote
//! let quote = price(params)?;
//! println!("call {:.4}  put {:.4}", quote.call, quote.put);
//!
//! // Sensitivity grids for the charts
//! let result = sweep(
//!     params,
//!     SweepRange::new(80.0, 120.0, 10),
//!     SweepRange::new(0.1, 0.3, 10),
//! )?;
//! assert_eq!(result.call_grid.rows(), result.vol_axis.len());
//! assert_eq!(result.call_grid.cols(), result.spot_axis.len());
//! # Ok::<(), pricegrid_lib::PriceGridError>(())
//! ```
//!
//! ## Conventions
//!
//! Grids are row-major with row = volatility index and column = spot index;
//! consumers can rely on index alignment with `vol_axis` and `spot_axis`
//! without re-deriving it. One parameter change maps to one full
//! recomputation: nothing is cached and nothing is shared between calls.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
mod models;
pub mod params;
pub mod stats;
pub mod sweep;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PriceGridError, Result};
pub use params::{MarketParams, OptionPrice};
pub use stats::{GridSummary, Histogram};
pub use sweep::config::{ScenarioConfig, SweepConfig};
pub use sweep::types::{PriceGrid, SweepRange, SweepResult};

// ================================================================================================
// API
// ================================================================================================

/// Price a European call and put at a single market point.
///
/// Evaluates the Black-Scholes closed form
///
/// ```text
/// d1   = (ln(S/K) + (r + sigma^2/2) T) / (sigma sqrt(T))
/// d2   = d1 - sigma sqrt(T)
/// call = S Phi(d1) - K e^(-rT) Phi(d2)
/// put  = K e^(-rT) Phi(-d2) - S Phi(-d1)
/// ```
///
/// The function is pure and deterministic. For valid inputs the returned
/// pair is finite and satisfies put-call parity,
/// `call - put = spot - strike * exp(-rate * maturity)`, within 1e-9
/// relative tolerance.
///
/// # Errors
///
/// * [`PriceGridError::InvalidParameter`] for non-positive spot or strike,
///   negative maturity, rate, or volatility, or any non-finite field
/// * [`PriceGridError::DegenerateInput`] for zero maturity or volatility:
///   the formula divides by `sigma * sqrt(T)`, and this crate rejects the
///   degenerate point explicitly instead of returning a limit value
///
/// # Example
///
/// ```rust
/// use pricegrid_lib::{price, MarketParams};
///
/// let quote = price(MarketParams::default())?;
/// // Reference values for the at-the-money one-year 20%-vol option
/// assert!((quote.call - 10.4506).abs() < 1e-3);
/// assert!((quote.put - 5.5735).abs() < 1e-3);
/// # Ok::<(), pricegrid_lib::PriceGridError>(())
/// ```
pub fn price(params: MarketParams) -> Result<OptionPrice> {
    params.validate()?;
    Ok(models::bs::call_put(params))
}

/// Evaluate the pricing function over a spot x volatility grid.
///
/// Builds the spot axis as a uniform inclusive grid over `spot_range` and
/// the volatility axis over `vol_range` with `base.volatility` inserted
/// (exactly once) if the uniform samples miss it. Fills the call and put
/// grids at every axis combination with strike, maturity and rate held at
/// the base values, plus the two 1D slices through the base point. Every
/// cell routes through [`price`]; there is no second copy of the formula.
///
/// # Arguments
///
/// * `base` - The scenario the sweep pivots around. Supplies the fixed
///   strike/maturity/rate, the volatility-axis pivot, and the spot for the
///   volatility slice.
/// * `spot_range` - Swept spot prices (grid columns).
/// * `vol_range` - Swept volatilities (grid rows).
///
/// # Errors
///
/// * [`PriceGridError::InvalidRange`] if either range has `min > max` or
///   zero samples, naming the offending axis
/// * [`PriceGridError::InvalidParameter`] / [`PriceGridError::DegenerateInput`]
///   if the base parameters or any axis value would be rejected by
///   [`price`] (e.g. a volatility range reaching down to zero); detected
///   before grid construction, so no partial grid is ever returned
///
/// # Example
///
/// ```rust
/// use pricegrid_lib::{sweep, MarketParams, SweepRange};
///
/// let base = MarketParams::default();
/// let result = sweep(
///     base,
///     SweepRange::new(80.0, 120.0, 10),
///     SweepRange::new(0.1, 0.3, 10),
/// )?;
///
/// // The base volatility gets its own grid row
/// assert!(result.vol_axis.contains(&base.volatility));
/// # Ok::<(), pricegrid_lib::PriceGridError>(())
/// ```
pub fn sweep(
    base: MarketParams,
    spot_range: SweepRange,
    vol_range: SweepRange,
) -> Result<SweepResult> {
    sweep::grid::build_sweep(base, spot_range, vol_range)
}

/// [`sweep()`] with the ranges taken from a [`SweepConfig`].
pub fn sweep_with_config(base: MarketParams, config: &SweepConfig) -> Result<SweepResult> {
    sweep::grid::build_sweep(base, config.spot_range, config.vol_range)
}
