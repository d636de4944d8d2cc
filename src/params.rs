//! Market parameter and price value types shared by the pricing function and
//! the sweep generator. All of these are plain `Copy` value types: they carry
//! no identity and nothing persists across a computation pass.

use crate::error::{PriceGridError, Result};

/// Market inputs for a single European option quote.
///
/// Field constraints are enforced by [`MarketParams::validate`], which every
/// public entry point calls before touching the formula:
/// spot and strike strictly positive, maturity and rate non-negative,
/// volatility non-negative, all values finite. Zero maturity or volatility is
/// rejected separately as [`PriceGridError::DegenerateInput`] because the
/// closed form divides by `sigma * sqrt(t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParams {
    /// Current underlying asset price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Annualized risk-free interest rate (as decimal, e.g. 0.05 for 5%)
    pub rate: f64,
    /// Annualized volatility (as decimal, e.g. 0.2 for 20%)
    pub volatility: f64,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl MarketParams {
    /// Check every field against its domain constraint.
    ///
    /// Returns [`PriceGridError::InvalidParameter`] naming the first field
    /// that violates a hard constraint, then
    /// [`PriceGridError::DegenerateInput`] if maturity or volatility is
    /// exactly zero. Valid parameters are guaranteed to price to finite
    /// values.
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, f64); 5] = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("rate", self.rate),
            ("volatility", self.volatility),
        ];
        for (field, value) in checks {
            if !value.is_finite() {
                return Err(PriceGridError::InvalidParameter {
                    field,
                    value,
                    constraint: "must be finite",
                });
            }
        }

        if self.spot <= 0.0 {
            return Err(PriceGridError::InvalidParameter {
                field: "spot",
                value: self.spot,
                constraint: "must be strictly positive",
            });
        }
        if self.strike <= 0.0 {
            return Err(PriceGridError::InvalidParameter {
                field: "strike",
                value: self.strike,
                constraint: "must be strictly positive",
            });
        }
        if self.maturity < 0.0 {
            return Err(PriceGridError::InvalidParameter {
                field: "maturity",
                value: self.maturity,
                constraint: "must be non-negative",
            });
        }
        if self.rate < 0.0 {
            return Err(PriceGridError::InvalidParameter {
                field: "rate",
                value: self.rate,
                constraint: "must be non-negative",
            });
        }
        if self.volatility < 0.0 {
            return Err(PriceGridError::InvalidParameter {
                field: "volatility",
                value: self.volatility,
                constraint: "must be non-negative",
            });
        }

        if self.maturity == 0.0 {
            return Err(PriceGridError::DegenerateInput {
                field: "maturity",
                value: 0.0,
            });
        }
        if self.volatility == 0.0 {
            return Err(PriceGridError::DegenerateInput {
                field: "volatility",
                value: 0.0,
            });
        }

        Ok(())
    }

    /// Copy of these parameters with a different spot price.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Copy of these parameters with a different volatility.
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }
}

/// Call and put prices for one [`MarketParams`] evaluation.
///
/// The pair always satisfies put-call parity,
/// `call - put = spot - strike * exp(-rate * maturity)`, within floating
/// point tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrice {
    /// European call price
    pub call: f64,
    /// European put price
    pub put: f64,
}
