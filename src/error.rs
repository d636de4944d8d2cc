//! Error types for the pricegrid library.
//!
//! Every fallible operation returns `Result<T, PriceGridError>` rather than
//! propagating NaN or panicking. Errors are detected at the API boundary,
//! before any formula evaluation or grid allocation, and name the offending
//! field so callers can surface a precise message instead of a chart built
//! from garbage values.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, PriceGridError>;

/// Errors that can occur while pricing options or building sweep grids.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PriceGridError {
    /// A market parameter violates its domain constraint
    /// (e.g. non-positive spot, negative maturity, non-finite input).
    #[error("invalid parameter `{field}`: {constraint} (got {value})")]
    InvalidParameter {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// The violated constraint, human-readable.
        constraint: &'static str,
    },

    /// Volatility or maturity is exactly zero, which makes the
    /// Black-Scholes d1/d2 terms undefined.
    #[error("degenerate input: `{field}` must be strictly positive (got {value})")]
    DegenerateInput {
        /// Either `"volatility"` or `"maturity"`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A sweep range is malformed (minimum above maximum, no samples,
    /// or non-finite endpoints).
    #[error("invalid {axis} range: {message}")]
    InvalidRange {
        /// Which swept axis the range belongs to (`"spot"` or `"volatility"`).
        axis: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_names_field_in_message() {
        let err = PriceGridError::InvalidParameter {
            field: "spot",
            value: -1.0,
            constraint: "must be strictly positive",
        };
        let msg = err.to_string();
        assert!(msg.contains("spot"), "message should name the field: {msg}");
        assert!(msg.contains("-1"), "message should show the value: {msg}");
    }

    #[test]
    fn degenerate_input_is_distinct_from_invalid_parameter() {
        let degenerate = PriceGridError::DegenerateInput {
            field: "volatility",
            value: 0.0,
        };
        assert!(matches!(
            degenerate,
            PriceGridError::DegenerateInput { field: "volatility", .. }
        ));
    }
}
