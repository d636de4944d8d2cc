//! Value types produced and consumed by the sweep generator.

use crate::error::{PriceGridError, Result};
use crate::params::OptionPrice;

/// One swept dimension: uniform samples from `min` to `max` inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRange {
    /// Lower bound of the sweep (included in the axis)
    pub min: f64,
    /// Upper bound of the sweep (included in the axis)
    pub max: f64,
    /// Number of uniform samples, at least 1
    pub samples: usize,
}

impl SweepRange {
    pub fn new(min: f64, max: f64, samples: usize) -> Self {
        Self { min, max, samples }
    }

    /// Check the range invariants, naming the axis in any failure.
    pub fn validate(&self, axis: &'static str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PriceGridError::InvalidRange {
                axis,
                message: format!("bounds must be finite, got [{}, {}]", self.min, self.max),
            });
        }
        if self.min > self.max {
            return Err(PriceGridError::InvalidRange {
                axis,
                message: format!("minimum {} exceeds maximum {}", self.min, self.max),
            });
        }
        if self.samples < 1 {
            return Err(PriceGridError::InvalidRange {
                axis,
                message: "sample count must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// A fixed-shape 2D price grid, row = volatility index, column = spot index.
///
/// Dimensions are set at construction and never change; cells are stored
/// row-major. The call grid and put grid of one sweep are separate instances
/// sharing the same index space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceGrid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl PriceGrid {
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows (volatility samples).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (spot samples).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (volatility index, spot index). Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// One grid row: prices across the spot axis at a fixed volatility.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// All cells, row-major. This is the flattened view the price
    /// distribution histogram consumes.
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

/// Everything one sweep produces, index-aligned for downstream charts.
///
/// `call_grid[i][j]` and `put_grid[i][j]` are priced at
/// (`spot_axis[j]`, `vol_axis[i]`) with strike, maturity and rate held at
/// the base scenario's values. Heatmaps and the 3D surface read the grids
/// plus both axes; the line plots read the slices; the histogram reads the
/// flattened grids.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult {
    /// Spot-price samples, ascending
    pub spot_axis: Vec<f64>,
    /// Volatility samples, ascending, always containing the base volatility
    /// exactly once
    pub vol_axis: Vec<f64>,
    /// Call prices, shape [vol_axis.len()][spot_axis.len()]
    pub call_grid: PriceGrid,
    /// Put prices, same shape as `call_grid`
    pub put_grid: PriceGrid,
    /// (call, put) per spot-axis value at the base volatility
    pub spot_slice: Vec<OptionPrice>,
    /// (call, put) per vol-axis value at the base spot
    pub vol_slice: Vec<OptionPrice>,
}
