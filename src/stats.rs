//! Descriptive statistics over flattened price grids.
//!
//! This is the numeric feed for the price-distribution view: a compact
//! summary of a grid plus uniform-bin histogram counts. Rendering is left to
//! the caller (see the `plot_price_histogram` demo).

use statrs::statistics::Statistics;

/// Summary statistics of a set of prices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation; 0 for a single value.
    pub std_dev: f64,
}

impl GridSummary {
    /// Summarize a flattened grid. Returns `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let mean = values.mean();
        let std_dev = if values.len() > 1 { values.std_dev() } else { 0.0 };
        Some(Self {
            min,
            max,
            mean,
            std_dev,
        })
    }
}

/// Uniform-bin histogram over the observed value range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    /// Bin edges, ascending, `counts.len() + 1` entries
    pub edges: Vec<f64>,
    /// Number of values falling in each bin; the top edge is inclusive
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` uniform buckets spanning [min, max].
    ///
    /// Returns `None` when `values` is empty or `bins` is zero. When every
    /// value is identical the span is zero and all counts land in the first
    /// bin.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        let lo = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let hi = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let span = hi - lo;

        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = if span == 0.0 {
                0
            } else {
                (((v - lo) / span) * bins as f64) as usize
            };
            counts[idx.min(bins - 1)] += 1;
        }
        let edges = (0..=bins)
            .map(|i| lo + span * i as f64 / bins as f64)
            .collect();
        Some(Self { edges, counts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_known_values() {
        let summary = GridSummary::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert!((summary.mean - 2.5).abs() < 1e-12);
        // sample std dev of 1..4 is sqrt(5/3)
        assert!((summary.std_dev - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn summary_of_empty_slice_is_none() {
        assert!(GridSummary::from_values(&[]).is_none());
    }

    #[test]
    fn histogram_counts_cover_every_value() {
        let values = [0.0, 0.1, 0.5, 0.9, 1.0, 1.0];
        let hist = Histogram::from_values(&values, 4).unwrap();
        assert_eq!(hist.counts.iter().sum::<usize>(), values.len());
        assert_eq!(hist.edges.len(), 5);
        assert_eq!(hist.edges[0], 0.0);
        assert_eq!(*hist.edges.last().unwrap(), 1.0);
        // the top edge is inclusive: 0.9 and both 1.0 values share the last bin
        assert_eq!(*hist.counts.last().unwrap(), 3);
    }

    #[test]
    fn histogram_of_constant_values_uses_first_bin() {
        let hist = Histogram::from_values(&[7.0; 5], 3).unwrap();
        assert_eq!(hist.counts, vec![5, 0, 0]);
    }
}
