// Axis sample construction for sweep grids.
//
// Axes are uniform inclusive grids over a range. The volatility axis
// additionally carries the base scenario's exact volatility so that one grid
// row always corresponds to the headline quote, even when the uniform
// samples skip over it.

/// Two axis values closer than this are treated as the same sample.
pub(crate) const DEDUP_EPS: f64 = 1e-9;

/// Uniform samples from `min` to `max` inclusive.
///
/// A single-sample axis collapses to `[min]`. Callers guarantee
/// `min <= max` and `samples >= 1` via `SweepRange::validate`.
pub(crate) fn linspace(min: f64, max: f64, samples: usize) -> Vec<f64> {
    if samples == 1 {
        return vec![min];
    }
    let step = (max - min) / (samples - 1) as f64;
    let mut axis: Vec<f64> = (0..samples).map(|i| min + step * i as f64).collect();
    // both bounds are exact members, whatever the step arithmetic rounds to
    axis[samples - 1] = max;
    axis
}

/// Uniform samples with `pivot` guaranteed present exactly once.
///
/// Samples within [`DEDUP_EPS`] of the pivot are replaced by the exact pivot
/// value, then the axis is re-sorted ascending and deduplicated. A pivot
/// outside `[min, max]` simply extends the axis at the matching end.
pub(crate) fn linspace_with_pivot(min: f64, max: f64, samples: usize, pivot: f64) -> Vec<f64> {
    let mut axis = linspace(min, max, samples);
    axis.retain(|v| (v - pivot).abs() > DEDUP_EPS);
    axis.push(pivot);
    axis.sort_by(|a, b| a.partial_cmp(b).unwrap());
    axis.dedup_by(|a, b| (*a - *b).abs() <= DEDUP_EPS);
    axis
}
