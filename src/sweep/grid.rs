// Sweep orchestration: validate the request, build the two axes, then fill
// the call/put grids and the 1D slices. Every cell routes through the single
// pricing entry point so the grid can never disagree with a spot quote.

use crate::error::Result;
use crate::params::MarketParams;
use crate::sweep::axis;
use crate::sweep::types::{PriceGrid, SweepRange, SweepResult};

pub(crate) fn build_sweep(
    base: MarketParams,
    spot_range: SweepRange,
    vol_range: SweepRange,
) -> Result<SweepResult> {
    base.validate()?;
    spot_range.validate("spot")?;
    vol_range.validate("volatility")?;

    let spot_axis = axis::linspace(spot_range.min, spot_range.max, spot_range.samples);
    let vol_axis = axis::linspace_with_pivot(
        vol_range.min,
        vol_range.max,
        vol_range.samples,
        base.volatility,
    );

    // Probe the axis minima before allocating anything: a range dipping to
    // zero spot or zero volatility must fail the whole sweep up front, never
    // return a partial grid.
    base.with_spot(spot_axis[0]).validate()?;
    base.with_volatility(vol_axis[0]).validate()?;

    let cells = vol_axis.len() * spot_axis.len();
    let mut call_data = Vec::with_capacity(cells);
    let mut put_data = Vec::with_capacity(cells);
    for &vol in &vol_axis {
        for &spot in &spot_axis {
            let quote = crate::price(base.with_spot(spot).with_volatility(vol))?;
            call_data.push(quote.call);
            put_data.push(quote.put);
        }
    }
    let call_grid = PriceGrid::from_raw(vol_axis.len(), spot_axis.len(), call_data);
    let put_grid = PriceGrid::from_raw(vol_axis.len(), spot_axis.len(), put_data);

    let spot_slice = spot_axis
        .iter()
        .map(|&spot| crate::price(base.with_spot(spot)))
        .collect::<Result<Vec<_>>>()?;
    let vol_slice = vol_axis
        .iter()
        .map(|&vol| crate::price(base.with_volatility(vol)))
        .collect::<Result<Vec<_>>>()?;

    Ok(SweepResult {
        spot_axis,
        vol_axis,
        call_grid,
        put_grid,
        spot_slice,
        vol_slice,
    })
}
