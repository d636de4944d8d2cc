// Example: plot_price_heatmap.rs
// Sweeps the default scenario and renders the call and put price grids as
// SVG heatmaps (spot on the x axis, volatility on the y axis).
//
// Usage:
//     cargo run --example plot_price_heatmap
//
// Output images are written to call_heatmap.svg and put_heatmap.svg in the
// working directory.

use std::error::Error;

use plotters::prelude::*;
use pricegrid_lib::{sweep_with_config, MarketParams, PriceGrid, SweepConfig};

/// Cell boundaries around each axis sample: midpoints between neighbours,
/// extended half a step at either end. Handles the non-uniform spacing the
/// inserted base volatility introduces.
fn cell_edges(axis: &[f64]) -> Vec<f64> {
    if axis.len() == 1 {
        return vec![axis[0] - 0.5, axis[0] + 0.5];
    }
    let mut edges = Vec::with_capacity(axis.len() + 1);
    edges.push(axis[0] - (axis[1] - axis[0]) / 2.0);
    for pair in axis.windows(2) {
        edges.push((pair[0] + pair[1]) / 2.0);
    }
    let n = axis.len();
    edges.push(axis[n - 1] + (axis[n - 1] - axis[n - 2]) / 2.0);
    edges
}

/// Blue-to-red ramp over the grid's value range.
fn ramp(value: f64, lo: f64, hi: f64) -> RGBColor {
    let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.5 };
    let r = (60.0 + 180.0 * t) as u8;
    let g = (80.0 + 40.0 * (1.0 - (2.0 * t - 1.0).abs())) as u8;
    let b = (60.0 + 180.0 * (1.0 - t)) as u8;
    RGBColor(r, g, b)
}

fn draw_heatmap(
    path: &str,
    title: &str,
    grid: &PriceGrid,
    spot_axis: &[f64],
    vol_axis: &[f64],
) -> Result<(), Box<dyn Error>> {
    let lo = grid.values().iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let hi = grid.values().iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    let x_edges = cell_edges(spot_axis);
    let y_edges = cell_edges(vol_axis);

    let root = SVGBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            x_edges[0]..*x_edges.last().unwrap(),
            y_edges[0]..*y_edges.last().unwrap(),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .draw()?;

    let mut cells = Vec::with_capacity(grid.rows() * grid.cols());
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            cells.push(Rectangle::new(
                [(x_edges[j], y_edges[i]), (x_edges[j + 1], y_edges[i + 1])],
                ramp(grid.get(i, j), lo, hi).filled(),
            ));
        }
    }
    chart.draw_series(cells)?;

    root.present()?;
    println!("Chart saved to {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let params = MarketParams::default();
    let result = sweep_with_config(params, &SweepConfig::default())?;

    draw_heatmap(
        "call_heatmap.svg",
        "Call Price Heatmap",
        &result.call_grid,
        &result.spot_axis,
        &result.vol_axis,
    )?;
    draw_heatmap(
        "put_heatmap.svg",
        "Put Price Heatmap",
        &result.put_grid,
        &result.spot_axis,
        &result.vol_axis,
    )?;
    Ok(())
}
