// Example: plot_price_slices.rs
// Renders the two 1D sensitivity slices of a sweep as line charts:
// option price vs. spot at the base volatility, and option price vs.
// volatility at the base spot. Calls are drawn in red, puts in blue.
//
// Usage:
//     cargo run --example plot_price_slices
//
// Output images are written to price_vs_spot.svg and price_vs_vol.svg in
// the working directory.

use std::error::Error;

use plotters::prelude::*;
use pricegrid_lib::{sweep_with_config, MarketParams, OptionPrice, SweepConfig};

fn draw_slice(
    path: &str,
    title: &str,
    x_desc: &str,
    axis: &[f64],
    slice: &[OptionPrice],
) -> Result<(), Box<dyn Error>> {
    let call_line: Vec<(f64, f64)> = axis.iter().zip(slice).map(|(&x, p)| (x, p.call)).collect();
    let put_line: Vec<(f64, f64)> = axis.iter().zip(slice).map(|(&x, p)| (x, p.put)).collect();

    let y_max = slice
        .iter()
        .map(|p| p.call.max(p.put))
        .fold(f64::NEG_INFINITY, f64::max);

    let root = SVGBackend::new(path, (1024, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(axis[0]..*axis.last().unwrap(), 0.0..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Option Price")
        .draw()?;

    chart.draw_series(vec![PathElement::new(call_line, RED.stroke_width(2))])?;
    chart.draw_series(vec![PathElement::new(put_line, BLUE.stroke_width(2))])?;

    root.present()?;
    println!("Chart saved to {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let params = MarketParams::default();
    let result = sweep_with_config(params, &SweepConfig::default())?;

    draw_slice(
        "price_vs_spot.svg",
        "Option Prices vs. Spot Price (call red, put blue)",
        "Spot Price",
        &result.spot_axis,
        &result.spot_slice,
    )?;
    draw_slice(
        "price_vs_vol.svg",
        "Option Prices vs. Volatility (call red, put blue)",
        "Volatility",
        &result.vol_axis,
        &result.vol_slice,
    )?;
    Ok(())
}
