// Example: plot_price_histogram.rs
// Flattens both sweep grids and renders the distribution of call and put
// prices as an overlaid histogram (calls red, puts blue).
//
// Usage:
//     cargo run --example plot_price_histogram
//
// The output image is written to price_histogram.svg in the working
// directory.

use std::error::Error;

use plotters::prelude::*;
use pricegrid_lib::{sweep_with_config, Histogram, MarketParams, SweepConfig};

const BINS: usize = 20;

fn bars(hist: &Histogram, color: RGBColor) -> Vec<Rectangle<(f64, f64)>> {
    hist.counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Rectangle::new(
                [(hist.edges[i], 0.0), (hist.edges[i + 1], count as f64)],
                color.mix(0.5).filled(),
            )
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let params = MarketParams::default();
    let result = sweep_with_config(params, &SweepConfig::fine())?;

    let call_hist = Histogram::from_values(result.call_grid.values(), BINS)
        .ok_or("empty call grid")?;
    let put_hist = Histogram::from_values(result.put_grid.values(), BINS)
        .ok_or("empty put grid")?;

    let x_min = call_hist.edges[0].min(put_hist.edges[0]);
    let x_max = call_hist
        .edges
        .last()
        .unwrap()
        .max(*put_hist.edges.last().unwrap());
    let y_max = call_hist
        .counts
        .iter()
        .chain(put_hist.counts.iter())
        .copied()
        .max()
        .unwrap_or(0) as f64;

    let root = SVGBackend::new("price_histogram.svg", (1024, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            "Distribution of Option Prices (call red, put blue)",
            ("sans-serif", 28),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("Option Price")
        .y_desc("Frequency")
        .draw()?;

    chart.draw_series(bars(&call_hist, RED))?;
    chart.draw_series(bars(&put_hist, BLUE))?;

    root.present()?;
    println!("Chart saved to price_histogram.svg");
    Ok(())
}
