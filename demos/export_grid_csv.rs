// Example: export_grid_csv.rs
// Runs a sweep for a scenario and writes both price grids as CSV files,
// one row per volatility with the spot axis as the header row.
//
// Usage:
//     cargo run --example export_grid_csv [scenario.toml]
//
// Without an argument the default scenario is used (spot 100, strike 100,
// one year, 5% rate, 20% vol, spot range 80-120, vol range 0.1-0.3). The
// output files are call_grid.csv and put_grid.csv in the working directory.

use std::env;

use anyhow::Result;
use pricegrid_lib::{sweep_with_config, PriceGrid, ScenarioConfig};

fn write_grid(path: &str, grid: &PriceGrid, spot_axis: &[f64], vol_axis: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["volatility".to_string()];
    header.extend(spot_axis.iter().map(|s| format!("{s:.4}")));
    writer.write_record(&header)?;

    for (i, vol) in vol_axis.iter().enumerate() {
        let mut record = vec![format!("{vol:.6}")];
        record.extend(grid.row(i).iter().map(|price| format!("{price:.6}")));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    println!("Grid saved to {path}");
    Ok(())
}

fn main() -> Result<()> {
    let scenario = match env::args().nth(1) {
        Some(path) => ScenarioConfig::from_path(&path)?,
        None => ScenarioConfig::default(),
    };

    println!(
        "Scenario: spot {}, strike {}, maturity {}y, rate {}, vol {}",
        scenario.params.spot,
        scenario.params.strike,
        scenario.params.maturity,
        scenario.params.rate,
        scenario.params.volatility
    );

    let result = sweep_with_config(scenario.params, &scenario.sweep)?;

    write_grid("call_grid.csv", &result.call_grid, &result.spot_axis, &result.vol_axis)?;
    write_grid("put_grid.csv", &result.put_grid, &result.spot_axis, &result.vol_axis)?;
    Ok(())
}
