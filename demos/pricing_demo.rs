// demos/pricing_demo.rs

//! Demonstration of single-point pricing and a sensitivity sweep
//!
//! This example shows how to:
//! 1. Price a European call and put at one market point
//! 2. Sweep the pricing function over spot and volatility ranges
//! 3. Read the grids, slices, and summary statistics the charts consume

use anyhow::Result;
use pricegrid_lib::{price, sweep_with_config, GridSummary, MarketParams, SweepConfig};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing and Sweep Demo");
    println!("====================================");

    let params = MarketParams {
        spot: 100.0,
        strike: 100.0,
        maturity: 1.0,
        rate: 0.05,
        volatility: 0.2,
    };

    let quote = price(params)?;
    println!("\nHeadline quote (S={}, K={}, T={}y):", params.spot, params.strike, params.maturity);
    println!("  Call value: {:.4}", quote.call);
    println!("  Put value:  {:.4}", quote.put);

    let config = SweepConfig::default();
    let result = sweep_with_config(params, &config)?;

    println!(
        "\nSweep: {} volatilities x {} spots = {} cells per grid",
        result.vol_axis.len(),
        result.spot_axis.len(),
        result.vol_axis.len() * result.spot_axis.len()
    );

    println!("\nPrice vs. spot at base volatility {:.0}%:", params.volatility * 100.0);
    println!("{:<12} {:<12} {:<12}", "Spot", "Call", "Put");
    println!("{}", "-".repeat(36));
    for (spot, slice) in result.spot_axis.iter().zip(result.spot_slice.iter()) {
        println!("{:<12.2} {:<12.4} {:<12.4}", spot, slice.call, slice.put);
    }

    if let Some(summary) = GridSummary::from_values(result.call_grid.values()) {
        println!("\nCall grid distribution:");
        println!("  min {:.4}  max {:.4}", summary.min, summary.max);
        println!("  mean {:.4}  std dev {:.4}", summary.mean, summary.std_dev);
    }
    if let Some(summary) = GridSummary::from_values(result.put_grid.values()) {
        println!("Put grid distribution:");
        println!("  min {:.4}  max {:.4}", summary.min, summary.max);
        println!("  mean {:.4}  std dev {:.4}", summary.mean, summary.std_dev);
    }

    Ok(())
}
