//! Volatility-sorted long-short portfolios
//!
//! This example walks through the full charsort workflow on synthetic data:
//! 1. Simulate daily adjusted close prices for a small universe
//! 2. Derive daily and monthly returns
//! 3. Compute monthly volatility, lagged one month
//! 4. Sort stocks into terciles and build equal-weighted portfolios
//! 5. Summarize the long-short spread
//!
//! Run with: `cargo run --example volatility_sort`

#![allow(missing_docs)]

use charsort::model::{PipelineConfig, PortfolioPipeline, long_short_summary};
use charsort::primitives::{DATE_COL, Date, MIN_DAILY_OBSERVATIONS, ReturnBundle, YEAR_MONTH_COL};
use charsort::utils::{average_by_year, buy_and_hold, cumulative_returns};
use polars::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

const N_TICKERS: usize = 12;
const N_MONTHS: usize = 36;
const DAYS_PER_MONTH: u32 = 21;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    print_header();

    // ========================================================================
    // Step 1: Simulate prices
    // ========================================================================
    println!("\n[1/5] Simulating prices for {N_TICKERS} tickers over {N_MONTHS} months...");
    let prices = simulate_prices(N_TICKERS, N_MONTHS)?;
    println!("  Price table: {} rows x {} columns", prices.height(), prices.width());

    // ========================================================================
    // Step 2: Derive returns
    // ========================================================================
    println!("\n[2/5] Deriving daily and monthly returns...");
    let bundle = ReturnBundle::from_prices(&prices, MIN_DAILY_OBSERVATIONS)?;
    println!("  Daily returns:   {} rows", bundle.daily().height());
    println!("  Monthly returns: {} rows", bundle.monthly().height());

    // ========================================================================
    // Step 3 and 4: Characteristic and portfolios
    // ========================================================================
    println!("\n[3/5] Computing lagged volatility and sorting into terciles...");
    let config = PipelineConfig { quantiles: 3, ..PipelineConfig::default() };
    let output = PortfolioPipeline::with_config(config).run(&bundle)?;
    println!("  Merged table: {} rows x {} columns", output.merged.height(), output.merged.width());

    println!("\n[4/5] Equal-weighted portfolios:");
    println!("{}", output.portfolios.head(Some(6)));

    // ========================================================================
    // Step 5: Summaries
    // ========================================================================
    println!("\n[5/5] Summaries");

    let cumulative = cumulative_returns(&output.portfolios, YEAR_MONTH_COL)?;
    println!("\n  Cumulative returns (last 3 months):");
    println!("{}", cumulative.tail(Some(3)));

    for year in 2001..=2003 {
        let avg = average_by_year(&output.portfolios, YEAR_MONTH_COL, year)?;
        println!("\n  Average monthly return in {year}:");
        println!("{avg}");
    }

    println!("\n  Buy-and-hold returns:");
    println!("{}", buy_and_hold(&output.portfolios, YEAR_MONTH_COL)?);

    println!("\n  Long-short spread:");
    println!("{}", long_short_summary(&output.portfolios)?);

    Ok(())
}

fn print_header() {
    println!("################################################################");
    println!("#                                                              #");
    println!("#             Volatility-Sorted Long-Short Portfolios          #");
    println!("#                                                              #");
    println!("################################################################");
}

/// Geometric random walk prices, one ticker per column.
///
/// Ticker `i` has daily volatility rising from 1% to 4% across the universe
/// and a drift that falls with it.
fn simulate_prices(n_tickers: usize, n_months: usize) -> Result<DataFrame, Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(42);

    let mut dates = Vec::with_capacity(n_months * DAYS_PER_MONTH as usize);
    for m in 0..n_months {
        let year = 2001 + (m / 12) as i32;
        let month = (m % 12) as u32 + 1;
        for day in 1..=DAYS_PER_MONTH {
            dates.push(Date::from_ymd_opt(year, month, day).ok_or("invalid trading day")?);
        }
    }

    let mut columns = vec![Column::new(DATE_COL.into(), dates.clone())];
    for i in 0..n_tickers {
        let sigma = 0.01 + 0.03 * i as f64 / (n_tickers - 1) as f64;
        let mu = 0.0008 - 0.01 * sigma;
        let shocks = Normal::new(mu, sigma)?;

        let mut price = 100.0;
        let series: Vec<f64> = dates
            .iter()
            .map(|_| {
                price *= shocks.sample(&mut rng).exp();
                price
            })
            .collect();
        columns.push(Column::new(format!("stock{:02}", i + 1).into(), series));
    }

    Ok(DataFrame::new(columns)?)
}
