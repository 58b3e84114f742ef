//! Raw factor table fetcher.
//!
//! Downloads daily price history from Yahoo Finance and computes the
//! price-derived factors (momentum and volatility over one and three years)
//! into a raw factor table ready for the `screen` binary.
//!
//! Usage: `cargo run --features cli --bin fetch -- --symbols AAPL,MSFT`

use std::path::PathBuf;

use clap::Parser;
use ndarray::Array1;
use polars::prelude::*;
use screener::{io::write_csv, math::sample_std, primitives::SYMBOL_COL};
use time::{Duration, OffsetDateTime};
use yahoo_finance_api as yahoo;

/// Trading days per year.
const TRADING_DAYS_PER_YEAR: usize = 252;

/// Minimum quote history to compute the three-year factors.
const MIN_QUOTES: usize = 750;

/// Default universe organized by sector.
const TECH_STOCKS: &[&str] =
    &["AAPL", "MSFT", "GOOGL", "META", "NVDA", "AMD", "INTC", "CRM", "ADBE", "ORCL"];
const HEALTHCARE_STOCKS: &[&str] =
    &["JNJ", "UNH", "PFE", "MRK", "ABBV", "TMO", "ABT", "LLY", "BMY", "AMGN"];
const FINANCE_STOCKS: &[&str] =
    &["JPM", "BAC", "WFC", "GS", "MS", "C", "BLK", "SCHW", "AXP", "USB"];

#[derive(Parser)]
#[command(name = "fetch")]
#[command(about = "Fetch price history and build a raw factor table", long_about = None)]
#[command(version)]
struct Cli {
    /// Symbols to fetch; defaults to the built-in sector universe.
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<String>,

    /// Output path for the raw factor table.
    #[arg(long, default_value = "all_stocks_raw_factors.csv")]
    output: PathBuf,
}

/// Price-derived factor values for one asset.
struct PriceFactors {
    momentum_1y: f64,
    momentum_3y: f64,
    volatility_1y: f64,
    volatility_3y: f64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let symbols: Vec<String> = if cli.symbols.is_empty() {
        default_universe()
    } else {
        cli.symbols.clone()
    };

    let provider = yahoo::YahooConnector::new()?;
    let end = OffsetDateTime::now_utc();
    let start = end - Duration::days(3 * 365);

    println!("Fetching data from {} to {} for {} symbol(s)", start.date(), end.date(), symbols.len());

    let mut tickers: Vec<String> = Vec::new();
    let mut momentum_1y: Vec<f64> = Vec::new();
    let mut momentum_3y: Vec<f64> = Vec::new();
    let mut volatility_1y: Vec<f64> = Vec::new();
    let mut volatility_3y: Vec<f64> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();

    for symbol in &symbols {
        match provider.get_quote_history(symbol, start, end).await {
            Ok(response) => {
                let quotes = response.quotes().unwrap_or_default();
                if let Some(factors) = price_factors(&quotes) {
                    println!("  {} - {} quotes", symbol, quotes.len());
                    tickers.push(symbol.clone());
                    momentum_1y.push(factors.momentum_1y);
                    momentum_3y.push(factors.momentum_3y);
                    volatility_1y.push(factors.volatility_1y);
                    volatility_3y.push(factors.volatility_3y);
                } else {
                    println!("  {} - insufficient history ({} quotes)", symbol, quotes.len());
                    skipped.push(symbol.clone());
                }
            }
            Err(e) => {
                println!("  {} - failed: {}", symbol, e);
                skipped.push(symbol.clone());
            }
        }
    }

    if !skipped.is_empty() {
        println!("Skipped: {skipped:?}");
    }

    let mut frame = df! {
        SYMBOL_COL => &tickers,
        "Momentum_1Y" => &momentum_1y,
        "Momentum_3Y" => &momentum_3y,
        "Volatility_1Y" => &volatility_1y,
        "Volatility_3Y" => &volatility_3y,
    }?;

    write_csv(&mut frame, &cli.output)?;
    println!("Wrote {} row(s) to {}", frame.height(), cli.output.display());

    Ok(())
}

fn default_universe() -> Vec<String> {
    TECH_STOCKS
        .iter()
        .chain(HEALTHCARE_STOCKS.iter())
        .chain(FINANCE_STOCKS.iter())
        .map(ToString::to_string)
        .collect()
}

/// Compute momentum and volatility from adjusted closes.
///
/// Requires at least [`MIN_QUOTES`] quotes so the three-year factors are
/// meaningful; returns None otherwise.
fn price_factors(quotes: &[yahoo::Quote]) -> Option<PriceFactors> {
    if quotes.len() < MIN_QUOTES {
        return None;
    }

    let closes: Vec<f64> = quotes.iter().map(|q| q.adjclose).collect();
    let last = *closes.last()?;
    let first = *closes.first()?;
    let year_ago = closes[closes.len() - TRADING_DAYS_PER_YEAR];

    let returns: Vec<f64> =
        closes.windows(2).map(|pair| (pair[1] - pair[0]) / pair[0]).collect();
    let recent = Array1::from(returns[returns.len() - TRADING_DAYS_PER_YEAR..].to_vec());
    let full = Array1::from(returns);

    Some(PriceFactors {
        momentum_1y: last / year_ago - 1.0,
        momentum_3y: last / first - 1.0,
        volatility_1y: sample_std(&recent),
        volatility_3y: sample_std(&full),
    })
}
