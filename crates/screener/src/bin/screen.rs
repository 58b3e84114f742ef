//! Factor screening CLI tool.
//!
//! Reads a raw per-asset factor table, scores it under the rank-sum and
//! z-score methodologies, and writes the top-N selection of each to CSV.
//!
//! Usage: `cargo run --features cli --bin screen -- [TABLE] [--top-n N]`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use screener::{
    engine::{DEFAULT_TOP_N, Screener, ScreenerConfig},
    io::{IoError, ranked_frame, read_factor_table, remove_symbols, write_csv, zscored_frame},
    primitives::{Polarity, PolarityRegistry},
};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "screen")]
#[command(about = "Score a factor table and select the top assets", long_about = None)]
#[command(version)]
struct Cli {
    /// Raw factor table: a headered CSV with a Ticker column and one column
    /// per registered factor.
    #[arg(default_value = "all_stocks_raw_factors.csv")]
    input: PathBuf,

    /// Number of assets to select under each methodology.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Output path for the rank-sum selection.
    #[arg(long, default_value = "top_50_simple_rank.csv")]
    rank_output: PathBuf,

    /// Output path for the z-score selection.
    #[arg(long, default_value = "top_50_zscore_rank.csv")]
    zscore_output: PathBuf,

    /// Polarity registry file: a JSON array of
    /// `{"name": ..., "polarity": "lower_is_better" | "higher_is_better"}`
    /// entries replacing the built-in factor set.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Inline polarity entries applied on top of the registry,
    /// e.g. `--factors Beta:low,Profitability_ROE:high`.
    #[arg(long, value_delimiter = ',')]
    factors: Vec<String>,

    /// Symbols to drop from the universe before scoring.
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Winsorization percentile for the z-score methodology, in (0, 0.5).
    #[arg(long)]
    winsorize: Option<f64>,
}

/// One registry file entry.
#[derive(Deserialize)]
struct RegistryEntry {
    name: String,
    polarity: Polarity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let registry = build_registry(cli)?;

    let frame = match read_factor_table(&cli.input) {
        Ok(frame) => frame,
        // A missing input table is the normal "no data yet" state, not a crash.
        Err(IoError::InputNotFound(path)) => {
            println!("No factor table at {}; nothing to screen.", path.display());
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(e.into()),
    };

    let frame = if cli.exclude.is_empty() {
        frame
    } else {
        let excluded: Vec<&str> = cli.exclude.iter().map(String::as_str).collect();
        let filtered = remove_symbols(&frame, &excluded)?;
        println!("Excluded {} row(s) by symbol.", frame.height() - filtered.height());
        filtered
    };

    let config = ScreenerConfig { top_n: cli.top_n, winsorize: cli.winsorize };
    let outcome = Screener::with_config(config).run(&frame, &registry)?;

    println!(
        "Scored {} of {} asset(s); {} dropped for missing values.",
        outcome.clean.rows_out,
        outcome.clean.rows_in,
        outcome.clean.rows_dropped()
    );
    for factor in &outcome.degenerate_factors {
        println!("Warning: factor '{factor}' has no cross-sectional variance and contributes nothing.");
    }

    let mut rank = ranked_frame(&outcome.simple_rank)?;
    write_csv(&mut rank, &cli.rank_output)?;
    println!(
        "Wrote {} rank-sum pick(s) to {}",
        outcome.simple_rank.n_assets(),
        cli.rank_output.display()
    );

    let mut zscore = zscored_frame(&outcome.zscore)?;
    write_csv(&mut zscore, &cli.zscore_output)?;
    println!(
        "Wrote {} z-score pick(s) to {}",
        outcome.zscore.n_assets(),
        cli.zscore_output.display()
    );

    Ok(ExitCode::SUCCESS)
}

/// Assemble the polarity registry: built-in defaults, or a registry file,
/// with inline `--factors` entries layered on top.
fn build_registry(cli: &Cli) -> Result<PolarityRegistry, Box<dyn std::error::Error>> {
    let mut registry = match &cli.registry {
        Some(path) => registry_from_file(path)?,
        None if cli.factors.is_empty() => PolarityRegistry::with_defaults(),
        // Inline entries alone define the whole factor set.
        None => PolarityRegistry::new(),
    };

    for spec in &cli.factors {
        let (name, polarity) = parse_factor_spec(spec)?;
        registry.register(name, polarity);
    }

    Ok(registry)
}

fn registry_from_file(path: &Path) -> Result<PolarityRegistry, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let entries: Vec<RegistryEntry> = serde_json::from_str(&text)?;

    let mut registry = PolarityRegistry::new();
    for entry in entries {
        registry.register(&entry.name, entry.polarity);
    }
    Ok(registry)
}

/// Parse an inline `name:polarity` entry, accepting `low`/`high` shorthand.
fn parse_factor_spec(spec: &str) -> Result<(&str, Polarity), String> {
    let (name, polarity) = spec
        .split_once(':')
        .ok_or_else(|| format!("invalid factor spec '{spec}', expected name:low or name:high"))?;

    let polarity = match polarity.trim() {
        "low" | "lower_is_better" => Polarity::LowerIsBetter,
        "high" | "higher_is_better" => Polarity::HigherIsBetter,
        other => return Err(format!("unknown polarity '{other}' in factor spec '{spec}'")),
    };

    Ok((name.trim(), polarity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_spec_shorthand() {
        assert_eq!(parse_factor_spec("Beta:low").unwrap(), ("Beta", Polarity::LowerIsBetter));
        assert_eq!(
            parse_factor_spec("Momentum_1Y:higher_is_better").unwrap(),
            ("Momentum_1Y", Polarity::HigherIsBetter)
        );
    }

    #[test]
    fn factor_spec_rejects_garbage() {
        assert!(parse_factor_spec("Beta").is_err());
        assert!(parse_factor_spec("Beta:sideways").is_err());
    }
}
