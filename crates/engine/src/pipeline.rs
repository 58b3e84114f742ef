//! End-to-end screening pipeline.

use polars::prelude::*;
use screener_primitives::{PolarityRegistry, RankedTable, ZScoredTable};
use screener_traits::CompositeScorer;

use crate::{
    CleanReport, EngineError, RankScorer, ZScoreConfig, ZScoreScorer, clean_table,
};

/// Default portfolio size.
pub const DEFAULT_TOP_N: usize = 50;

/// Configuration for a screening run.
#[derive(Debug, Clone, Copy)]
pub struct ScreenerConfig {
    /// Number of assets to select under each methodology.
    pub top_n: usize,
    /// Winsorization percentile for the z-score methodology (None to disable).
    pub winsorize: Option<f64>,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N, winsorize: None }
    }
}

/// Outcome of a full screening run.
#[derive(Debug, Clone)]
pub struct ScreenOutcome {
    /// Top-N selection under the rank-sum methodology.
    pub simple_rank: RankedTable,
    /// Top-N selection under the z-score methodology.
    pub zscore: ZScoredTable,
    /// Row counts from the cleaning stage.
    pub clean: CleanReport,
    /// Zero-variance factors encountered by the z-score methodology.
    pub degenerate_factors: Vec<String>,
}

/// Two-methodology factor screener.
///
/// A single synchronous pass: validate and clean the raw table once, run
/// the rank-sum and z-score scorers independently over the same cleaned
/// table, truncate each sorted result to the configured top N. The run is a
/// pure function of the input table and the polarity registry.
#[derive(Debug, Clone, Copy)]
pub struct Screener {
    config: ScreenerConfig,
    rank: RankScorer,
    zscore: ZScoreScorer,
}

impl Screener {
    /// Create a new screener with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ScreenerConfig::default())
    }

    /// Create a new screener with custom configuration.
    #[must_use]
    pub const fn with_config(config: ScreenerConfig) -> Self {
        Self {
            config,
            rank: RankScorer::new(),
            zscore: ZScoreScorer::with_config(ZScoreConfig { winsorize: config.winsorize }),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ScreenerConfig {
        &self.config
    }

    /// Run both scoring methodologies over a raw factor table.
    ///
    /// An empty (or fully incomplete) input produces empty selections; only
    /// configuration mismatches between the table schema and the registry
    /// abort the run.
    ///
    /// # Errors
    /// Returns `EngineError` on schema/registry mismatch or scoring failure.
    pub fn run(
        &self,
        frame: &DataFrame,
        registry: &PolarityRegistry,
    ) -> Result<ScreenOutcome, EngineError> {
        if let Some(pct) = self.config.winsorize {
            if pct <= 0.0 || pct >= 0.5 {
                return Err(EngineError::InvalidConfig(format!(
                    "winsorize percentile {pct} not in (0, 0.5)"
                )));
            }
        }

        let (table, clean) = clean_table(frame, registry)?;

        let ranked = self.rank.score(&table, registry)?;
        let z = self.zscore.score(&table, registry)?;

        Ok(ScreenOutcome {
            simple_rank: ranked.head(self.config.top_n),
            zscore: z.table.head(self.config.top_n),
            clean,
            degenerate_factors: z.degenerate_factors,
        })
    }
}

impl Default for Screener {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use screener_primitives::Polarity;

    use super::*;

    fn registry() -> PolarityRegistry {
        let mut registry = PolarityRegistry::new();
        registry.register("beta", Polarity::LowerIsBetter);
        registry.register("pbr", Polarity::LowerIsBetter);
        registry
    }

    fn raw_frame() -> DataFrame {
        df! {
            "Ticker" => &["A", "B", "C"],
            "beta" => &[0.5, 1.0, 1.5],
            "pbr" => &[1.0, 2.0, 3.0],
        }
        .unwrap()
    }

    #[test]
    fn run_produces_both_selections() {
        let outcome = Screener::new().run(&raw_frame(), &registry()).unwrap();

        assert_eq!(outcome.clean.rows_out, 3);
        assert_eq!(outcome.simple_rank.composite, array![2.0, 4.0, 6.0]);
        assert_eq!(
            outcome.simple_rank.symbols.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        // Same best-to-worst order under the z-score methodology.
        assert_eq!(
            outcome.zscore.symbols.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert!(outcome.degenerate_factors.is_empty());
    }

    #[test]
    fn top_n_truncates_each_methodology() {
        let config = ScreenerConfig { top_n: 2, winsorize: None };
        let outcome = Screener::with_config(config).run(&raw_frame(), &registry()).unwrap();

        assert_eq!(outcome.simple_rank.n_assets(), 2);
        assert_eq!(outcome.zscore.n_assets(), 2);
    }

    #[test]
    fn small_universe_returns_fewer_than_n() {
        let outcome = Screener::new().run(&raw_frame(), &registry()).unwrap();

        // Universe of 3 with the default N of 50.
        assert_eq!(outcome.simple_rank.n_assets(), 3);
        assert_eq!(outcome.zscore.n_assets(), 3);
    }

    #[test]
    fn missing_values_excluded_not_fatal() {
        let frame = df! {
            "Ticker" => &["A", "B", "C"],
            "beta" => &[Some(0.5), None, Some(1.5)],
            "pbr" => &[1.0, 2.0, 3.0],
        }
        .unwrap();

        let outcome = Screener::new().run(&frame, &registry()).unwrap();
        assert_eq!(outcome.clean.rows_dropped(), 1);
        assert_eq!(outcome.simple_rank.n_assets(), 2);
        assert!(outcome.simple_rank.get("B").is_none());
    }

    #[test]
    fn empty_input_produces_empty_outcome() {
        let frame = df! {
            "Ticker" => &Vec::<String>::new(),
            "beta" => &Vec::<f64>::new(),
            "pbr" => &Vec::<f64>::new(),
        }
        .unwrap();

        let outcome = Screener::new().run(&frame, &registry()).unwrap();
        assert!(outcome.simple_rank.is_empty());
        assert!(outcome.zscore.is_empty());
    }

    #[test]
    fn degenerate_factor_surfaced_as_warning() {
        let frame = df! {
            "Ticker" => &["A", "B", "C"],
            "beta" => &[1.0, 1.0, 1.0],
            "pbr" => &[1.0, 2.0, 3.0],
        }
        .unwrap();

        let outcome = Screener::new().run(&frame, &registry()).unwrap();
        assert_eq!(outcome.degenerate_factors, vec!["beta".to_string()]);
    }

    #[test]
    fn schema_mismatch_aborts_before_scoring() {
        let frame = df! {
            "Ticker" => &["A"],
            "beta" => &[0.5],
        }
        .unwrap();

        let err = Screener::new().run(&frame, &registry()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn invalid_winsorize_percentile_is_a_config_error() {
        let config = ScreenerConfig { top_n: 50, winsorize: Some(0.7) };
        let err = Screener::with_config(config).run(&raw_frame(), &registry()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn rerun_is_deterministic() {
        let screener = Screener::new();
        let frame = raw_frame();
        let first = screener.run(&frame, &registry()).unwrap();
        let second = screener.run(&frame, &registry()).unwrap();

        assert_eq!(first.simple_rank, second.simple_rank);
        assert_eq!(first.zscore, second.zscore);
    }
}
