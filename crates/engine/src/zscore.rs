//! Standardized (z-score) sum scoring methodology.

use ndarray::{Array2, Axis};
use screener_math::{is_degenerate, winsorize, zscore};
use screener_primitives::{FactorTable, PolarityRegistry, Z_SCORE_COL, ZScoredTable};
use screener_traits::{CompositeScorer, ScoreDirection, ScoreError};

use crate::select::{gather_rows, sort_indices};

/// Configuration for the z-score methodology.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZScoreConfig {
    /// Winsorization percentile applied before standardization
    /// (None to disable, matching the upstream pipeline).
    pub winsorize: Option<f64>,
}

/// Output of z-scoring: the scored table plus any zero-variance factors.
///
/// Degenerate factors contribute z = 0 for every asset; they are reported
/// here as a warning, never as a failure.
#[derive(Debug, Clone)]
pub struct ZScoreOutput {
    /// Scored table, sorted descending by composite z-score.
    pub table: ZScoredTable,
    /// Factors with no cross-sectional variance in the cleaned population.
    pub degenerate_factors: Vec<String>,
}

/// Standardized-sum composite scorer.
///
/// Each factor column is standardized to zero mean and unit standard
/// deviation, then oriented via its polarity so that larger is always
/// better. The composite is the unweighted sum of oriented z-scores and is
/// sorted descending.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZScoreScorer {
    config: ZScoreConfig,
}

impl ZScoreScorer {
    /// Create a new z-score scorer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ZScoreConfig::default())
    }

    /// Create a new z-score scorer with custom configuration.
    #[must_use]
    pub const fn with_config(config: ZScoreConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &ZScoreConfig {
        &self.config
    }
}

impl CompositeScorer for ZScoreScorer {
    type Output = ZScoreOutput;

    fn name(&self) -> &str {
        "zscore"
    }

    fn score_column(&self) -> &str {
        Z_SCORE_COL
    }

    fn direction(&self) -> ScoreDirection {
        ScoreDirection::Descending
    }

    fn score(
        &self,
        table: &FactorTable,
        registry: &PolarityRegistry,
    ) -> Result<ZScoreOutput, ScoreError> {
        let n = table.n_assets();
        let m = table.n_factors();

        let mut zscores = Array2::zeros((n, m));
        let mut degenerate_factors = Vec::new();

        for (j, name) in table.factor_names.iter().enumerate() {
            let polarity = registry
                .get(name)
                .ok_or_else(|| ScoreError::UnregisteredFactor(name.clone()))?;

            let mut column = table.values.column(j).to_owned();
            if let Some(pct) = self.config.winsorize {
                column = winsorize(&column, pct).map_err(|e| ScoreError::Numerical {
                    factor: name.clone(),
                    reason: e.to_string(),
                })?;
            }

            if is_degenerate(&column) && n > 0 {
                degenerate_factors.push(name.clone());
            }

            let standardized = zscore(&column).map_err(|e| ScoreError::Numerical {
                factor: name.clone(),
                reason: e.to_string(),
            })?;
            zscores
                .column_mut(j)
                .assign(&standardized.mapv(|z| polarity.orient(z)));
        }

        let composite = zscores.sum_axis(Axis(1));
        let order = sort_indices(&composite, self.direction());

        let scored = ZScoredTable::new(
            order.iter().map(|&i| table.symbols[i].clone()).collect(),
            table.factor_names.clone(),
            gather_rows(&table.values, &order),
            gather_rows(&zscores, &order),
            order.iter().map(|&i| composite[i]).collect(),
        );

        Ok(ZScoreOutput { table: scored, degenerate_factors })
    }
}
