//! Ordinal rank-sum scoring methodology.

use ndarray::{Array2, Axis};
use screener_math::{RankDirection, fractional_rank};
use screener_primitives::{FactorTable, Polarity, PolarityRegistry, RANK_SCORE_COL, RankedTable};
use screener_traits::{CompositeScorer, ScoreDirection, ScoreError};

use crate::select::{gather_rows, sort_indices};

/// Rank-sum composite scorer.
///
/// Each factor column is converted to fractional ranks (1 = best) in the
/// direction implied by its polarity: ascending for lower-is-better factors,
/// descending for higher-is-better ones. The composite is the unweighted sum
/// of per-factor ranks, so a lower composite is uniformly better regardless
/// of the polarity mix.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankScorer;

impl RankScorer {
    /// Create a new rank scorer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CompositeScorer for RankScorer {
    type Output = RankedTable;

    fn name(&self) -> &str {
        "simple_rank"
    }

    fn score_column(&self) -> &str {
        RANK_SCORE_COL
    }

    fn direction(&self) -> ScoreDirection {
        ScoreDirection::Ascending
    }

    fn score(
        &self,
        table: &FactorTable,
        registry: &PolarityRegistry,
    ) -> Result<RankedTable, ScoreError> {
        let n = table.n_assets();
        let m = table.n_factors();

        let mut ranks = Array2::zeros((n, m));
        for (j, name) in table.factor_names.iter().enumerate() {
            let polarity = registry
                .get(name)
                .ok_or_else(|| ScoreError::UnregisteredFactor(name.clone()))?;
            let direction = match polarity {
                Polarity::LowerIsBetter => RankDirection::Ascending,
                Polarity::HigherIsBetter => RankDirection::Descending,
            };

            let column = fractional_rank(&table.values.column(j).to_owned(), direction)
                .map_err(|e| ScoreError::Numerical { factor: name.clone(), reason: e.to_string() })?;
            ranks.column_mut(j).assign(&column);
        }

        let composite = ranks.sum_axis(Axis(1));
        let order = sort_indices(&composite, self.direction());

        Ok(RankedTable::new(
            order.iter().map(|&i| table.symbols[i].clone()).collect(),
            table.factor_names.clone(),
            gather_rows(&table.values, &order),
            gather_rows(&ranks, &order),
            order.iter().map(|&i| composite[i]).collect(),
        ))
    }
}
