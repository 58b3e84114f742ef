//! Composite scoring trait definitions.

use screener_primitives::{FactorTable, PolarityRegistry};

/// Errors that can occur during composite scoring.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// A table factor has no polarity registered.
    #[error("factor not registered: {0}")]
    UnregisteredFactor(String),

    /// Numerical failure (NaN, Inf) in a factor column.
    #[error("numerical error in factor {factor}: {reason}")]
    Numerical {
        /// Factor column that failed.
        factor: String,
        /// Underlying failure description.
        reason: String,
    },
}

/// Direction in which composite scores order rows best-to-worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDirection {
    /// Lower composite scores are better (rank-sum methodology).
    Ascending,
    /// Higher composite scores are better (z-score methodology).
    Descending,
}

/// A scoring methodology: compute a composite score per asset, then sort.
///
/// Implementations must be pure functions of the cleaned table and the
/// polarity registry. The returned output holds rows in final best-to-worst
/// order, with residual composite ties broken by input order.
pub trait CompositeScorer: Send + Sync {
    /// Scored table type produced by this methodology.
    type Output;

    /// Methodology name.
    fn name(&self) -> &str;

    /// Name of the composite score column in exported tables.
    fn score_column(&self) -> &str;

    /// Sort direction that puts the best composite score first.
    fn direction(&self) -> ScoreDirection;

    /// Score the cleaned table, producing rows sorted best-to-worst.
    ///
    /// An empty table must yield an empty output, not an error.
    ///
    /// # Errors
    /// Returns `ScoreError` if a table factor is not registered or a factor
    /// column is numerically unusable.
    fn score(
        &self,
        table: &FactorTable,
        registry: &PolarityRegistry,
    ) -> Result<Self::Output, ScoreError>;
}
