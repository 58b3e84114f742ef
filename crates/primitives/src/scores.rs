//! Scored table definitions for the two composite methodologies.

use ndarray::{Array1, Array2, s};

use crate::Symbol;

/// Composite column name for the rank-sum methodology.
pub const RANK_SCORE_COL: &str = "Composite_Rank_Score";

/// Composite column name for the z-score methodology.
pub const Z_SCORE_COL: &str = "Composite_Z_Score";

/// Suffix appended to factor names for per-factor rank columns.
pub const RANK_SUFFIX: &str = "_Rank";

/// Suffix appended to factor names for per-factor z-score columns.
pub const Z_SUFFIX: &str = "_Z";

/// Factor table augmented with fractional ranks and composite rank scores.
///
/// Rows are in final order: ascending composite score (lower is better),
/// residual ties in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTable {
    /// Asset symbols (n_assets,).
    pub symbols: Vec<Symbol>,
    /// Factor names (n_factors,).
    pub factor_names: Vec<String>,
    /// Raw factor values (n_assets x n_factors).
    pub values: Array2<f64>,
    /// Per-factor fractional ranks, 1 = best (n_assets x n_factors).
    pub ranks: Array2<f64>,
    /// Composite rank score: unweighted sum of per-factor ranks (n_assets,).
    pub composite: Array1<f64>,
}

impl RankedTable {
    /// Create a new ranked table.
    #[must_use]
    pub fn new(
        symbols: Vec<Symbol>,
        factor_names: Vec<String>,
        values: Array2<f64>,
        ranks: Array2<f64>,
        composite: Array1<f64>,
    ) -> Self {
        debug_assert_eq!(symbols.len(), values.nrows());
        debug_assert_eq!(symbols.len(), ranks.nrows());
        debug_assert_eq!(symbols.len(), composite.len());
        debug_assert_eq!(factor_names.len(), values.ncols());
        debug_assert_eq!(factor_names.len(), ranks.ncols());
        Self { symbols, factor_names, values, ranks, composite }
    }

    /// Number of assets.
    #[must_use]
    pub const fn n_assets(&self) -> usize {
        self.symbols.len()
    }

    /// Number of factors.
    #[must_use]
    pub const fn n_factors(&self) -> usize {
        self.factor_names.len()
    }

    /// Whether the table has no assets.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Composite score for a specific symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.symbols.iter().position(|s| s.as_str() == symbol).map(|i| self.composite[i])
    }

    /// Truncate to the best `n` rows; smaller tables are returned whole.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        let k = n.min(self.n_assets());
        Self {
            symbols: self.symbols[..k].to_vec(),
            factor_names: self.factor_names.clone(),
            values: self.values.slice(s![..k, ..]).to_owned(),
            ranks: self.ranks.slice(s![..k, ..]).to_owned(),
            composite: self.composite.slice(s![..k]).to_owned(),
        }
    }
}

/// Factor table augmented with oriented z-scores and composite z-scores.
///
/// Rows are in final order: descending composite score (higher is better),
/// residual ties in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ZScoredTable {
    /// Asset symbols (n_assets,).
    pub symbols: Vec<Symbol>,
    /// Factor names (n_factors,).
    pub factor_names: Vec<String>,
    /// Raw factor values (n_assets x n_factors).
    pub values: Array2<f64>,
    /// Per-factor standardized values, signed so larger is always better
    /// (n_assets x n_factors).
    pub zscores: Array2<f64>,
    /// Composite z-score: unweighted sum of oriented z-scores (n_assets,).
    pub composite: Array1<f64>,
}

impl ZScoredTable {
    /// Create a new z-scored table.
    #[must_use]
    pub fn new(
        symbols: Vec<Symbol>,
        factor_names: Vec<String>,
        values: Array2<f64>,
        zscores: Array2<f64>,
        composite: Array1<f64>,
    ) -> Self {
        debug_assert_eq!(symbols.len(), values.nrows());
        debug_assert_eq!(symbols.len(), zscores.nrows());
        debug_assert_eq!(symbols.len(), composite.len());
        debug_assert_eq!(factor_names.len(), values.ncols());
        debug_assert_eq!(factor_names.len(), zscores.ncols());
        Self { symbols, factor_names, values, zscores, composite }
    }

    /// Number of assets.
    #[must_use]
    pub const fn n_assets(&self) -> usize {
        self.symbols.len()
    }

    /// Number of factors.
    #[must_use]
    pub const fn n_factors(&self) -> usize {
        self.factor_names.len()
    }

    /// Whether the table has no assets.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Composite score for a specific symbol.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.symbols.iter().position(|s| s.as_str() == symbol).map(|i| self.composite[i])
    }

    /// Truncate to the best `n` rows; smaller tables are returned whole.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        let k = n.min(self.n_assets());
        Self {
            symbols: self.symbols[..k].to_vec(),
            factor_names: self.factor_names.clone(),
            values: self.values.slice(s![..k, ..]).to_owned(),
            zscores: self.zscores.slice(s![..k, ..]).to_owned(),
            composite: self.composite.slice(s![..k]).to_owned(),
        }
    }
}
