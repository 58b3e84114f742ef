//! Cleaned cross-sectional factor table.

use ndarray::{Array2, ArrayView1};

use crate::Symbol;

/// Name of the identifier column in raw and exported tables.
pub const SYMBOL_COL: &str = "Ticker";

/// Cleaned per-asset factor observations (n_assets x n_factors).
///
/// Every value is finite: records with missing values are dropped before
/// this table is constructed. Factor columns follow the polarity registry's
/// insertion order; rows keep the input table's order.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTable {
    /// Asset symbols (n_assets,).
    pub symbols: Vec<Symbol>,
    /// Factor names (n_factors,).
    pub factor_names: Vec<String>,
    /// Raw factor values (n_assets x n_factors).
    pub values: Array2<f64>,
}

impl FactorTable {
    /// Create a new factor table.
    #[must_use]
    pub fn new(symbols: Vec<Symbol>, factor_names: Vec<String>, values: Array2<f64>) -> Self {
        debug_assert_eq!(symbols.len(), values.nrows());
        debug_assert_eq!(factor_names.len(), values.ncols());
        Self { symbols, factor_names, values }
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

    /// Get the column index for a factor name.
    #[must_use]
    pub fn factor_index(&self, name: &str) -> Option<usize> {
        self.factor_names.iter().position(|n| n == name)
    }

    /// View of a factor column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.factor_index(name).map(|j| self.values.column(j))
    }

    /// Get the raw value for a specific symbol and factor.
    #[must_use]
    pub fn get(&self, symbol: &str, factor: &str) -> Option<f64> {
        let i = self.symbols.iter().position(|s| s.as_str() == symbol)?;
        let j = self.factor_index(factor)?;
        Some(self.values[[i, j]])
    }
}
