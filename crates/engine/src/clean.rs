//! Schema validation and missing-data exclusion.

use ndarray::Array2;
use polars::prelude::*;
use screener_primitives::{FactorTable, PolarityRegistry, SYMBOL_COL, Symbol};

use crate::EngineError;

/// Row counts observed while cleaning, reported for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    /// Rows in the raw input table.
    pub rows_in: usize,
    /// Rows surviving the completeness filter.
    pub rows_out: usize,
}

impl CleanReport {
    /// Number of rows dropped for missing or non-finite values.
    #[must_use]
    pub const fn rows_dropped(&self) -> usize {
        self.rows_in - self.rows_out
    }
}

/// Check that input columns and the polarity registry cover each other exactly.
///
/// Any factor column not in the registry, or registered factor not in the
/// input, silently changes which factors are scored, so both directions are
/// fatal configuration errors surfaced before scoring begins.
///
/// # Errors
/// `EngineError::EmptyRegistry`, `MissingSymbolColumn`, `UnregisteredColumn`
/// or `MissingFactorColumn` on mismatch.
pub fn validate_schema(frame: &DataFrame, registry: &PolarityRegistry) -> Result<(), EngineError> {
    if registry.is_empty() {
        return Err(EngineError::EmptyRegistry);
    }

    let columns: Vec<String> = frame.get_column_names().iter().map(|s| s.to_string()).collect();

    if !columns.iter().any(|c| c == SYMBOL_COL) {
        return Err(EngineError::MissingSymbolColumn(SYMBOL_COL.to_string()));
    }

    for column in &columns {
        if column != SYMBOL_COL && !registry.contains(column) {
            return Err(EngineError::UnregisteredColumn(column.clone()));
        }
    }

    for name in registry.factor_names() {
        if !columns.iter().any(|c| c == name) {
            return Err(EngineError::MissingFactorColumn(name.to_string()));
        }
    }

    Ok(())
}

/// Drop every record with a missing or non-finite value in any registered
/// factor, preserving input row order.
///
/// This is an unconditional filter: no imputation, no partial scoring. An
/// input with zero surviving rows yields an empty table, not an error.
///
/// # Errors
/// Configuration errors from [`validate_schema`], or a polars error if a
/// factor column cannot be cast to floats.
pub fn clean_table(
    frame: &DataFrame,
    registry: &PolarityRegistry,
) -> Result<(FactorTable, CleanReport), EngineError> {
    validate_schema(frame, registry)?;

    let rows_in = frame.height();
    let factor_names: Vec<String> = registry.factor_names().iter().map(ToString::to_string).collect();

    let symbols = frame.column(SYMBOL_COL)?.str()?.clone();

    let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(factor_names.len());
    for name in &factor_names {
        let cast = frame.column(name.as_str())?.cast(&DataType::Float64)?;
        columns.push(cast.f64()?.into_iter().collect());
    }

    let mut kept_symbols: Vec<Symbol> = Vec::with_capacity(rows_in);
    let mut flat: Vec<f64> = Vec::with_capacity(rows_in * factor_names.len());

    for i in 0..rows_in {
        let complete: Option<Vec<f64>> =
            columns.iter().map(|c| c[i].filter(|v| v.is_finite())).collect();

        if let (Some(symbol), Some(row)) = (symbols.get(i), complete) {
            kept_symbols.push(Symbol::new(symbol));
            flat.extend(row);
        }
    }

    let rows_out = kept_symbols.len();
    let values = Array2::from_shape_vec((rows_out, factor_names.len()), flat)?;

    Ok((FactorTable::new(kept_symbols, factor_names, values), CleanReport { rows_in, rows_out }))
}

#[cfg(test)]
mod tests {
    use screener_primitives::Polarity;

    use super::*;

    fn registry() -> PolarityRegistry {
        let mut registry = PolarityRegistry::new();
        registry.register("beta", Polarity::LowerIsBetter);
        registry.register("roe", Polarity::HigherIsBetter);
        registry
    }

    #[test]
    fn complete_rows_survive() {
        let frame = df! {
            "Ticker" => &["A", "B", "C"],
            "beta" => &[0.5, 1.0, 1.5],
            "roe" => &[0.1, 0.2, 0.3],
        }
        .unwrap();

        let (table, report) = clean_table(&frame, &registry()).unwrap();
        assert_eq!(report.rows_in, 3);
        assert_eq!(report.rows_out, 3);
        assert_eq!(report.rows_dropped(), 0);
        assert_eq!(table.get("B", "roe"), Some(0.2));
    }

    #[test]
    fn incomplete_rows_dropped_without_imputation() {
        // One missing value in a table of ten: nine survive, order preserved.
        let beta: Vec<Option<f64>> = (0..10).map(|i| Some(f64::from(i))).collect();
        let mut roe: Vec<Option<f64>> = (0..10).map(|i| Some(f64::from(i) / 10.0)).collect();
        roe[4] = None;

        let frame = df! {
            "Ticker" => &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"],
            "beta" => &beta,
            "roe" => &roe,
        }
        .unwrap();

        let (table, report) = clean_table(&frame, &registry()).unwrap();
        assert_eq!(report.rows_out, 9);
        assert_eq!(report.rows_dropped(), 1);
        assert!(table.get("E", "beta").is_none());
        assert_eq!(
            table.symbols.iter().map(Symbol::as_str).collect::<Vec<_>>(),
            vec!["A", "B", "C", "D", "F", "G", "H", "I", "J"]
        );
    }

    #[test]
    fn non_finite_treated_as_missing() {
        let frame = df! {
            "Ticker" => &["A", "B"],
            "beta" => &[0.5, f64::NAN],
            "roe" => &[0.1, 0.2],
        }
        .unwrap();

        let (table, report) = clean_table(&frame, &registry()).unwrap();
        assert_eq!(report.rows_out, 1);
        assert_eq!(table.symbols[0].as_str(), "A");
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let frame = df! {
            "Ticker" => &Vec::<String>::new(),
            "beta" => &Vec::<f64>::new(),
            "roe" => &Vec::<f64>::new(),
        }
        .unwrap();

        let (table, report) = clean_table(&frame, &registry()).unwrap();
        assert!(table.is_empty());
        assert_eq!(report.rows_in, 0);
    }

    #[test]
    fn unregistered_column_is_fatal() {
        let frame = df! {
            "Ticker" => &["A"],
            "beta" => &[0.5],
            "roe" => &[0.1],
            "surprise" => &[1.0],
        }
        .unwrap();

        let err = clean_table(&frame, &registry()).unwrap_err();
        assert!(matches!(err, EngineError::UnregisteredColumn(ref c) if c == "surprise"));
        assert!(err.is_config());
    }

    #[test]
    fn missing_factor_column_is_fatal() {
        let frame = df! {
            "Ticker" => &["A"],
            "beta" => &[0.5],
        }
        .unwrap();

        let err = clean_table(&frame, &registry()).unwrap_err();
        assert!(matches!(err, EngineError::MissingFactorColumn(ref c) if c == "roe"));
    }

    #[test]
    fn missing_symbol_column_is_fatal() {
        let frame = df! {
            "beta" => &[0.5],
            "roe" => &[0.1],
        }
        .unwrap();

        let err = validate_schema(&frame, &registry()).unwrap_err();
        assert!(matches!(err, EngineError::MissingSymbolColumn(_)));
    }

    #[test]
    fn empty_registry_is_fatal() {
        let frame = df! { "Ticker" => &["A"] }.unwrap();
        let err = validate_schema(&frame, &PolarityRegistry::new()).unwrap_err();
        assert!(matches!(err, EngineError::EmptyRegistry));
    }
}
