//! CSV input and export adapters.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use screener_primitives::{
    RANK_SCORE_COL, RANK_SUFFIX, RankedTable, SYMBOL_COL, Symbol, Z_SCORE_COL, Z_SUFFIX,
    ZScoredTable,
};

use crate::IoError;

/// Read a raw factor table from a headered CSV file.
///
/// # Errors
/// `IoError::InputNotFound` if `path` does not exist; a polars error if the
/// file cannot be parsed.
pub fn read_factor_table(path: impl AsRef<Path>) -> Result<DataFrame, IoError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::InputNotFound(path.to_path_buf()));
    }

    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    Ok(frame)
}

/// Read a ticker list from a one-column CSV with a `Ticker` header.
///
/// Null and empty entries are skipped.
///
/// # Errors
/// `IoError::InputNotFound` if `path` does not exist.
pub fn read_symbol_list(path: impl AsRef<Path>) -> Result<Vec<String>, IoError> {
    let frame = read_factor_table(path)?;
    let symbols = frame
        .column(SYMBOL_COL)?
        .str()?
        .into_iter()
        .filter_map(|s| s.map(str::trim))
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();

    Ok(symbols)
}

/// Convert a ranked selection to an exportable DataFrame.
///
/// Columns: `Ticker`, the raw factor values, one `{name}_Rank` column per
/// factor, and `Composite_Rank_Score`, rows in final sorted order.
///
/// # Errors
/// Returns a polars error if the frame cannot be assembled.
pub fn ranked_frame(table: &RankedTable) -> Result<DataFrame, IoError> {
    let mut columns = symbol_and_raw_columns(&table.symbols, &table.factor_names, &table.values);

    for (j, name) in table.factor_names.iter().enumerate() {
        columns.push(Column::new(
            format!("{name}{RANK_SUFFIX}").into(),
            table.ranks.column(j).to_vec(),
        ));
    }
    columns.push(Column::new(RANK_SCORE_COL.into(), table.composite.to_vec()));

    Ok(DataFrame::new(columns)?)
}

/// Convert a z-scored selection to an exportable DataFrame.
///
/// Columns: `Ticker`, the raw factor values, one `{name}_Z` column per
/// factor, and `Composite_Z_Score`, rows in final sorted order.
///
/// # Errors
/// Returns a polars error if the frame cannot be assembled.
pub fn zscored_frame(table: &ZScoredTable) -> Result<DataFrame, IoError> {
    let mut columns = symbol_and_raw_columns(&table.symbols, &table.factor_names, &table.values);

    for (j, name) in table.factor_names.iter().enumerate() {
        columns.push(Column::new(
            format!("{name}{Z_SUFFIX}").into(),
            table.zscores.column(j).to_vec(),
        ));
    }
    columns.push(Column::new(Z_SCORE_COL.into(), table.composite.to_vec()));

    Ok(DataFrame::new(columns)?)
}

/// Write a DataFrame to a headered CSV file.
///
/// # Errors
/// Returns an error if the file cannot be created or serialized.
pub fn write_csv(frame: &mut DataFrame, path: impl AsRef<Path>) -> Result<(), IoError> {
    let mut file = File::create(path.as_ref())?;
    CsvWriter::new(&mut file).include_header(true).finish(frame)?;
    Ok(())
}

fn symbol_and_raw_columns(
    symbols: &[Symbol],
    factor_names: &[String],
    values: &ndarray::Array2<f64>,
) -> Vec<Column> {
    let mut columns = Vec::with_capacity(2 * factor_names.len() + 2);
    columns.push(Column::new(
        SYMBOL_COL.into(),
        symbols.iter().map(Symbol::as_str).collect::<Vec<_>>(),
    ));
    for (j, name) in factor_names.iter().enumerate() {
        columns.push(Column::new(name.as_str().into(), values.column(j).to_vec()));
    }
    columns
}
