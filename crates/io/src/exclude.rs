//! Universe exclusion by symbol.

use std::collections::HashSet;

use polars::prelude::*;
use screener_primitives::SYMBOL_COL;

use crate::IoError;

/// Drop rows whose symbol appears in the exclusion list.
///
/// Matching is exact and case-sensitive; symbols not present in the frame
/// are ignored. Surviving rows keep their input order.
///
/// # Errors
/// Returns a polars error if the frame has no `Ticker` column or it is not
/// a string column.
pub fn remove_symbols(frame: &DataFrame, symbols: &[&str]) -> Result<DataFrame, IoError> {
    if symbols.is_empty() {
        return Ok(frame.clone());
    }

    let excluded: HashSet<&str> = symbols.iter().copied().collect();
    let mask: Vec<bool> = frame
        .column(SYMBOL_COL)?
        .str()?
        .into_iter()
        .map(|s| s.is_none_or(|ticker| !excluded.contains(ticker)))
        .collect();

    let mask = BooleanChunked::new("mask".into(), mask);
    Ok(frame.filter(&mask)?)
}
