//! Error types for table input and export.

use std::path::PathBuf;

/// Errors that can occur reading or writing factor tables.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Input table does not exist.
    ///
    /// Callers treat this as the valid "no data to analyze" terminal state
    /// rather than a crash.
    #[error("input table not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IoError::InputNotFound(PathBuf::from("missing.csv"));
        assert!(err.to_string().contains("missing.csv"));
    }
}
