//! Error types for the scoring engine.

use screener_traits::ScoreError;

/// Errors that can occur during a screening run.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Input column has no polarity registered.
    #[error("input column not covered by polarity registry: {0}")]
    UnregisteredColumn(String),

    /// Registered factor has no column in the input.
    #[error("registered factor missing from input: {0}")]
    MissingFactorColumn(String),

    /// Identifier column is missing from the input.
    #[error("missing identifier column: {0}")]
    MissingSymbolColumn(String),

    /// Polarity registry has no factors.
    #[error("polarity registry is empty")]
    EmptyRegistry,

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scoring error.
    #[error("scoring error: {0}")]
    Score(#[from] ScoreError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Array shape error.
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl EngineError {
    /// Whether this is a configuration error that must stop the run before
    /// any output is written.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::UnregisteredColumn(_)
                | Self::MissingFactorColumn(_)
                | Self::MissingSymbolColumn(_)
                | Self::EmptyRegistry
                | Self::InvalidConfig(_)
        )
    }
}
