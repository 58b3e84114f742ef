//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Invalid percentile value.
    #[error("invalid percentile: {0} (must be in (0, 0.5))")]
    InvalidPercentile(f64),

    /// Non-finite value encountered where finite input is required.
    #[error("non-finite value at index {0}")]
    NonFinite(usize),
}
