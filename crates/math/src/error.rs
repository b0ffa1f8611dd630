//! Error types for numeric kernels.

/// Errors that can occur during numeric operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Quantile count must be at least one.
    #[error("invalid quantile count: {0} (must be >= 1)")]
    InvalidQuantileCount(usize),

    /// Probability outside [0, 1].
    #[error("invalid probability: {0} (must be in [0, 1])")]
    InvalidProbability(f64),

    /// Not enough observations for the statistic.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Empty data.
    #[error("empty data provided")]
    EmptyData,

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl MathError {
    /// Returns whether this error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InsufficientData { .. } | Self::EmptyData)
    }
}
