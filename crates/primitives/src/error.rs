//! Error types for core table types.

/// Errors raised while building or validating core tables.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Index column has the wrong type or contains gaps.
    #[error("invalid index `{column}`: {reason}")]
    InvalidIndex {
        /// Index column name.
        column: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Return bundle keys are not exactly `Daily` and `Monthly`.
    #[error("return bundle must hold exactly the `Daily` and `Monthly` tables, got {0:?}")]
    InvalidBundleKeys(Vec<String>),

    /// Daily and monthly tables cover different tickers.
    #[error("daily and monthly tables cover different tickers: daily {daily:?}, monthly {monthly:?}")]
    TickerMismatch {
        /// Tickers in the daily table.
        daily: Vec<String>,
        /// Tickers in the monthly table.
        monthly: Vec<String>,
    },

    /// Unknown return frequency name.
    #[error("unknown return frequency `{0}` (expected `Daily` or `Monthly`)")]
    UnknownFrequency(String),
}
