//! Error types for portfolio construction.

use charsort_characteristics::EngineError;
use charsort_math::MathError;
use charsort_primitives::PrimitivesError;
use charsort_utils::UtilsError;

/// Errors that can occur while building portfolios.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Characteristic name is empty.
    #[error("characteristic name must not be empty")]
    EmptyName,

    /// Merged table has no ticker columns.
    #[error("merged table has no ticker return columns")]
    EmptyUniverse,

    /// Index is not a strictly increasing monthly index.
    #[error("invalid monthly index: {0}")]
    InvalidIndex(String),

    /// Return and characteristic columns cover different tickers.
    #[error("return columns {returns:?} do not match characteristic columns {characteristics:?}")]
    TickerMismatch {
        /// Tickers with a return column.
        returns: Vec<String>,
        /// Tickers with a characteristic column.
        characteristics: Vec<String>,
    },

    /// Too few quantiles for a long-short spread.
    #[error("invalid quantile count: {0} (must be >= 2)")]
    InvalidQuantiles(usize),

    /// Characteristic engine error.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Table utility error.
    #[error("utils error: {0}")]
    Utils(#[from] UtilsError),

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Malformed input table.
    #[error(transparent)]
    Primitives(#[from] PrimitivesError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl ModelError {
    /// Returns whether this error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Math(err) => err.is_recoverable(),
            _ => false,
        }
    }
}
