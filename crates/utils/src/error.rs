//! Error types for utility functions.

use charsort_math::MathError;
use charsort_primitives::PrimitivesError;

/// Errors that can occur during utility operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Malformed input table.
    #[error(transparent)]
    Primitives(#[from] PrimitivesError),

    /// Numeric kernel error.
    #[error("math error: {0}")]
    Math(#[from] MathError),
}
