//! Error types for the characteristic engine.

use charsort_primitives::{PrimitivesError, ReturnFrequency};
use charsort_traits::CharacteristicError;
use polars::prelude::PolarsError;

/// Errors that can occur while building the characteristic table.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Characteristic name is empty.
    #[error("characteristic name must not be empty")]
    EmptyName,

    /// No characteristic is registered under the name.
    #[error("unknown characteristic `{name}` (available: {available:?})")]
    UnknownCharacteristic {
        /// Requested name.
        name: String,
        /// Registered names.
        available: Vec<String>,
    },

    /// A frequency was selected more than once.
    #[error("frequency {0} selected more than once")]
    DuplicateFrequency(ReturnFrequency),

    /// Characteristic computation error.
    #[error("characteristic error: {0}")]
    Characteristic(#[from] CharacteristicError),

    /// Malformed input table.
    #[error(transparent)]
    Primitives(#[from] PrimitivesError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] PolarsError),
}
