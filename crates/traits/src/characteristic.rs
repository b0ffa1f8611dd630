//! Characteristic trait definitions.

use charsort_primitives::{PrimitivesError, ReturnBundle, ReturnFrequency};
use polars::prelude::*;

/// Errors that can occur while computing a characteristic.
#[derive(Debug, thiserror::Error)]
pub enum CharacteristicError {
    /// A frequency the characteristic needs was not selected.
    #[error("characteristic `{characteristic}` requires {frequency} returns")]
    MissingFrequency {
        /// Characteristic being computed.
        characteristic: String,
        /// Frequency that was not selected.
        frequency: ReturnFrequency,
    },

    /// Output column name is empty or otherwise unusable.
    #[error("invalid characteristic name: {0:?}")]
    InvalidName(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed input table.
    #[error(transparent)]
    Primitives(#[from] PrimitivesError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] PolarsError),
}

/// A per-ticker monthly characteristic derived from a [`ReturnBundle`].
pub trait Characteristic: Send + Sync + std::fmt::Debug {
    /// Default registry name, e.g. `vol`.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Return frequencies this characteristic reads.
    fn required_frequencies(&self) -> &[ReturnFrequency];

    /// Check that every required frequency is among `frequencies`.
    ///
    /// # Errors
    /// Returns `CharacteristicError::MissingFrequency` for the first required
    /// frequency that was not selected.
    fn check_frequencies(&self, frequencies: &[ReturnFrequency]) -> Result<(), CharacteristicError> {
        match self.required_frequencies().iter().find(|f| !frequencies.contains(f)) {
            Some(&frequency) => Err(CharacteristicError::MissingFrequency {
                characteristic: self.name().to_string(),
                frequency,
            }),
            None => Ok(()),
        }
    }

    /// Compute the characteristic table.
    ///
    /// # Arguments
    /// * `bundle` - Daily and monthly returns
    /// * `name` - Suffix of the output columns, `{ticker}_{name}`
    /// * `frequencies` - Selected return frequencies
    ///
    /// # Returns
    /// DataFrame with | year_month | {ticker}_{name} ... |, one row per month
    /// with at least one value, sorted by month.
    ///
    /// # Errors
    /// Returns `CharacteristicError` if a required frequency is missing or
    /// the computation fails.
    fn compute(
        &self,
        bundle: &ReturnBundle,
        name: &str,
        frequencies: &[ReturnFrequency],
    ) -> Result<DataFrame, CharacteristicError>;
}

/// A characteristic with a configuration type.
pub trait ConfigurableCharacteristic: Characteristic {
    /// Configuration type for this characteristic.
    type Config: Default + Clone + Send + Sync;

    /// Create a new characteristic with the given configuration.
    fn with_config(config: Self::Config) -> Self
    where
        Self: Sized;

    /// Current configuration.
    fn config(&self) -> &Self::Config;
}
