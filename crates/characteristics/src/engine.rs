//! Characteristic engine: validate, compute and merge.

use std::sync::Arc;

use charsort_primitives::{ReturnBundle, ReturnFrequency};
use charsort_traits::Characteristic;
use polars::prelude::*;
use tracing::{debug, info};

use crate::{CharacteristicRegistry, EngineError, merge_tables};

/// Builds lagged characteristic tables from return bundles.
#[derive(Debug, Clone)]
pub struct CharacteristicEngine {
    registry: CharacteristicRegistry,
}

impl CharacteristicEngine {
    /// Create an engine with the built-in characteristics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(CharacteristicRegistry::with_defaults())
    }

    /// Create an engine backed by `registry`.
    #[must_use]
    pub const fn with_registry(registry: CharacteristicRegistry) -> Self {
        Self { registry }
    }

    /// The characteristic registry.
    #[must_use]
    pub const fn registry(&self) -> &CharacteristicRegistry {
        &self.registry
    }

    /// Validate a characteristic request and resolve its implementation.
    ///
    /// # Errors
    /// Returns an error if `name` is empty or not registered, if a frequency
    /// is selected twice, or if the bundle's tables cover different tickers.
    pub fn sanity_check(
        &self,
        bundle: &ReturnBundle,
        name: &str,
        frequencies: &[ReturnFrequency],
    ) -> Result<Arc<dyn Characteristic>, EngineError> {
        if name.is_empty() {
            return Err(EngineError::EmptyName);
        }
        let characteristic = self.registry.get(name).ok_or_else(|| {
            EngineError::UnknownCharacteristic {
                name: name.to_string(),
                available: self.registry.names(),
            }
        })?;

        for (i, frequency) in frequencies.iter().enumerate() {
            if frequencies[..i].contains(frequency) {
                return Err(EngineError::DuplicateFrequency(*frequency));
            }
        }

        bundle.validate()?;
        Ok(characteristic)
    }

    /// Compute the characteristic table for `name`.
    ///
    /// # Returns
    /// DataFrame with | year_month | {ticker}_{name} ... |.
    ///
    /// # Errors
    /// Returns an error if validation or the computation fails.
    pub fn compute(
        &self,
        bundle: &ReturnBundle,
        name: &str,
        frequencies: &[ReturnFrequency],
    ) -> Result<DataFrame, EngineError> {
        let characteristic = self.sanity_check(bundle, name, frequencies)?;
        debug!(
            "Computing {} ({}) for {} tickers",
            name,
            characteristic.description(),
            bundle.tickers().len()
        );
        Ok(characteristic.compute(bundle, name, frequencies)?)
    }

    /// Compute the characteristic and merge it, lagged, onto monthly returns.
    ///
    /// # Returns
    /// The merged table described in [`merge_tables`].
    ///
    /// # Errors
    /// Returns the first validation, computation or merge error.
    pub fn run(
        &self,
        bundle: &ReturnBundle,
        name: &str,
        frequencies: &[ReturnFrequency],
    ) -> Result<DataFrame, EngineError> {
        let characteristics = self.compute(bundle, name, frequencies)?;
        info!(
            "Computed characteristic {} over {} months",
            name,
            characteristics.height()
        );

        let merged = merge_tables(bundle, &characteristics, name)?;
        info!("Merged {} onto {} monthly rows", name, merged.height());
        Ok(merged)
    }
}

impl Default for CharacteristicEngine {
    fn default() -> Self {
        Self::new()
    }
}
