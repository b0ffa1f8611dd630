//! End-to-end portfolio pipeline.

use charsort_characteristics::CharacteristicEngine;
use charsort_math::TStatSummary;
use charsort_primitives::{ReturnBundle, ReturnFrequency};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{LS_COL, ModelError, PortfolioBuilder, SortConfig, t_stat};

/// Configuration for [`PortfolioPipeline`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Registered characteristic to sort on.
    pub characteristic: String,
    /// Return frequencies the characteristic may read.
    pub frequencies: Vec<ReturnFrequency>,
    /// Number of quantiles.
    pub quantiles: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            characteristic: "vol".to_string(),
            frequencies: vec![ReturnFrequency::Daily],
            quantiles: 3,
        }
    }
}

/// Tables produced by a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Monthly returns with lagged characteristics.
    pub merged: DataFrame,
    /// Quantile portfolios and the long-short spread.
    pub portfolios: DataFrame,
}

impl PipelineOutput {
    /// t-statistic summary of the long-short spread.
    ///
    /// # Errors
    /// Returns an error with fewer than two long-short observations.
    pub fn summary(&self) -> Result<TStatSummary, ModelError> {
        t_stat(&self.portfolios, LS_COL)
    }
}

/// Characteristic computation followed by portfolio construction.
#[derive(Debug, Clone, Default)]
pub struct PortfolioPipeline {
    config: PipelineConfig,
    engine: CharacteristicEngine,
}

impl PortfolioPipeline {
    /// Create a pipeline with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom configuration.
    #[must_use]
    pub fn with_config(config: PipelineConfig) -> Self {
        Self::with_engine(config, CharacteristicEngine::new())
    }

    /// Create a pipeline with custom configuration and engine.
    #[must_use]
    pub const fn with_engine(config: PipelineConfig, engine: CharacteristicEngine) -> Self {
        Self { config, engine }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline on `bundle`.
    ///
    /// # Errors
    /// Returns the first error raised by the characteristic engine or the
    /// portfolio builder.
    pub fn run(&self, bundle: &ReturnBundle) -> Result<PipelineOutput, ModelError> {
        let name = self.config.characteristic.as_str();
        info!("Running {} sort into {} quantiles", name, self.config.quantiles);

        let merged = self.engine.run(bundle, name, &self.config.frequencies)?;
        let builder = PortfolioBuilder::with_config(SortConfig { quantiles: self.config.quantiles });
        let portfolios = builder.build(&merged, name)?;

        Ok(PipelineOutput { merged, portfolios })
    }
}
