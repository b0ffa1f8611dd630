//! Total return volatility characteristic.

use charsort_primitives::{
    DATE_COL, MIN_DAILY_OBSERVATIONS, ReturnBundle, ReturnFrequency, Ticker, YEAR_MONTH_COL,
    value_columns, with_year_month,
};
use charsort_traits::{Characteristic, CharacteristicError, ConfigurableCharacteristic};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the volatility characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityConfig {
    /// Minimum daily returns in a month for its volatility to be reported.
    pub min_observations: usize,
    /// Delta degrees of freedom of the standard deviation.
    pub ddof: u8,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self { min_observations: MIN_DAILY_OBSERVATIONS, ddof: 1 }
    }
}

/// Monthly total return volatility.
///
/// For each ticker and calendar month, the sample standard deviation of the
/// ticker's daily returns. Null and `NaN` returns both count as missing.
/// Months with fewer than `min_observations` non-missing daily returns are
/// missing, and months missing for every ticker are dropped.
#[derive(Debug, Clone)]
pub struct VolatilityCharacteristic {
    config: VolatilityConfig,
}

impl VolatilityCharacteristic {
    /// Create a new volatility characteristic with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(VolatilityConfig::default())
    }
}

impl Default for VolatilityCharacteristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Characteristic for VolatilityCharacteristic {
    fn name(&self) -> &str {
        "vol"
    }

    fn description(&self) -> &str {
        "monthly standard deviation of daily returns"
    }

    fn required_frequencies(&self) -> &[ReturnFrequency] {
        &[ReturnFrequency::Daily]
    }

    fn compute(
        &self,
        bundle: &ReturnBundle,
        name: &str,
        frequencies: &[ReturnFrequency],
    ) -> Result<DataFrame, CharacteristicError> {
        self.check_frequencies(frequencies)?;
        if name.is_empty() {
            return Err(CharacteristicError::InvalidName(name.to_string()));
        }
        if self.config.min_observations <= usize::from(self.config.ddof) {
            return Err(CharacteristicError::InvalidConfig(format!(
                "min_observations ({}) must exceed ddof ({})",
                self.config.min_observations, self.config.ddof
            )));
        }

        let daily = bundle.get(ReturnFrequency::Daily);
        let tickers = value_columns(daily, DATE_COL);
        let min_obs = u32::try_from(self.config.min_observations).unwrap_or(u32::MAX);

        let columns: Vec<String> =
            tickers.iter().map(|t| Ticker::from(t.as_str()).characteristic_column(name)).collect();
        let aggs: Vec<Expr> = tickers
            .iter()
            .zip(&columns)
            .map(|(ticker, column)| {
                let ret = col(ticker.as_str()).cast(DataType::Float64).fill_nan(lit(NULL));
                when(ret.clone().count().gt_eq(lit(min_obs)))
                    .then(ret.std(self.config.ddof))
                    .otherwise(lit(NULL))
                    .alias(column.as_str())
            })
            .collect();

        // Keep months where at least one ticker has a value.
        let any_value = columns
            .iter()
            .map(|c| col(c.as_str()).is_not_null())
            .reduce(|acc, e| acc.or(e))
            .unwrap_or_else(|| lit(false));

        let table = with_year_month(daily)?
            .lazy()
            .group_by([col(YEAR_MONTH_COL)])
            .agg(aggs)
            .filter(any_value)
            .sort([YEAR_MONTH_COL], SortMultipleOptions::default())
            .collect()?;

        debug!(
            "Computed {} for {} tickers over {} months",
            name,
            tickers.len(),
            table.height()
        );
        Ok(table)
    }
}

impl ConfigurableCharacteristic for VolatilityCharacteristic {
    type Config = VolatilityConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
