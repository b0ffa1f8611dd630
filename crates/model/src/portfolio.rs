//! Equal-weighted quantile portfolios and the long-short spread.

use charsort_primitives::{RANK_COL, RET_COL, YEAR_MONTH_COL};
use charsort_utils::{quantile_sort, reshape_long};
use polars::prelude::*;
use tracing::info;

use crate::{ModelError, check_sorting_input};

/// Long-short spread column: top quantile minus bottom quantile.
pub const LS_COL: &str = "ls";

/// Name of the portfolio column for one-based quantile `rank`.
#[must_use]
pub fn portfolio_column(rank: usize) -> String {
    format!("ewp_rank_{rank}")
}

/// Equal-weighted return of every quantile, month by month.
///
/// Rank `r` (zero-based) becomes column `ewp_rank_{r + 1}`, holding the mean
/// return of the stocks ranked `r` that month. A quantile with no stocks in a
/// month is null there, and a quantile never populated is an all-null
/// column. `ls = ewp_rank_q - ewp_rank_1` and is null when either leg is.
///
/// # Arguments
/// * `ranked` - DataFrame with | year_month | ret | rank | ... |
/// * `q` - Number of quantiles
///
/// # Returns
/// DataFrame with | year_month | ewp_rank_1 ... ewp_rank_q | ls |, one row
/// per month with at least one ranked stock.
///
/// # Errors
/// Returns an error if `q == 0` or the aggregation fails.
pub fn equal_weighted_portfolios(ranked: &DataFrame, q: usize) -> Result<DataFrame, ModelError> {
    if q == 0 {
        return Err(ModelError::InvalidQuantiles(q));
    }

    let ranked = ranked.clone().lazy();
    let means = ranked
        .clone()
        .group_by([col(YEAR_MONTH_COL), col(RANK_COL)])
        .agg([col(RET_COL).cast(DataType::Float64).mean()]);

    let mut portfolios = ranked.group_by([col(YEAR_MONTH_COL)]).agg([col(RET_COL).count()]);
    let mut selected = vec![col(YEAR_MONTH_COL)];

    for rank in 0..q {
        let column = portfolio_column(rank + 1);
        let leg = means
            .clone()
            .filter(col(RANK_COL).eq(lit(rank as u32)))
            .select([col(YEAR_MONTH_COL), col(RET_COL).alias(column.as_str())]);

        portfolios = portfolios.join(
            leg,
            [col(YEAR_MONTH_COL)],
            [col(YEAR_MONTH_COL)],
            JoinArgs::new(JoinType::Left),
        );
        selected.push(col(column.as_str()));
    }

    let spread = col(portfolio_column(q).as_str()) - col(portfolio_column(1).as_str());
    selected.push(spread.alias(LS_COL));

    Ok(portfolios
        .select(selected)
        .sort([YEAR_MONTH_COL], SortMultipleOptions::default())
        .collect()?)
}

/// Configuration for portfolio sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Number of quantiles (at least 2).
    pub quantiles: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self { quantiles: 3 }
    }
}

/// Builds long-short portfolios from a merged return/characteristic table.
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    config: SortConfig,
}

impl PortfolioBuilder {
    /// Create a builder sorting into `quantiles` buckets.
    #[must_use]
    pub const fn new(quantiles: usize) -> Self {
        Self::with_config(SortConfig { quantiles })
    }

    /// Create a builder with custom configuration.
    #[must_use]
    pub const fn with_config(config: SortConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Validate, reshape, rank and aggregate `merged` into portfolios.
    ///
    /// # Arguments
    /// * `merged` - DataFrame with | year_month | ticker ... | {ticker}_{name} ... |
    /// * `name` - Characteristic name
    ///
    /// # Returns
    /// The table described in [`equal_weighted_portfolios`].
    ///
    /// # Errors
    /// Returns an error if fewer than two quantiles are configured or any
    /// stage fails.
    pub fn build(&self, merged: &DataFrame, name: &str) -> Result<DataFrame, ModelError> {
        let q = self.config.quantiles;
        if q < 2 {
            return Err(ModelError::InvalidQuantiles(q));
        }
        check_sorting_input(merged, name)?;

        let reshaped = reshape_long(merged, name)?;
        let ranked = quantile_sort(&reshaped, name, q)?;
        info!(
            "Ranked {} of {} stock-months into {} quantiles on {}",
            ranked.height(),
            reshaped.height(),
            q,
            name
        );

        let portfolios = equal_weighted_portfolios(&ranked, q)?;
        info!("Built portfolios for {} months", portfolios.height());
        Ok(portfolios)
    }
}
