//! Return tables derived from adjusted close prices.

use polars::prelude::*;

use crate::{
    DATE_COL, PrimitivesError, ReturnBundle, YEAR_MONTH_COL, index_dates, value_columns,
    with_year_month,
};

/// Minimum number of daily returns a month needs before a monthly statistic
/// is reported for it.
pub const MIN_DAILY_OBSERVATIONS: usize = 18;

impl ReturnBundle {
    /// Derive a return bundle from a wide table of adjusted close prices.
    ///
    /// Daily returns are simple returns `p_t / p_{t-1} - 1`; the first row is
    /// dropped. Monthly returns compound the daily returns of each calendar
    /// month and are null when a ticker has fewer than `min_daily_obs` daily
    /// returns in that month.
    ///
    /// # Arguments
    /// * `prices` - DataFrame with | date | ticker_1 | ... | ticker_n |
    /// * `min_daily_obs` - Minimum daily returns per month (see [`MIN_DAILY_OBSERVATIONS`])
    ///
    /// # Errors
    /// Returns an error if the `date` column is missing or invalid.
    pub fn from_prices(prices: &DataFrame, min_daily_obs: usize) -> Result<Self, PrimitivesError> {
        index_dates(prices, DATE_COL)?;
        let tickers = value_columns(prices, DATE_COL);

        let mut exprs = vec![col(DATE_COL)];
        exprs.extend(tickers.iter().map(|t| {
            let price = col(t.as_str()).cast(DataType::Float64);
            (price.clone() / price.shift(lit(1)) - lit(1.0)).alias(t.as_str())
        }));

        let returns = prices
            .clone()
            .lazy()
            .sort([DATE_COL], SortMultipleOptions::new().with_maintain_order(true))
            .select(exprs)
            .collect()?;
        let daily = returns.slice(1, returns.height().saturating_sub(1));

        let min_obs = u32::try_from(min_daily_obs).unwrap_or(u32::MAX);
        let aggs: Vec<Expr> = tickers
            .iter()
            .map(|t| {
                let ret = col(t.as_str());
                when(ret.clone().count().gt_eq(lit(min_obs)))
                    .then((ret + lit(1.0)).product() - lit(1.0))
                    .otherwise(lit(NULL))
                    .alias(t.as_str())
            })
            .collect();

        let monthly = with_year_month(&daily)?
            .lazy()
            .group_by([col(YEAR_MONTH_COL)])
            .agg(aggs)
            .sort([YEAR_MONTH_COL], SortMultipleOptions::default())
            .collect()?;

        Self::new(daily, monthly)
    }
}
