//! Daily and monthly return tables.

use polars::prelude::*;

use crate::{
    DATE_COL, PrimitivesError, ReturnFrequency, Ticker, YEAR_MONTH_COL, index_dates, value_columns,
};

/// A pair of wide return tables covering the same ticker universe.
///
/// - `Daily`: `date` index plus one return column per ticker.
/// - `Monthly`: `year_month` index plus one return column per ticker.
///
/// Row counts need not match. Both tables are treated as immutable; every
/// pipeline stage clones what it needs into a new plan.
#[derive(Debug, Clone)]
pub struct ReturnBundle {
    daily: DataFrame,
    monthly: DataFrame,
}

impl ReturnBundle {
    /// Create a bundle from its daily and monthly tables.
    ///
    /// # Errors
    /// Returns an error if either index column is missing or not a date
    /// column, or if the two tables cover different tickers.
    pub fn new(daily: DataFrame, monthly: DataFrame) -> Result<Self, PrimitivesError> {
        index_dates(&daily, DATE_COL)?;
        index_dates(&monthly, YEAR_MONTH_COL)?;

        let bundle = Self { daily, monthly };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Create a bundle from named tables, e.g. `[("Daily", d), ("Monthly", m)]`.
    ///
    /// # Errors
    /// Returns `PrimitivesError::InvalidBundleKeys` unless the keys are exactly
    /// `Daily` and `Monthly`, plus any error from [`ReturnBundle::new`].
    pub fn from_named<K, I>(tables: I) -> Result<Self, PrimitivesError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, DataFrame)>,
    {
        let mut keys = Vec::new();
        let mut daily = None;
        let mut monthly = None;

        for (key, table) in tables {
            keys.push(key.as_ref().to_string());
            match key.as_ref().parse::<ReturnFrequency>() {
                Ok(ReturnFrequency::Daily) if daily.is_none() => daily = Some(table),
                Ok(ReturnFrequency::Monthly) if monthly.is_none() => monthly = Some(table),
                _ => return Err(PrimitivesError::InvalidBundleKeys(keys)),
            }
        }

        match (daily, monthly) {
            (Some(daily), Some(monthly)) => Self::new(daily, monthly),
            _ => Err(PrimitivesError::InvalidBundleKeys(keys)),
        }
    }

    /// Check that both tables cover the same tickers.
    ///
    /// # Errors
    /// Returns `PrimitivesError::TickerMismatch` if the ticker sets differ.
    pub fn validate(&self) -> Result<(), PrimitivesError> {
        let mut daily = value_columns(&self.daily, DATE_COL);
        let mut monthly = value_columns(&self.monthly, YEAR_MONTH_COL);
        daily.sort();
        monthly.sort();

        if daily != monthly {
            return Err(PrimitivesError::TickerMismatch { daily, monthly });
        }
        Ok(())
    }

    /// The table at `frequency`.
    #[must_use]
    pub const fn get(&self, frequency: ReturnFrequency) -> &DataFrame {
        match frequency {
            ReturnFrequency::Daily => &self.daily,
            ReturnFrequency::Monthly => &self.monthly,
        }
    }

    /// Daily return table.
    #[must_use]
    pub const fn daily(&self) -> &DataFrame {
        &self.daily
    }

    /// Monthly return table.
    #[must_use]
    pub const fn monthly(&self) -> &DataFrame {
        &self.monthly
    }

    /// Tickers in monthly-table column order.
    #[must_use]
    pub fn tickers(&self) -> Vec<Ticker> {
        value_columns(&self.monthly, YEAR_MONTH_COL).into_iter().map(Ticker::from).collect()
    }
}
