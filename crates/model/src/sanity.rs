//! Validation of the merged table before sorting.

use std::collections::BTreeSet;

use charsort_primitives::{Period, Ticker, YEAR_MONTH_COL, index_dates, value_columns};
use polars::prelude::*;

use crate::ModelError;

/// Check that `merged` can be sorted on characteristic `name`.
///
/// The table must have a `year_month` date index of month starts in strictly
/// increasing order, and its plain return columns must cover exactly the
/// tickers of its `{ticker}_{name}` columns.
///
/// # Errors
/// Returns the first violated condition as a `ModelError`.
pub fn check_sorting_input(merged: &DataFrame, name: &str) -> Result<(), ModelError> {
    if name.is_empty() {
        return Err(ModelError::EmptyName);
    }

    let months = index_dates(merged, YEAR_MONTH_COL)?;
    if let Some(day) = months.iter().find(|d| !Period::is_month_start(**d)) {
        return Err(ModelError::InvalidIndex(format!("{day} is not the first day of a month")));
    }
    if let Some(pair) = months.windows(2).find(|w| w[0] >= w[1]) {
        return Err(ModelError::InvalidIndex(format!(
            "{} does not follow {}",
            Period::from(pair[1]),
            Period::from(pair[0])
        )));
    }

    let mut returns = BTreeSet::new();
    let mut characteristics = BTreeSet::new();
    for column in value_columns(merged, YEAR_MONTH_COL) {
        match Ticker::from_characteristic_column(&column, name) {
            Some(ticker) => characteristics.insert(ticker.0),
            None => returns.insert(column),
        };
    }

    if returns.is_empty() {
        return Err(ModelError::EmptyUniverse);
    }
    if returns != characteristics {
        return Err(ModelError::TickerMismatch {
            returns: returns.into_iter().collect(),
            characteristics: characteristics.into_iter().collect(),
        });
    }
    Ok(())
}
