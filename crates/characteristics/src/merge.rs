//! Lagged merge of characteristics onto monthly returns.

use charsort_primitives::{
    ReturnBundle, Ticker, YEAR_MONTH_COL, value_columns, with_month_index,
};
use polars::prelude::*;

use crate::EngineError;

/// Merge a characteristic table onto the monthly returns, lagged one month.
///
/// Both indices are coerced to month starts, the monthly returns are
/// left-joined with the `{ticker}_{name}` columns on `year_month` and sorted
/// by month, then every characteristic column is shifted forward by one row.
/// A return at month `t` thus sits next to the characteristic of month
/// `t - 1`, and the first month's characteristics are missing. Return
/// columns are never shifted.
///
/// # Arguments
/// * `bundle` - Return bundle supplying the monthly returns
/// * `characteristics` - DataFrame with | year_month | {ticker}_{name} ... |
/// * `name` - Characteristic name
///
/// # Returns
/// DataFrame with | year_month | ticker_1 ... | {ticker_1}_{name} ... |,
/// indexed exactly like the monthly returns.
///
/// # Errors
/// Returns an error if either index is invalid or the join fails.
pub fn merge_tables(
    bundle: &ReturnBundle,
    characteristics: &DataFrame,
    name: &str,
) -> Result<DataFrame, EngineError> {
    let monthly = with_month_index(bundle.monthly(), YEAR_MONTH_COL)?;
    let characteristics = with_month_index(characteristics, YEAR_MONTH_COL)?;

    let lagged: Vec<String> = value_columns(&characteristics, YEAR_MONTH_COL)
        .into_iter()
        .filter(|c| Ticker::from_characteristic_column(c, name).is_some())
        .collect();

    let mut selected = vec![col(YEAR_MONTH_COL)];
    selected.extend(lagged.iter().map(|c| col(c.as_str())));

    let merged = monthly
        .lazy()
        .join(
            characteristics.lazy().select(selected),
            [col(YEAR_MONTH_COL)],
            [col(YEAR_MONTH_COL)],
            JoinArgs::new(JoinType::Left),
        )
        .sort([YEAR_MONTH_COL], SortMultipleOptions::new().with_maintain_order(true))
        .with_columns(lagged.iter().map(|c| col(c.as_str()).shift(lit(1))).collect::<Vec<_>>())
        .collect()?;

    Ok(merged)
}
