//! Wide to long reshaping of the merged table.

use charsort_primitives::{
    RANK_COL, RET_COL, TICKER_COL, Ticker, YEAR_MONTH_COL, index_dates, value_columns,
};
use polars::prelude::*;

use crate::UtilsError;

/// Reshape the merged wide table into one row per (month, ticker).
///
/// Every plain column of `merged` is a ticker's returns and must be paired
/// with a `{ticker}_{name}` characteristic column. The per-ticker blocks are
/// stacked in ticker column order.
///
/// # Arguments
/// * `merged` - DataFrame with | year_month | ticker ... | {ticker}_{name} ... |
/// * `name` - Characteristic name
///
/// # Returns
/// DataFrame with | year_month | ret | {name} | ticker |, with
/// `months x tickers` rows.
///
/// # Errors
/// Returns an error if `name` is empty or collides with an output column,
/// or if a ticker has no characteristic column.
pub fn reshape_long(merged: &DataFrame, name: &str) -> Result<DataFrame, UtilsError> {
    if name.is_empty() || [YEAR_MONTH_COL, RET_COL, TICKER_COL, RANK_COL].contains(&name) {
        return Err(UtilsError::InvalidParameter(format!(
            "characteristic name {name:?} is empty or reserved"
        )));
    }
    index_dates(merged, YEAR_MONTH_COL)?;

    let columns = value_columns(merged, YEAR_MONTH_COL);
    let tickers: Vec<Ticker> = columns
        .iter()
        .filter(|c| Ticker::from_characteristic_column(c, name).is_none())
        .map(|c| Ticker::from(c.as_str()))
        .collect();

    if tickers.is_empty() {
        return Ok(DataFrame::new(vec![
            Column::new_empty(YEAR_MONTH_COL.into(), &DataType::Date),
            Column::new_empty(RET_COL.into(), &DataType::Float64),
            Column::new_empty(name.into(), &DataType::Float64),
            Column::new_empty(TICKER_COL.into(), &DataType::String),
        ])?);
    }

    let blocks = tickers
        .iter()
        .map(|ticker| {
            let characteristic = ticker.characteristic_column(name);
            if !columns.contains(&characteristic) {
                return Err(UtilsError::MissingColumn(characteristic));
            }
            Ok(merged.clone().lazy().select([
                col(YEAR_MONTH_COL),
                col(ticker.as_str()).cast(DataType::Float64).alias(RET_COL),
                col(characteristic.as_str()).cast(DataType::Float64).alias(name),
                lit(ticker.as_str()).alias(TICKER_COL),
            ]))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(concat(blocks, UnionArgs::default())?.collect()?)
}
