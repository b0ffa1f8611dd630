//! Summaries of wide return tables.

use charsort_primitives::{index_dates, value_columns};
use polars::prelude::*;

use crate::UtilsError;

/// Value column `name` as `Float64` with `NaN` read as missing.
fn returns(name: &str) -> Expr {
    col(name).cast(DataType::Float64).fill_nan(lit(NULL))
}

/// Mean of every value column over the rows dated in `year`.
///
/// Missing values are ignored; a column with no observation in `year` is
/// null.
///
/// # Arguments
/// * `table` - Wide table with a date index column
/// * `index` - Name of the index column
/// * `year` - Calendar year to average over
///
/// # Returns
/// One-row DataFrame keyed by the value column names.
///
/// # Errors
/// Returns an error if the index column is missing or not a date column.
pub fn average_by_year(table: &DataFrame, index: &str, year: i32) -> Result<DataFrame, UtilsError> {
    index_dates(table, index)?;

    let means: Vec<Expr> =
        value_columns(table, index).iter().map(|c| returns(c).mean().alias(c.as_str())).collect();

    Ok(table.clone().lazy().filter(col(index).dt().year().eq(lit(year))).select(means).collect()?)
}

/// Running compounded return `prod(1 + r) - 1` of every value column.
///
/// A missing return is skipped when compounding and its own cell stays
/// missing.
///
/// # Returns
/// DataFrame with the same index and columns as `table`, sorted by index.
///
/// # Errors
/// Returns an error if the index column is missing or not a date column.
pub fn cumulative_returns(table: &DataFrame, index: &str) -> Result<DataFrame, UtilsError> {
    index_dates(table, index)?;

    let mut exprs = vec![col(index)];
    exprs.extend(value_columns(table, index).iter().map(|c| {
        let ret = returns(c);
        when(ret.clone().is_not_null())
            .then((ret + lit(1.0)).fill_null(lit(1.0)).cum_prod(false) - lit(1.0))
            .otherwise(lit(NULL))
            .alias(c.as_str())
    }));

    Ok(table
        .clone()
        .lazy()
        .sort([index], SortMultipleOptions::new().with_maintain_order(true))
        .select(exprs)
        .collect()?)
}

/// Whole-period buy-and-hold return `prod(1 + r) - 1` of every value column.
///
/// Missing values are ignored; a column with no observation is null.
///
/// # Returns
/// One-row DataFrame keyed by the value column names.
///
/// # Errors
/// Returns an error if the index column is missing or not a date column.
pub fn buy_and_hold(table: &DataFrame, index: &str) -> Result<DataFrame, UtilsError> {
    index_dates(table, index)?;

    let totals: Vec<Expr> = value_columns(table, index)
        .iter()
        .map(|c| {
            let ret = returns(c);
            when(ret.clone().count().gt(lit(0u32)))
                .then((ret + lit(1.0)).product() - lit(1.0))
                .otherwise(lit(NULL))
                .alias(c.as_str())
        })
        .collect();

    Ok(table.clone().lazy().select(totals).collect()?)
}
