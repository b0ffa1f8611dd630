//! Column conventions shared by every table in the pipeline.

use polars::prelude::*;

use crate::{Date, Period, PrimitivesError};

/// Index column of daily tables.
pub const DATE_COL: &str = "date";
/// Index column of monthly tables (first day of each month).
pub const YEAR_MONTH_COL: &str = "year_month";
/// Return column of the long (period, ticker) table.
pub const RET_COL: &str = "ret";
/// Ticker label column of the long table.
pub const TICKER_COL: &str = "ticker";
/// Quantile rank column of the ranked table.
pub const RANK_COL: &str = "rank";

fn invalid_index(column: &str, reason: impl Into<String>) -> PrimitivesError {
    PrimitivesError::InvalidIndex { column: column.to_string(), reason: reason.into() }
}

/// Read a `Date` index column into calendar dates.
///
/// # Errors
/// Returns an error if the column is missing, is not of `Date` dtype, or
/// contains nulls.
pub fn index_dates(df: &DataFrame, column: &str) -> Result<Vec<Date>, PrimitivesError> {
    let index =
        df.column(column).map_err(|_| PrimitivesError::MissingColumn(column.to_string()))?;

    if index.dtype() != &DataType::Date {
        return Err(invalid_index(column, format!("expected Date dtype, got {}", index.dtype())));
    }

    index
        .as_materialized_series()
        .date()?
        .as_date_iter()
        .map(|day| day.ok_or_else(|| invalid_index(column, "contains missing dates")))
        .collect()
}

/// All column names except `index`, in table order.
#[must_use]
pub fn value_columns(df: &DataFrame, index: &str) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .filter(|name| name.as_str() != index)
        .map(|name| name.to_string())
        .collect()
}

/// Read a numeric column as optional floats.
///
/// # Errors
/// Returns an error if the column is missing or cannot be cast to `Float64`.
pub fn float_values(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>, PrimitivesError> {
    let values = df
        .column(column)
        .map_err(|_| PrimitivesError::MissingColumn(column.to_string()))?
        .cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().collect())
}

fn month_starts(df: &DataFrame, column: &str) -> Result<Vec<Date>, PrimitivesError> {
    Ok(index_dates(df, column)?.into_iter().map(|d| Period::containing(d).start()).collect())
}

/// Copy of `df` with its date index replaced by the containing month starts.
///
/// This coerces month-end or mid-month dates onto the period index used by
/// monthly tables.
///
/// # Errors
/// Returns an error if the index column is missing or not a valid date column.
pub fn with_month_index(df: &DataFrame, column: &str) -> Result<DataFrame, PrimitivesError> {
    let months = month_starts(df, column)?;
    let mut out = df.clone();
    out.with_column(Column::new(column.into(), months))?;
    Ok(out)
}

/// Copy of a daily table with an extra `year_month` column holding the month
/// of each `date`.
///
/// # Errors
/// Returns an error if the `date` column is missing or not a valid date column.
pub fn with_year_month(daily: &DataFrame) -> Result<DataFrame, PrimitivesError> {
    let months = month_starts(daily, DATE_COL)?;
    let mut out = daily.clone();
    out.with_column(Column::new(YEAR_MONTH_COL.into(), months))?;
    Ok(out)
}
