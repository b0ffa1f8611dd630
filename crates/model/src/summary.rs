//! Long-short summary statistics.

use charsort_math::TStatSummary;
use charsort_primitives::float_values;
use polars::prelude::*;

use crate::{LS_COL, ModelError};

/// Mean and t-statistic of `column` in `table`, skipping missing values.
///
/// # Errors
/// Returns an error if the column is missing or has fewer than two
/// observations.
pub fn t_stat(table: &DataFrame, column: &str) -> Result<TStatSummary, ModelError> {
    Ok(TStatSummary::from_observations(&float_values(table, column)?)?)
}

/// One-row summary of the `ls` column with | ls_bar | ls_t | n_obs |.
///
/// # Errors
/// Returns an error if `portfolios` has no `ls` column or fewer than two
/// long-short observations.
pub fn long_short_summary(portfolios: &DataFrame) -> Result<DataFrame, ModelError> {
    Ok(t_stat(portfolios, LS_COL)?.to_frame()?)
}
