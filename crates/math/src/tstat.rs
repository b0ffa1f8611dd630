//! Mean and t-statistic of a return series.

use ndarray::Array1;
use polars::prelude::*;

use crate::MathError;

/// Mean column of [`TStatSummary::to_frame`].
pub const LS_BAR_COL: &str = "ls_bar";
/// t-statistic column of [`TStatSummary::to_frame`].
pub const LS_T_COL: &str = "ls_t";
/// Observation count column of [`TStatSummary::to_frame`].
pub const N_OBS_COL: &str = "n_obs";

/// Observed values of a series; `None` and `NaN` entries are dropped.
fn observed(values: &[Option<f64>]) -> Array1<f64> {
    values.iter().flatten().copied().filter(|x| !x.is_nan()).collect()
}

/// Sample mean and its t-statistic against zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TStatSummary {
    /// Sample mean.
    pub mean: f64,
    /// `mean / (sd / sqrt(n))` with `ddof = 1`; `None` when the series has
    /// no dispersion.
    pub t_stat: Option<f64>,
    /// Number of observations used.
    pub n_obs: usize,
}

impl TStatSummary {
    /// Summarize a fully observed series.
    ///
    /// # Errors
    /// Returns `MathError::InsufficientData` with fewer than two observations.
    pub fn from_array(data: &Array1<f64>) -> Result<Self, MathError> {
        let n_obs = data.len();
        if n_obs < 2 {
            return Err(MathError::InsufficientData { required: 2, actual: n_obs });
        }

        let mean = data.mean().ok_or(MathError::EmptyData)?;
        let sd = data.std(1.0);
        let t_stat = (sd > 0.0).then(|| mean / (sd / (n_obs as f64).sqrt()));

        Ok(Self { mean, t_stat, n_obs })
    }

    /// Summarize a series with gaps; missing values are skipped.
    ///
    /// # Errors
    /// Returns `MathError::InsufficientData` with fewer than two observed values.
    pub fn from_observations(values: &[Option<f64>]) -> Result<Self, MathError> {
        Self::from_array(&observed(values))
    }

    /// One-row table with | ls_bar | ls_t | n_obs |.
    ///
    /// # Errors
    /// Returns an error if the DataFrame cannot be built.
    pub fn to_frame(&self) -> Result<DataFrame, MathError> {
        Ok(DataFrame::new(vec![
            Column::new(LS_BAR_COL.into(), &[self.mean]),
            Column::new(LS_T_COL.into(), &[self.t_stat]),
            Column::new(N_OBS_COL.into(), &[self.n_obs as u64]),
        ])?)
    }
}
