//! Per-period quantile ranking.

use charsort_math::qcut_labels;
use charsort_primitives::{Period, RANK_COL, RET_COL, YEAR_MONTH_COL, index_dates};
use polars::prelude::*;
use tracing::{debug, warn};

use crate::UtilsError;

const BUCKETS_COL: &str = "buckets";
const STOCKS_COL: &str = "stocks";

/// `qcut` labels of one month's characteristic values as a `UInt32` column.
fn qcut_ranks(values: Column, q: usize) -> PolarsResult<Option<Column>> {
    let sample: Vec<f64> =
        values.as_materialized_series().f64()?.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect();
    let labels =
        qcut_labels(&sample, q).map_err(|e| PolarsError::ComputeError(e.to_string().into()))?;

    let ranks: UInt32Chunked =
        labels.into_iter().map(|label| label.and_then(|l| u32::try_from(l).ok())).collect();
    Ok(Some(ranks.with_name(values.name().clone()).into_series().into()))
}

/// Log months that lost stocks or buckets to ties.
fn report_collapsed(labelled: &DataFrame, q: usize) -> Result<(), UtilsError> {
    let counts = labelled
        .clone()
        .lazy()
        .group_by([col(YEAR_MONTH_COL)])
        .agg([
            col(RANK_COL).drop_nulls().n_unique().cast(DataType::UInt32).alias(BUCKETS_COL),
            col(RANK_COL).len().cast(DataType::UInt32).alias(STOCKS_COL),
        ])
        .filter(col(BUCKETS_COL).lt(lit(q as u32)))
        .sort([YEAR_MONTH_COL], SortMultipleOptions::default())
        .collect()?;

    let months = index_dates(&counts, YEAR_MONTH_COL)?;
    let buckets = counts.column(BUCKETS_COL)?.u32()?;
    let stocks = counts.column(STOCKS_COL)?.u32()?;
    for ((month, buckets), stocks) in months.into_iter().zip(buckets).zip(stocks) {
        let (buckets, stocks) = (buckets.unwrap_or(0), stocks.unwrap_or(0));
        if buckets == 0 {
            debug!("Dropping {}: {} stocks cannot be ranked", Period::from(month), stocks);
        } else {
            warn!("Period {} collapsed to {} of {} buckets", Period::from(month), buckets, q);
        }
    }
    Ok(())
}

/// Assign each stock a quantile rank on the characteristic, month by month.
///
/// Rows missing either the return or the characteristic are dropped. Within
/// each month the characteristic is cut into `q` equal-frequency buckets at
/// the linear quantiles `i / q`; tied edges collapse buckets, and months
/// without two distinct edges (a single stock, or all values equal) are
/// dropped entirely.
///
/// # Arguments
/// * `reshaped` - DataFrame with | year_month | ret | {name} | ticker |
/// * `name` - Characteristic name
/// * `q` - Number of quantiles
///
/// # Returns
/// The surviving rows plus a `rank` column (`UInt32`, `0..q`), sorted by
/// month and then by characteristic value.
///
/// # Errors
/// Returns an error if `q == 0` or a required column is missing.
pub fn quantile_sort(reshaped: &DataFrame, name: &str, q: usize) -> Result<DataFrame, UtilsError> {
    if q == 0 {
        return Err(UtilsError::InvalidParameter("q must be at least 1".to_string()));
    }
    for column in [YEAR_MONTH_COL, RET_COL, name] {
        if reshaped.column(column).is_err() {
            return Err(UtilsError::MissingColumn(column.to_string()));
        }
    }

    let labelled = reshaped
        .clone()
        .lazy()
        .with_columns([
            col(RET_COL).cast(DataType::Float64),
            col(name).cast(DataType::Float64),
        ])
        .filter(
            col(RET_COL)
                .is_not_null()
                .and(col(RET_COL).is_not_nan())
                .and(col(name).is_not_null())
                .and(col(name).is_not_nan()),
        )
        .with_column(
            col(name)
                .apply(move |c: Column| qcut_ranks(c, q), GetOutput::from_type(DataType::UInt32))
                .over([col(YEAR_MONTH_COL)])
                .alias(RANK_COL),
        )
        .collect()?;

    report_collapsed(&labelled, q)?;

    Ok(labelled
        .lazy()
        .filter(col(RANK_COL).is_not_null())
        .sort([YEAR_MONTH_COL, name], SortMultipleOptions::new().with_maintain_order(true))
        .collect()?)
}

#[cfg(test)]
mod tests {
    use charsort_primitives::{Date, TICKER_COL};
    use rstest::rstest;
    use tracing_test::traced_test;

    use super::*;
    use crate::reshape_long;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    /// Four stocks over 2019-01..2019-05 with lagged characteristics.
    fn merged() -> DataFrame {
        let months: Vec<Date> = (1..=5).map(|m| ymd(2019, m, 1)).collect();
        DataFrame::new(vec![
            Column::new(YEAR_MONTH_COL.into(), months),
            Column::new("stock1".into(), vec![Some(0.023969), Some(0.005083), Some(-0.021728), None, None]),
            Column::new("stock2".into(), vec![Some(0.013220), Some(0.014490), Some(-0.045329), Some(0.024182), Some(0.009146)]),
            Column::new("stock3".into(), vec![None, Some(0.029547), Some(0.011807), None, Some(0.010892)]),
            Column::new("stock4".into(), vec![Some(-0.021478), Some(-0.041856), Some(0.031371), None, Some(-0.023821)]),
            Column::new("stock1_cha_name".into(), vec![None, Some(0.001823), Some(0.000826), Some(-0.004043), None]),
            Column::new("stock2_cha_name".into(), vec![None, Some(-0.006415), Some(0.038704), Some(-0.035984), Some(0.008183)]),
            Column::new("stock3_cha_name".into(), vec![None, None, Some(-0.036619), Some(-0.025764), None]),
            Column::new("stock4_cha_name".into(), vec![None, Some(0.037371), Some(-0.011854), Some(-0.023779), None]),
        ])
        .unwrap()
    }

    fn ranked_pairs(ranked: &DataFrame) -> Vec<(String, u32)> {
        let tickers = ranked.column(TICKER_COL).unwrap().str().unwrap();
        let ranks = ranked.column(RANK_COL).unwrap().u32().unwrap();
        tickers
            .into_iter()
            .zip(ranks)
            .map(|(t, r)| (t.unwrap().to_string(), r.unwrap()))
            .collect()
    }

    #[test]
    fn sort_halves_each_month() {
        let long = reshape_long(&merged(), "cha_name").unwrap();
        let ranked = quantile_sort(&long, "cha_name", 2).unwrap();

        assert_eq!(ranked.height(), 7);
        assert_eq!(
            index_dates(&ranked, YEAR_MONTH_COL).unwrap(),
            [vec![ymd(2019, 2, 1); 3], vec![ymd(2019, 3, 1); 4]].concat()
        );
        let expected = [
            ("stock2", 0),
            ("stock1", 0),
            ("stock4", 1),
            ("stock3", 0),
            ("stock4", 0),
            ("stock1", 1),
            ("stock2", 1),
        ];
        let expected: Vec<(String, u32)> = expected.iter().map(|&(t, r)| (t.to_string(), r)).collect();
        assert_eq!(ranked_pairs(&ranked), expected);
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    fn ranks_stay_in_range(#[case] q: usize) {
        let long = reshape_long(&merged(), "cha_name").unwrap();
        let ranked = quantile_sort(&long, "cha_name", q).unwrap();
        let max = ranked.column(RANK_COL).unwrap().u32().unwrap().max().unwrap();
        assert!((max as usize) < q);
    }

    #[test]
    fn single_stock_month_is_dropped() {
        let long = reshape_long(&merged(), "cha_name").unwrap();
        let ranked = quantile_sort(&long, "cha_name", 2).unwrap();
        let months = index_dates(&ranked, YEAR_MONTH_COL).unwrap();
        assert!(!months.contains(&ymd(2019, 4, 1)));
        assert!(!months.contains(&ymd(2019, 5, 1)));
    }

    fn long_table(months: &[Date], values: &[f64]) -> DataFrame {
        DataFrame::new(vec![
            Column::new(YEAR_MONTH_COL.into(), months.to_vec()),
            Column::new(RET_COL.into(), vec![0.01; values.len()]),
            Column::new("vol".into(), values.to_vec()),
            Column::new(
                TICKER_COL.into(),
                (0..values.len()).map(|i| format!("s{i}")).collect::<Vec<_>>(),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn months_are_ranked_independently() {
        let jan = ymd(2019, 1, 1);
        let feb = ymd(2019, 2, 1);
        let table = long_table(&[jan, feb, jan, feb, jan, feb], &[0.1, 10.0, 0.3, 30.0, 0.2, 20.0]);

        let ranked = quantile_sort(&table, "vol", 3).unwrap();
        assert_eq!(ranked.height(), 6);
        let ranks: Vec<u32> = ranked.column(RANK_COL).unwrap().u32().unwrap().into_no_null_iter().collect();
        assert_eq!(ranks, vec![0, 1, 2, 0, 1, 2]);
    }

    #[traced_test]
    #[test]
    fn tied_values_collapse_buckets() {
        let jan = ymd(2019, 1, 1);
        let table = long_table(&[jan; 4], &[1.0, 1.0, 1.0, 2.0]);

        let ranked = quantile_sort(&table, "vol", 4).unwrap();
        let ranks: Vec<u32> = ranked.column(RANK_COL).unwrap().u32().unwrap().into_no_null_iter().collect();
        assert_eq!(ranks, vec![0, 0, 0, 1]);
        assert!(logs_contain("Period 2019-01 collapsed to 2 of 4 buckets"));
    }

    #[test]
    fn nan_characteristics_are_dropped() {
        let jan = ymd(2019, 1, 1);
        let table = long_table(&[jan; 3], &[0.1, f64::NAN, 0.3]);
        let ranked = quantile_sort(&table, "vol", 2).unwrap();
        assert_eq!(ranked.height(), 2);
    }

    #[test]
    fn zero_quantiles_is_rejected() {
        let long = reshape_long(&merged(), "cha_name").unwrap();
        assert!(matches!(quantile_sort(&long, "cha_name", 0), Err(UtilsError::InvalidParameter(_))));
    }

    #[test]
    fn missing_characteristic_column() {
        let long = reshape_long(&merged(), "cha_name").unwrap();
        let err = quantile_sort(&long, "vol", 2).unwrap_err();
        assert!(matches!(err, UtilsError::MissingColumn(ref c) if c == "vol"));
    }
}
