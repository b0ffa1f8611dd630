//! Worked examples of the characteristic sort, end to end.
#![allow(missing_docs)]

use std::sync::Arc;

use approx::assert_relative_eq;
use charsort_characteristics::{CharacteristicEngine, CharacteristicRegistry, merge_tables};
use charsort_model::{
    LS_COL, ModelError, PipelineConfig, PortfolioBuilder, PortfolioPipeline, check_sorting_input,
    long_short_summary,
};
use charsort_primitives::{
    DATE_COL, Date, ReturnBundle, ReturnFrequency, YEAR_MONTH_COL, float_values, index_dates,
    value_columns, with_year_month,
};
use charsort_traits::{Characteristic, CharacteristicError};
use polars::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
}

/// Two stocks over 25 trading days around February 2019; stock2 only
/// starts trading mid-month.
fn february_bundle() -> ReturnBundle {
    let days = [
        (1, 28), (1, 29), (1, 30), (1, 31), (2, 1),
        (2, 5), (2, 6), (2, 7), (2, 8), (2, 11),
        (2, 12), (2, 13), (2, 14), (2, 15), (2, 18),
        (2, 19), (2, 20), (2, 21), (2, 22), (2, 25),
        (2, 26), (2, 27), (2, 28), (3, 1), (3, 2),
    ];
    let stock1 = vec![
        0.023969, 0.005083, -0.021728, -0.036492, 0.002642,
        0.013220, 0.014490, -0.045329, 0.024182, 0.009146,
        -0.020552, 0.029547, 0.011807, -0.036482, 0.010892,
        -0.021478, -0.041856, 0.031371, 0.031062, -0.023821,
        0.023912, 0.018807, 0.036614, 0.028173, -0.039111,
    ];
    let mut stock2: Vec<Option<f64>> = vec![None; 10];
    stock2.extend([
        0.017068, -0.000414, -0.036619, -0.025764, 0.019535,
        0.019739, 0.037371, -0.011854, -0.017300, -0.023779,
        -0.036719, -0.043338, -0.04288, -0.009428, 0.010881,
    ].map(Some));

    let daily = DataFrame::new(vec![
        Column::new(DATE_COL.into(), days.iter().map(|&(m, d)| ymd(2019, m, d)).collect::<Vec<_>>()),
        Column::new("stock1".into(), stock1),
        Column::new("stock2".into(), stock2),
    ])
    .unwrap();
    let monthly = DataFrame::new(vec![
        Column::new(YEAR_MONTH_COL.into(), vec![ymd(2019, 2, 28)]),
        Column::new("stock1".into(), vec![Some(0.063590)]),
        Column::new("stock2".into(), vec![None::<f64>]),
    ])
    .unwrap();

    ReturnBundle::from_named([("Daily", daily), ("Monthly", monthly)]).unwrap()
}

/// Four stocks over 2019-01..2019-05 with already lagged characteristics.
fn four_stock_table() -> DataFrame {
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

#[test]
fn february_volatility_and_merge() {
    let engine = CharacteristicEngine::new();
    let bundle = february_bundle();

    let vol = engine.compute(&bundle, "vol", &[ReturnFrequency::Daily]).unwrap();
    assert_eq!(vol.shape(), (1, 3));
    assert_relative_eq!(float_values(&vol, "stock1_vol").unwrap()[0].unwrap(), 0.026615, epsilon = 1e-6);
    assert_eq!(float_values(&vol, "stock2_vol").unwrap(), vec![None]);

    let merged = engine.run(&bundle, "vol", &[ReturnFrequency::Daily]).unwrap();
    assert_eq!(merged.shape(), (1, 5));
    assert_eq!(index_dates(&merged, YEAR_MONTH_COL).unwrap(), vec![ymd(2019, 2, 1)]);
    assert_eq!(float_values(&merged, "stock1").unwrap(), vec![Some(0.063590)]);
    assert_eq!(float_values(&merged, "stock2").unwrap(), vec![None]);
    assert_eq!(float_values(&merged, "stock1_vol").unwrap(), vec![None]);
    assert_eq!(float_values(&merged, "stock2_vol").unwrap(), vec![None]);
}

#[test]
fn june_volatility_is_lagged_into_july() {
    let months = vec![ymd(2010, 6, 30), ymd(2010, 7, 31), ymd(2010, 8, 31)];
    let monthly = DataFrame::new(vec![
        Column::new(YEAR_MONTH_COL.into(), months),
        Column::new("aapl".into(), vec![Some(-0.020827), Some(0.022741), Some(-0.055005)]),
        Column::new("tsla".into(), vec![None, Some(-0.163240), Some(-0.023069)]),
    ])
    .unwrap();
    let daily = DataFrame::new(vec![
        Column::new(DATE_COL.into(), vec![ymd(2010, 6, 1)]),
        Column::new("aapl".into(), vec![0.0]),
        Column::new("tsla".into(), vec![0.0]),
    ])
    .unwrap();
    let bundle = ReturnBundle::new(daily, monthly).unwrap();

    let vol = DataFrame::new(vec![
        Column::new(YEAR_MONTH_COL.into(), vec![ymd(2010, 6, 1), ymd(2010, 7, 1), ymd(2010, 8, 1)]),
        Column::new("aapl_vol".into(), vec![Some(0.019396), Some(0.015031), Some(0.012806)]),
        Column::new("tsla_vol".into(), vec![None, Some(0.065355), Some(0.033770)]),
    ])
    .unwrap();

    let merged = merge_tables(&bundle, &vol, "vol").unwrap();
    assert_eq!(
        value_columns(&merged, YEAR_MONTH_COL),
        vec!["aapl", "tsla", "aapl_vol", "tsla_vol"]
    );
    assert_eq!(float_values(&merged, "aapl_vol").unwrap(), vec![None, Some(0.019396), Some(0.015031)]);
    assert_eq!(float_values(&merged, "tsla_vol").unwrap(), vec![None, None, Some(0.065355)]);
    assert_eq!(float_values(&merged, "tsla").unwrap(), vec![None, Some(-0.163240), Some(-0.023069)]);
}

#[test]
fn four_stock_long_short_portfolios() {
    let merged = four_stock_table();
    check_sorting_input(&merged, "cha_name").unwrap();

    let pf = PortfolioBuilder::new(2).build(&merged, "cha_name").unwrap();
    assert_eq!(pf.shape(), (2, 4));
    assert_eq!(index_dates(&pf, YEAR_MONTH_COL).unwrap(), vec![ymd(2019, 2, 1), ymd(2019, 3, 1)]);

    let low = float_values(&pf, "ewp_rank_1").unwrap();
    let high = float_values(&pf, "ewp_rank_2").unwrap();
    let ls = float_values(&pf, LS_COL).unwrap();

    assert_relative_eq!(low[0].unwrap(), 0.0097865, epsilon = 1e-9);
    assert_relative_eq!(high[0].unwrap(), -0.041856, epsilon = 1e-9);
    assert_relative_eq!(ls[0].unwrap(), -0.0516425, epsilon = 1e-9);
    assert_relative_eq!(low[1].unwrap(), 0.021589, epsilon = 1e-9);
    assert_relative_eq!(high[1].unwrap(), -0.0335285, epsilon = 1e-9);
    assert_relative_eq!(ls[1].unwrap(), -0.0551175, epsilon = 1e-9);

    let summary = long_short_summary(&pf).unwrap();
    assert_eq!(summary.height(), 1);
}

#[test]
fn builder_rejects_inconsistent_tables() {
    let merged = four_stock_table().drop("stock4_cha_name").unwrap();
    let err = PortfolioBuilder::new(2).build(&merged, "cha_name").unwrap_err();
    assert!(matches!(err, ModelError::TickerMismatch { .. }));

    let err = PortfolioBuilder::new(2).build(&four_stock_table(), "").unwrap_err();
    assert!(matches!(err, ModelError::EmptyName));
}

#[test]
fn bundle_keys_are_checked() {
    let bundle = february_bundle();
    let err = ReturnBundle::from_named([("Daily", bundle.daily().clone())]);
    assert!(err.is_err());
}

/// Average daily return of each month, as a second registered characteristic.
#[derive(Debug)]
struct MeanReturn;

impl Characteristic for MeanReturn {
    fn name(&self) -> &str {
        "mean"
    }

    fn description(&self) -> &str {
        "monthly mean of daily returns"
    }

    fn required_frequencies(&self) -> &[ReturnFrequency] {
        &[ReturnFrequency::Daily]
    }

    fn compute(
        &self,
        bundle: &ReturnBundle,
        name: &str,
        frequencies: &[ReturnFrequency],
    ) -> Result<DataFrame, CharacteristicError> {
        self.check_frequencies(frequencies)?;
        let aggs: Vec<Expr> = value_columns(bundle.daily(), DATE_COL)
            .iter()
            .map(|t| col(t.as_str()).mean().alias(format!("{t}_{name}")))
            .collect();
        Ok(with_year_month(bundle.daily())?
            .lazy()
            .group_by([col(YEAR_MONTH_COL)])
            .agg(aggs)
            .sort([YEAR_MONTH_COL], SortMultipleOptions::default())
            .collect()?)
    }
}

#[test]
fn custom_characteristic_through_pipeline() {
    let mut registry = CharacteristicRegistry::with_defaults();
    registry.register("mean", Arc::new(MeanReturn));

    let months: Vec<Date> = (1..=3).map(|m| ymd(2020, m, 1)).collect();
    let mut dates = Vec::new();
    for m in 1..=3 {
        dates.extend((1..=5).map(|d| ymd(2020, m, d)));
    }
    let daily = DataFrame::new(vec![
        Column::new(DATE_COL.into(), dates),
        Column::new("x".into(), vec![0.01; 15]),
        Column::new("y".into(), vec![0.02; 15]),
        Column::new("z".into(), vec![0.03; 15]),
    ])
    .unwrap();
    let monthly = DataFrame::new(vec![
        Column::new(YEAR_MONTH_COL.into(), months),
        Column::new("x".into(), vec![0.1, 0.2, 0.3]),
        Column::new("y".into(), vec![0.0, 0.0, 0.0]),
        Column::new("z".into(), vec![-0.1, -0.2, -0.3]),
    ])
    .unwrap();
    let bundle = ReturnBundle::new(daily, monthly).unwrap();

    let config = PipelineConfig { characteristic: "mean".to_string(), quantiles: 3, ..PipelineConfig::default() };
    let pipeline = PortfolioPipeline::with_engine(config, CharacteristicEngine::with_registry(registry));
    let output = pipeline.run(&bundle).unwrap();

    assert_eq!(output.portfolios.height(), 2);
    let ls = float_values(&output.portfolios, LS_COL).unwrap();
    assert_relative_eq!(ls[0].unwrap(), -0.4, epsilon = 1e-12);
    assert_relative_eq!(ls[1].unwrap(), -0.6, epsilon = 1e-12);
}
