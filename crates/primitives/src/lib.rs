#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/charsort/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod bundle;
pub use bundle::ReturnBundle;

mod columns;
pub use columns::{
    DATE_COL, RANK_COL, RET_COL, TICKER_COL, YEAR_MONTH_COL, float_values, index_dates,
    value_columns, with_month_index, with_year_month,
};

mod frequency;
pub use frequency::ReturnFrequency;

mod period;
pub use period::Period;

mod prices;
pub use prices::MIN_DAILY_OBSERVATIONS;

mod ticker;
pub use ticker::Ticker;

mod error;
pub use error::PrimitivesError;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
