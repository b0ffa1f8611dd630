#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/charsort/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod reshape;
pub use reshape::reshape_long;

mod rank;
pub use rank::quantile_sort;

mod summary;
pub use summary::{average_by_year, buy_and_hold, cumulative_returns};

mod error;
pub use error::UtilsError;
