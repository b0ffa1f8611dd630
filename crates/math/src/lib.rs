#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/charsort/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod quantile;
pub use quantile::{qcut_edges, qcut_labels, quantile_linear};

mod tstat;
pub use tstat::{LS_BAR_COL, LS_T_COL, N_OBS_COL, TStatSummary};

mod error;
pub use error::MathError;
