#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/charsort/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod sanity;
pub use sanity::check_sorting_input;

mod portfolio;
pub use portfolio::{
    LS_COL, PortfolioBuilder, SortConfig, equal_weighted_portfolios, portfolio_column,
};

mod summary;
pub use summary::{long_short_summary, t_stat};

mod pipeline;
pub use pipeline::{PipelineConfig, PipelineOutput, PortfolioPipeline};

mod error;
pub use error::ModelError;

/// Re-export commonly used types.
pub mod prelude {
    pub use charsort_characteristics::CharacteristicEngine;
    pub use charsort_primitives::{ReturnBundle, ReturnFrequency};

    pub use super::{
        ModelError, PipelineConfig, PipelineOutput, PortfolioBuilder, PortfolioPipeline,
        SortConfig,
    };
}
