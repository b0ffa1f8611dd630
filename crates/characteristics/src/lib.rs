#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/charsort/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod volatility;
pub use volatility::{VolatilityCharacteristic, VolatilityConfig};

mod registry;
pub use registry::CharacteristicRegistry;

mod merge;
pub use merge::merge_tables;

mod engine;
pub use engine::CharacteristicEngine;

mod error;
pub use error::EngineError;
