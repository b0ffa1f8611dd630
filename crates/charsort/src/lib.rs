#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/charsort/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use charsort_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use charsort_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use charsort_math as math;
#[cfg(feature = "characteristics")]
#[doc(inline)]
pub use charsort_characteristics as characteristics;
#[cfg(feature = "model")]
#[doc(inline)]
pub use charsort_model as model;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use charsort_utils as utils;
