//! `amtools` is a semi-modular toolkit of fast and reliable libraries for
//! nuclear binding energy analysis
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use amtools_utils as utils;

#[cfg(feature = "curve")]
#[cfg_attr(docsrs, doc(cfg(feature = "curve")))]
#[doc(inline)]
pub use amtools_curve as curve;

#[cfg(feature = "mass")]
#[cfg_attr(docsrs, doc(cfg(feature = "mass")))]
#[doc(inline)]
pub use amtools_mass as mass;

#[cfg(feature = "semf")]
#[cfg_attr(docsrs, doc(cfg(feature = "semf")))]
#[doc(inline)]
pub use amtools_semf as semf;
