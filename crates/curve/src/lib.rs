//! Module for reducing mass tables to the binding energy curve
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod curve;
mod error;
mod pipeline;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use curve::{BindingCurve, CurvePoint};

#[doc(inline)]
pub use pipeline::{build_curve, most_bound_per_mass, read_curve};

#[doc(inline)]
pub use writer::{write_csv, write_json};

#[doc(inline)]
pub use error::{Error, Result};
