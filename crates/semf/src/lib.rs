//! Module for semi-empirical mass formula evaluation
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod formula;

// Inline anything important for a nice public API
#[doc(inline)]
pub use formula::{binding_energy, binding_per_nucleon, binding_per_nucleon_batch, Pairing};

#[doc(inline)]
pub use formula::{ASYMMETRY, COULOMB, PAIRING, SURFACE, VOLUME};

#[doc(inline)]
pub use error::{Error, Result};
