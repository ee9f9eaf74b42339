//! Module for parsing atomic mass evaluation tables
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod parsers;
mod reader;
mod record;

pub mod element;

// Inline anything important for a nice public API
#[doc(inline)]
pub use record::{find_nuclide, MassRecord};

#[doc(inline)]
pub use reader::{read_mass_table, FIELD_WIDTHS, HEADER_LINES};

#[doc(inline)]
pub use error::{Error, Result};
