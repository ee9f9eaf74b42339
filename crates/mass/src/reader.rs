//! Read operations for fixed-width atomic mass evaluation files
//!
//! The published tables are fortran fixed-format with a fixed header block,
//! so fields are sliced by column range rather than split on whitespace.

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Range;
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::parsers::clean_double;
use crate::record::MassRecord;

// external crates
use log::{debug, trace, warn};

/// Number of header lines before the first data row
pub const HEADER_LINES: usize = 39;

/// Column widths of the published mass table format
pub const FIELD_WIDTHS: [usize; 23] = [
    1, 3, 5, 5, 5, 1, 3, 4, 1, 13, 11, 11, 9, 1, 2, 11, 9, 1, 3, 1, 12, 11, 1,
];

// Indices of the retained fields
const N_FIELD: usize = 2;
const Z_FIELD: usize = 3;
const A_FIELD: usize = 4;
const BINDING_FIELD: usize = 11;

/// Read a fixed-width mass table into a list of nuclide records
///
/// Returns a Result containing every measured nuclide in the file at `path`,
/// in file order. Rows flagged as extrapolated from systematics rather than
/// measured are dropped. A row that does not fit the fixed-width format at
/// all is a fatal error.
///
/// The binding energy per nucleon is converted from the keV of the file to
/// MeV.
///
/// ```rust
/// # use amtools_mass::read_mass_table;
/// // Read the example file
/// let records = read_mass_table("./data/mass_abridged.mas03").unwrap();
///
/// // Print a summary of every record
/// for record in &records {
///     println!("{record}");
/// }
/// ```
pub fn read_mass_table<P: AsRef<Path>>(path: P) -> Result<Vec<MassRecord>> {
    let reader = init_reader(path)?;

    let mut records = Vec::new();
    let mut data_rows = 0;
    let mut dropped = 0;

    for (index, line) in reader.lines().enumerate().skip(HEADER_LINES) {
        let line = line?;
        data_rows += 1;

        // line numbers from the top of the file, 1-based
        match parse_data_line(&line, index + 1)? {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    debug!("Parsed {} records ({dropped} rows unmeasured)", records.len());
    if records.is_empty() && data_rows > 0 {
        warn!("No measured binding energies found, table is empty");
    }

    Ok(records)
}

/// Initialise a reader from anything that can be turned into a path
fn init_reader(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Parse one data row, or None for a row without a measured binding energy
fn parse_data_line(line: &str, number: usize) -> Result<Option<MassRecord>> {
    let n = integer_field(line, N_FIELD, "N", number)?;
    let z = integer_field(line, Z_FIELD, "Z", number)?;
    let a = integer_field(line, A_FIELD, "A", number)?;

    // keV in the file, and anything unmeasured drops the whole row
    let binding = match clean_double(slice_field(line, BINDING_FIELD, number)?) {
        Some(value) => value / 1000.0,
        None => {
            trace!("Line {number}: no measured binding energy for N={n} Z={z}");
            return Ok(None);
        }
    };

    Ok(Some(MassRecord { n, z, a, binding }))
}

/// Slice a field out of a line by its column range
fn slice_field(line: &str, field: usize, number: usize) -> Result<&str> {
    line.get(field_range(field)).ok_or(Error::LineTooShort {
        line: number,
        length: line.len(),
    })
}

/// Parse an unsigned integer field
fn integer_field(line: &str, field: usize, name: &'static str, number: usize) -> Result<u32> {
    let text = slice_field(line, field, number)?;
    text.trim().parse().map_err(|_| Error::MalformedField {
        field: name,
        line: number,
        text: text.to_string(),
    })
}

/// Column range of a field from the fixed width schema
fn field_range(field: usize) -> Range<usize> {
    let start = FIELD_WIDTHS[..field].iter().sum::<usize>();
    start..start + FIELD_WIDTHS[field]
}
