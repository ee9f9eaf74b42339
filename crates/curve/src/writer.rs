//! Write operations for binding energy curve data

// standard library
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// crate modules
use crate::curve::BindingCurve;
use crate::error::Result;

/// Write [BindingCurve] data to a CSV file
///
/// One row per curve point with a header row, suitable for any external
/// plotting tool.
///
/// ```no_run
/// # use amtools_curve::{read_curve, write_csv};
/// // Read the example file
/// let curve = read_curve("./data/mass_abridged.mas03").unwrap();
///
/// // Write the curve for plotting elsewhere
/// write_csv(&curve, "./curve.csv").unwrap();
/// ```
pub fn write_csv<P: AsRef<Path>>(curve: &BindingCurve, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in curve.iter() {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write [BindingCurve] data to a JSON file
///
/// A direct serialisation of the full curve structure.
///
/// ```no_run
/// # use amtools_curve::{read_curve, write_json};
/// // Read the example file
/// let curve = read_curve("./data/mass_abridged.mas03").unwrap();
///
/// // Write the curve for plotting elsewhere
/// write_json(&curve, "./curve.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(curve: &BindingCurve, path: P) -> Result<()> {
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, curve)?;
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
