// crate modules
use crate::element;
use crate::parsers::nuclide_from_str;

// ntools modules
use amtools_utils::f;

// external crates
use serde::{Deserialize, Serialize};

/// A single measured nuclide from the mass table
///
/// Only the four fields needed for binding energy analysis are retained from
/// the published format. The binding energy is the measured average per
/// nucleon in MeV, converted from the keV given in the file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MassRecord {
    /// Neutron count
    pub n: u32,
    /// Proton count
    pub z: u32,
    /// Mass number (N + Z)
    pub a: u32,
    /// Measured binding energy per nucleon (MeV)
    pub binding: f64,
}

impl MassRecord {
    /// Simple formatted string to identify the nuclide
    ///
    /// ```rust
    /// # use amtools_mass::MassRecord;
    /// let record = MassRecord { n: 30, z: 26, a: 56, binding: 8.790354 };
    /// assert_eq!(record.name(), "Fe56");
    /// ```
    pub fn name(&self) -> String {
        match element::symbol(self.z) {
            Some(symbol) => f!("{}{}", symbol, self.a),
            None => f!("Z{}A{}", self.z, self.a),
        }
    }
}

impl std::fmt::Display for MassRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:.4} MeV", self.name(), self.binding)
    }
}

/// Find a nuclide in a set of records by common name
///
/// Names are an element symbol followed by the mass number, case insensitive,
/// with an optional `-` or `_` separator. Returns the first matching record.
///
/// ```rust
/// # use amtools_mass::{find_nuclide, read_mass_table};
/// let records = read_mass_table("./data/mass_abridged.mas03").unwrap();
///
/// let iron = find_nuclide(&records, "fe-56").unwrap();
/// assert_eq!((iron.z, iron.n), (26, 30));
/// ```
pub fn find_nuclide<'a>(records: &'a [MassRecord], name: &str) -> Option<&'a MassRecord> {
    let (_, (symbol, mass_number)) = nuclide_from_str(name).ok()?;
    records
        .iter()
        .find(|record| record.a == mass_number && element::symbol(record.z) == Some(symbol.as_str()))
}
