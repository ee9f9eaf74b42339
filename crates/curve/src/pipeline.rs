//! Reduction of a mass table to the binding energy curve

// standard library
use std::path::Path;

// crate modules
use crate::curve::{BindingCurve, CurvePoint};
use crate::error::Result;

// ntools modules
use amtools_mass::{read_mass_table, MassRecord};
use amtools_semf::binding_per_nucleon;

// external crates
use itertools::Itertools;
use log::debug;

/// Select the most bound nuclide for every mass number
///
/// Records are grouped by mass number and only those matching the group
/// maximum binding energy survive. Exact ties all survive, so a mass number
/// can keep more than one record. Within a group the original file order is
/// preserved, and the result is ascending in A.
///
/// Applying the selection to its own output changes nothing.
pub fn most_bound_per_mass(records: &[MassRecord]) -> Vec<MassRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.a);

    let groups = sorted.into_iter().chunk_by(|record| record.a);

    let mut selected = Vec::new();
    for (_, group) in &groups {
        let isobars = group.collect::<Vec<MassRecord>>();
        let maximum = isobars
            .iter()
            .map(|record| record.binding)
            .fold(f64::NEG_INFINITY, f64::max);

        selected.extend(
            isobars
                .into_iter()
                .filter(|record| record.binding == maximum),
        );
    }

    selected
}

/// Build the binding energy curve from a set of measured records
///
/// Reduces the records to the most bound nuclide per mass number and
/// annotates every survivor with the semi-empirical mass formula estimate.
/// An empty table is a valid input and produces an empty curve.
///
/// ```rust
/// # use amtools_curve::build_curve;
/// # use amtools_mass::read_mass_table;
/// let records = read_mass_table("./data/mass_abridged.mas03").unwrap();
/// let curve = build_curve(&records);
///
/// for point in curve.iter() {
///     println!("{point}");
/// }
/// ```
pub fn build_curve(records: &[MassRecord]) -> BindingCurve {
    let points = most_bound_per_mass(records)
        .into_iter()
        .map(|record| CurvePoint {
            n: record.n,
            z: record.z,
            a: record.a,
            binding: record.binding,
            estimate: binding_per_nucleon(record.z, record.n),
        })
        .collect::<Vec<CurvePoint>>();

    debug!("Reduced {} records to {} curve points", records.len(), points.len());

    BindingCurve { points }
}

/// Read a mass table straight into a binding energy curve
///
/// Convenience function chaining [read_mass_table] from `amtools-mass` with
/// [build_curve()].
///
/// ```rust
/// # use amtools_curve::read_curve;
/// let curve = read_curve("./data/mass_abridged.mas03").unwrap();
///
/// // Print a summary of the curve
/// println!("{curve}");
/// ```
pub fn read_curve<P: AsRef<Path>>(path: P) -> Result<BindingCurve> {
    let records = read_mass_table(path)?;
    Ok(build_curve(&records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u32, z: u32, binding: f64) -> MassRecord {
        MassRecord {
            n,
            z,
            a: n + z,
            binding,
        }
    }

    #[test]
    fn selection_keeps_group_maximum() {
        // the three A=56 isobars, iron the most bound
        let records = vec![
            record(30, 26, 8.790354),
            record(29, 27, 8.694838),
            record(28, 28, 8.642779),
        ];
        let selected = most_bound_per_mass(&records);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].z, 26);
    }

    #[test]
    fn exact_ties_all_survive() {
        let records = vec![record(1, 0, 0.0), record(0, 1, 0.0)];
        let selected = most_bound_per_mass(&records);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn output_ascends_in_mass_number() {
        let records = vec![
            record(146, 92, 7.570126),
            record(2, 2, 7.073915),
            record(34, 28, 8.794553),
        ];
        let selected = most_bound_per_mass(&records);
        let masses = selected.iter().map(|r| r.a).collect::<Vec<u32>>();
        assert_eq!(masses, vec![4, 62, 238]);
    }

    #[test]
    fn selection_is_idempotent() {
        let records = vec![
            record(30, 26, 8.790354),
            record(29, 27, 8.694838),
            record(34, 28, 8.794553),
            record(33, 29, 8.718081),
            record(2, 2, 7.073915),
        ];
        let once = most_bound_per_mass(&records);
        let twice = most_bound_per_mass(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn estimates_match_direct_evaluation() {
        let records = vec![record(30, 26, 8.790354), record(70, 50, 8.504492)];
        let curve = build_curve(&records);
        for point in curve.iter() {
            assert_eq!(point.estimate, binding_per_nucleon(point.z, point.n));
        }
    }

    #[test]
    fn empty_table_is_an_empty_curve() {
        let curve = build_curve(&[]);
        assert!(curve.is_empty());
    }
}
