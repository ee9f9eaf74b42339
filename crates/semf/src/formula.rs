//! Liquid drop model terms and evaluation

// crate modules
use crate::error::{Error, Result};

// external crates
use itertools::izip;

/// Volume term coefficient `aV` (MeV)
pub const VOLUME: f64 = 15.75;

/// Surface term coefficient `aS` (MeV)
pub const SURFACE: f64 = 17.8;

/// Coulomb term coefficient `aC` (MeV)
pub const COULOMB: f64 = 0.711;

/// Asymmetry term coefficient `aA` (MeV)
pub const ASYMMETRY: f64 = 23.7;

/// Pairing term coefficient `delta` (MeV)
pub const PAIRING: f64 = 11.18;

/// Nucleon pairing classification of a nuclide
///
/// Decides the sign of the pairing correction. Nuclei with fully paired
/// protons and neutrons gain a bonus, odd-odd nuclei pay a penalty, and a
/// single unpaired nucleon of either kind contributes nothing.
///
/// ```rust
/// # use amtools_semf::Pairing;
/// assert_eq!(Pairing::from_counts(6, 6), Pairing::EvenEven);
/// assert_eq!(Pairing::from_counts(1, 1), Pairing::OddOdd);
/// assert_eq!(Pairing::from_counts(6, 7), Pairing::Mixed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// Both proton and neutron counts even
    EvenEven,
    /// Both proton and neutron counts odd
    OddOdd,
    /// One count even, the other odd
    Mixed,
}

impl Pairing {
    /// Classify a nuclide from its proton and neutron counts
    pub fn from_counts(protons: u32, neutrons: u32) -> Self {
        match (protons % 2 == 0, neutrons % 2 == 0) {
            (true, true) => Self::EvenEven,
            (false, false) => Self::OddOdd,
            _ => Self::Mixed,
        }
    }

    /// Sign applied to the pairing term
    pub fn sign(&self) -> f64 {
        match self {
            Self::EvenEven => 1.0,
            Self::OddOdd => -1.0,
            Self::Mixed => 0.0,
        }
    }
}

/// Average binding energy per nucleon (MeV) of a single nuclide
///
/// Evaluates the semi-empirical mass formula for `protons` (Z) and `neutrons`
/// (N), with the mass number taken as `A = Z + N`.
///
/// ```text
/// E = aV
///     - aS / A^(1/3)
///     - aC * Z^2 / A^(4/3)
///     - aA * (A - 2Z)^2 / A^2
///     + sign * delta / A^(3/2)
/// ```
///
/// The caller must ensure at least one nucleon (`Z + N >= 1`). The formula
/// divides by the mass number, so the empty nuclide evaluates to a
/// meaningless non-finite value rather than an error.
///
/// ```rust
/// # use amtools_semf::binding_per_nucleon;
/// // Most bound nuclides sit around 8-9 MeV per nucleon
/// let energy = binding_per_nucleon(26, 30);
/// assert!((energy - 8.79).abs() < 0.2);
/// ```
pub fn binding_per_nucleon(protons: u32, neutrons: u32) -> f64 {
    let z = f64::from(protons);
    let a = f64::from(protons + neutrons);
    let sign = Pairing::from_counts(protons, neutrons).sign();

    VOLUME
        - SURFACE / a.cbrt()
        - COULOMB * z.powi(2) / a.powf(4.0 / 3.0)
        - ASYMMETRY * (a - 2.0 * z).powi(2) / a.powi(2)
        + sign * PAIRING / a.powf(1.5)
}

/// Element-wise binding energy per nucleon (MeV) over nuclide sequences
///
/// Batch equivalent of [binding_per_nucleon()], pairing the i-th proton count
/// with the i-th neutron count. The slices must be of equal length.
///
/// ```rust
/// # use amtools_semf::{binding_per_nucleon, binding_per_nucleon_batch};
/// let batch = binding_per_nucleon_batch(&[1, 6], &[1, 6]).unwrap();
/// assert_eq!(batch[0], binding_per_nucleon(1, 1));
/// assert_eq!(batch[1], binding_per_nucleon(6, 6));
/// ```
pub fn binding_per_nucleon_batch(protons: &[u32], neutrons: &[u32]) -> Result<Vec<f64>> {
    if protons.len() != neutrons.len() {
        return Err(Error::LengthMismatch {
            expected: protons.len(),
            found: neutrons.len(),
        });
    }

    Ok(izip!(protons, neutrons)
        .map(|(&z, &n)| binding_per_nucleon(z, n))
        .collect())
}

/// Total binding energy (MeV) of a single nuclide
///
/// The per-nucleon value scaled back up by the mass number.
///
/// ```rust
/// # use amtools_semf::binding_energy;
/// // Fe-56 binds around 490 MeV in total
/// assert!((binding_energy(26, 30) - 490.0).abs() < 5.0);
/// ```
pub fn binding_energy(protons: u32, neutrons: u32) -> f64 {
    binding_per_nucleon(protons, neutrons) * f64::from(protons + neutrons)
}
