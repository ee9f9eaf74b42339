// ntools modules
use amtools_mass::element;
use amtools_utils::{f, ValueExt};

// external crates
use serde::{Deserialize, Serialize};

/// A point on the binding energy curve
///
/// The most bound nuclide for its mass number, carrying both the measured
/// binding energy per nucleon and the semi-empirical mass formula estimate
/// for the same nuclide. All energies are in MeV.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurvePoint {
    /// Neutron count
    pub n: u32,
    /// Proton count
    pub z: u32,
    /// Mass number (N + Z)
    pub a: u32,
    /// Measured binding energy per nucleon (MeV)
    pub binding: f64,
    /// Semi-empirical mass formula estimate (MeV)
    pub estimate: f64,
}

impl CurvePoint {
    /// Difference between measurement and model (MeV)
    ///
    /// Positive where the nuclide is more bound than the formula predicts.
    pub fn residual(&self) -> f64 {
        self.binding - self.estimate
    }

    /// Simple formatted string to identify the nuclide
    pub fn name(&self) -> String {
        match element::symbol(self.z) {
            Some(symbol) => f!("{}{}", symbol, self.a),
            None => f!("Z{}A{}", self.z, self.a),
        }
    }
}

impl std::fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {:.4} MeV (semf {:.4}, residual {})",
            self.name(),
            self.binding,
            self.estimate,
            self.residual().sci(4, 2)
        )
    }
}

/// The reduced binding energy curve
///
/// One point per mass number, ascending in A, selected as the most bound
/// measured nuclide for that mass number. Ties at the group maximum are all
/// kept, so a mass number can appear more than once.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BindingCurve {
    /// The curve points in ascending mass number order
    pub points: Vec<CurvePoint>,
}

impl BindingCurve {
    /// The points of the curve as a slice
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of points on the curve
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for a curve with no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterator over the curve points
    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    /// The most bound point of the entire curve
    pub fn peak(&self) -> Option<&CurvePoint> {
        self.points
            .iter()
            .max_by(|a, b| a.binding.total_cmp(&b.binding))
    }
}

impl std::fmt::Display for BindingCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "BindingCurve {\n".to_string();
        s += &f!("    points: {}\n", self.len());
        if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
            s += &f!("    mass range: A={} to A={}\n", first.a, last.a);
        }
        if let Some(peak) = self.peak() {
            s += &f!("    peak: {peak}\n");
        }
        s += "}";

        write!(f, "{}", s)
    }
}

impl IntoIterator for BindingCurve {
    type Item = CurvePoint;
    type IntoIter = std::vec::IntoIter<CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> BindingCurve {
        BindingCurve {
            points: vec![
                CurvePoint {
                    n: 2,
                    z: 2,
                    a: 4,
                    binding: 7.073915,
                    estimate: 5.825,
                },
                CurvePoint {
                    n: 34,
                    z: 28,
                    a: 62,
                    binding: 8.794553,
                    estimate: 8.755,
                },
                CurvePoint {
                    n: 146,
                    z: 92,
                    a: 238,
                    binding: 7.570126,
                    estimate: 7.548,
                },
            ],
        }
    }

    #[test]
    fn peak_of_the_curve() {
        assert_eq!(curve().peak().unwrap().name(), "Ni62");
        assert_eq!(BindingCurve::default().peak(), None);
    }

    #[test]
    fn residual_sign_convention() {
        let point = &curve().points[1];
        assert!(point.residual() > 0.0);
        assert!((point.residual() - (8.794553 - 8.755)).abs() < 1e-12);
    }

    #[test]
    fn display_summary() {
        let text = curve().to_string();
        assert!(text.contains("points: 3"));
        assert!(text.contains("mass range: A=4 to A=238"));
        assert!(text.contains("peak: Ni62"));
    }
}
