//! Element symbol lookup by proton number

/// Element symbols indexed by proton number
///
/// Index 0 is the bare neutron, written lowercase in the published mass
/// tables to distinguish it from nitrogen.
pub const SYMBOLS: [&str; 119] = [
    "n", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge",
    "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd",
    "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg",
    "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Element symbol for a proton number, if one is known
///
/// ```rust
/// # use amtools_mass::element::symbol;
/// assert_eq!(symbol(26), Some("Fe"));
/// assert_eq!(symbol(300), None);
/// ```
pub fn symbol(protons: u32) -> Option<&'static str> {
    SYMBOLS.get(protons as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbols() {
        assert_eq!(symbol(0), Some("n"));
        assert_eq!(symbol(1), Some("H"));
        assert_eq!(symbol(50), Some("Sn"));
        assert_eq!(symbol(92), Some("U"));
        assert_eq!(symbol(118), Some("Og"));
    }

    #[test]
    fn beyond_table() {
        assert_eq!(symbol(119), None);
    }
}
