//! Integration tests for mass table parsing

use amtools_mass::{find_nuclide, read_mass_table, Error, MassRecord};
use rstest::{fixture, rstest};

#[fixture]
fn records() -> Vec<MassRecord> {
    read_mass_table("./data/mass_abridged.mas03").unwrap()
}

#[rstest]
fn all_measured_rows_survive(records: Vec<MassRecord>) {
    // 23 data rows in the file, 2 of which are flagged as systematics
    assert_eq!(records.len(), 21);
}

#[rstest]
fn unmeasured_rows_are_dropped(records: Vec<MassRecord>) {
    // He-10 and Db-268 carry the systematics flag
    assert!(!records.iter().any(|r| r.z == 2 && r.a == 10));
    assert!(!records.iter().any(|r| r.z == 105));
}

#[rstest]
#[case("fe56", 26, 30, 8.790354)] // case 1
#[case("SN-120", 50, 70, 8.504492)] // case 2
#[case("ni62", 28, 34, 8.794553)] // case 3
#[case("He4", 2, 2, 7.073915)] // case 4
#[case("u_238", 92, 146, 7.570126)] // case 5
fn known_nuclides(
    records: Vec<MassRecord>,
    #[case] name: &str,
    #[case] z: u32,
    #[case] n: u32,
    #[case] binding: f64,
) {
    let record = find_nuclide(&records, name).unwrap();
    assert_eq!(record.z, z);
    assert_eq!(record.n, n);
    assert_eq!(record.a, z + n);
    assert!((record.binding - binding).abs() < 1e-12);
}

#[rstest]
fn file_order_is_preserved(records: Vec<MassRecord>) {
    assert_eq!(records.first().unwrap().name(), "n1");
    assert_eq!(records.last().unwrap().name(), "U238");
}

#[test]
fn all_rows_unmeasured_is_an_empty_table() {
    let records = read_mass_table("./data/mass_unmeasured.mas03").unwrap();
    assert!(records.is_empty());
}

#[test]
fn malformed_line_is_fatal() {
    let result = read_mass_table("./data/mass_malformed.mas03");
    assert!(matches!(result, Err(Error::LineTooShort { .. })));
}

#[test]
fn missing_file_is_an_error() {
    assert!(read_mass_table("./data/does_not_exist.mas03").is_err());
}
