//! Set of useful parser combinators

// crate modules
use amtools_utils::StringExt;

// nom parser combinators
use nom::character::complete::{alpha1, one_of};
use nom::combinator::{all_consuming, opt};
use nom::error::{Error, ErrorKind};
use nom::number::complete::double;
use nom::{Err, IResult};

/// Coerce a raw table field to a numeric value
///
/// The whole field must be consumed for the value to count as a clean
/// measurement. Extrapolated values are flagged with trailing `#` markers in
/// the published tables and placeholders such as `*` or blanks also appear,
/// all of which are rejected here.
pub(crate) fn clean_double(i: &str) -> Option<f64> {
    all_consuming(double::<&str, Error<&str>>)(i.trim())
        .ok()
        .map(|(_, value)| value)
}

/// Parse a nuclide name into an element symbol and mass number
///
/// Can be:
///     - Fe56, fe56, FE56
///     - Fe-56, fe_56
///
/// Full is <element><separator><mass number>, where the separator is
/// optional. The symbol is capitalised to the conventional form.
pub(crate) fn nuclide_from_str(i: &str) -> IResult<&str, (String, u32)> {
    let (i, element) = element(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, mass_number) = nom::character::complete::u32(i)?;

    Ok((i, (element.to_lowercase().capitalise(), mass_number)))
}

/// Get the element symbol
fn element(i: &str) -> IResult<&str, &str> {
    let (i, element) = alpha1(i)?;

    if element.len() > 2 {
        Err(Err::Error(Error::new(i, ErrorKind::Fail)))
    } else {
        Ok((i, element))
    }
}

/// List of possible separators people may use
fn separator(i: &str) -> IResult<&str, char> {
    one_of("_-")(i)
}
