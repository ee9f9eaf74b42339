//! Result and Error types for the mass module

/// Type alias for `Result<T, mass::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `amtools-mass`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Data line too short to cover the retained columns
    #[error("line {line} too short for the mass table format ({length} characters)")]
    LineTooShort { line: usize, length: usize },

    /// A retained field could not be parsed from its column range
    #[error("malformed {field} field on line {line}: \"{text}\"")]
    MalformedField {
        field: &'static str,
        line: usize,
        text: String,
    },
}
