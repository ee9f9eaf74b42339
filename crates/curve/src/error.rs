//! Result and Error types for the curve module

/// Type alias for `Result<T, curve::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `amtools-curve`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to read the mass table behind the curve
    #[error("failed to read mass table")]
    MassTable(#[from] amtools_mass::Error),

    /// Failure to write CSV output
    #[error("failed CSV write operation")]
    CsvError(#[from] csv::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),
}
