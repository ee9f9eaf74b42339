//! Result and Error types for the semf module

/// Type alias for `Result<T, semf::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `amtools-semf`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Proton and neutron slices of different lengths in a batch evaluation
    #[error("mismatched batch lengths (expected {expected:?}, found {found:?})")]
    LengthMismatch { expected: usize, found: usize },
}
