//! Error types shared by all meterwatch crates.

use thiserror::Error;

/// Unified error type for detector and I/O operations
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value is outside its valid domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input data is malformed (non-finite values, bad schema, unparsable rows)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The series is shorter than the minimum window a detector requires
    #[error("Insufficient data: expected at least {expected} points, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation failed
    #[error("Computation error: {0}")]
    Computation(String),

    /// A detector returned a result sequence that is not index-aligned with
    /// its input. Internal invariant violation, never expected in normal use.
    #[error("Detector output misaligned with input: expected {expected} results, got {actual}")]
    MisalignedLength { expected: usize, actual: usize },

    /// Model encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error (file operations in the io crate)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a series containing NaN or infinite values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a parameter that must lie in an open interval
    pub fn out_of_range(name: &str, value: f64, low: f64, high: f64) -> Self {
        Self::InvalidParameter(format!(
            "{name} = {value} must be in the open interval ({low}, {high})"
        ))
    }
}
