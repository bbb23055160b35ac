//! Error types for ringca-core.

use thiserror::Error;

/// Result type for automaton operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures raised while building or running an automaton.
///
/// Every variant is a deterministic input problem. Nothing here is transient,
/// so callers should report rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Radius outside {1, 2, 3}.
    #[error("invalid radius {0}: must be 1, 2 or 3")]
    InvalidRadius(u32),

    /// Rule bit-string length does not match 2^(2r+1).
    #[error("rule for radius {radius} must be exactly {expected} bits, got {actual}")]
    InvalidRuleLength {
        radius: u32,
        expected: usize,
        actual: usize,
    },

    /// Rule bit-string contains something other than '0' or '1'.
    #[error("rule contains non-binary character {found:?} at position {position}")]
    InvalidRuleAlphabet { position: usize, found: char },

    /// Initial configuration narrower than one neighborhood.
    #[error("configuration must be at least {minimum} cells for radius {radius}, got {actual}")]
    ConfigurationTooShort {
        radius: u32,
        minimum: usize,
        actual: usize,
    },

    /// Configuration cell that is neither 0 nor 1.
    #[error("configuration contains non-binary value {found:?} at position {position}")]
    InvalidCellValue { position: usize, found: String },

    /// Generation count that is not a positive integer.
    #[error("generation count must be positive, got {0}")]
    InvalidGenerationCount(i64),
}

/// Fieldless view of [`Error`], for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRadius,
    InvalidRuleLength,
    InvalidRuleAlphabet,
    ConfigurationTooShort,
    InvalidCellValue,
    InvalidGenerationCount,
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRadius(_) => ErrorKind::InvalidRadius,
            Error::InvalidRuleLength { .. } => ErrorKind::InvalidRuleLength,
            Error::InvalidRuleAlphabet { .. } => ErrorKind::InvalidRuleAlphabet,
            Error::ConfigurationTooShort { .. } => ErrorKind::ConfigurationTooShort,
            Error::InvalidCellValue { .. } => ErrorKind::InvalidCellValue,
            Error::InvalidGenerationCount(_) => ErrorKind::InvalidGenerationCount,
        }
    }
}
