//! User-facing messages and exit codes for validation failures.

use ringca_core::Error;

/// Exit status for any rejected input, whatever its kind.
pub const VALIDATION_EXIT_CODE: u8 = 2;

/// Exit status for terminal or file I/O failures.
pub const IO_EXIT_CODE: u8 = 1;

/// One message per error kind, worded for someone typing at the prompt.
pub fn describe(err: &Error) -> String {
    match err {
        Error::InvalidRadius(radius) => {
            format!("Radius must be 1, 2 or 3. You entered {radius}.")
        }
        Error::InvalidRuleLength { expected, actual, .. } if actual < expected => format!(
            "Cellular automaton (CA) rule must be exactly {expected} bits. \
             You only entered {actual} characters."
        ),
        Error::InvalidRuleLength { expected, actual, .. } => format!(
            "Cellular automaton (CA) rule must be exactly {expected} bits. \
             You entered {actual} characters."
        ),
        Error::InvalidRuleAlphabet { position, found } => format!(
            "Cellular automaton (CA) rule must be a bit string -- 0s and 1s only please. \
             Found {found:?} at position {position}."
        ),
        Error::ConfigurationTooShort { minimum, actual, .. } => format!(
            "Input string must be at least {minimum} bits. You only entered {actual} characters."
        ),
        Error::InvalidCellValue { position, found } => format!(
            "Input string must be a bit string -- 0s and 1s only please. \
             Found {found:?} at position {position}."
        ),
        Error::InvalidGenerationCount(count) => format!(
            "Number of generations must be a positive integer. You entered {count}."
        ),
    }
}
