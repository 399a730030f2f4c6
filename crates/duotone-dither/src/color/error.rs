//! Error type for hex color parsing.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not of the form `#RRGGBB` / `RRGGBB`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 6 digits after stripping '#')
    InvalidLength {
        /// Number of characters found after the optional '#'
        found: usize,
    },
    /// Invalid hexadecimal character encountered
    InvalidHex(String),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err.to_string())
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { found } => write!(
                f,
                "invalid hex color length: expected 6 digits, found {}",
                found
            ),
            ParseColorError::InvalidHex(digits) => {
                write!(f, "invalid hex digits in color: {:?}", digits)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
