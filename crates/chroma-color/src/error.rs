//! Error types for color parsing.
//!
//! The conversion and interpolation pipeline is total over
//! floating-point inputs and never fails; the only fallible surface is
//! parsing a color from text.

use thiserror::Error;

/// Color parsing error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex string is not 6 digits (after an optional `#`).
    #[error("invalid hex color `{0}`: expected `#RRGGBB` or `RRGGBB`")]
    InvalidHexLength(String),

    /// Hex string contains a non-hexadecimal character.
    #[error("invalid hex digit in color `{0}`")]
    InvalidHexDigit(String),
}

/// Result type for color parsing.
pub type ColorResult<T> = Result<T, ColorError>;
