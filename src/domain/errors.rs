//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
///
/// The rejected input is kept for diagnostics but is not part of the
/// rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhone(String),

    /// The provided birthday is not a strict `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "invalid phone number"),
            Self::InvalidDate(_) => write!(f, "invalid date format"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
