//! PhoneNumber value object.

use super::errors::ValidationError;
use super::field::{Field, FieldFormat};
use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly ten ASCII digits. `\d` would also accept non-ASCII digits.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Format rule for phone numbers.
///
/// # Validation Rules
///
/// - Exactly 10 ASCII digits
/// - No separators, spaces or leading `+`
#[derive(Debug)]
pub enum PhoneFormat {}

impl FieldFormat for PhoneFormat {
    type Value = String;
    const NAME: &'static str = "PhoneNumber";

    fn validate(raw: &str) -> Result<String, ValidationError> {
        if !PHONE_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(raw.to_string())
    }
}

/// A validated ten-digit phone number.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// ```
pub type PhoneNumber = Field<PhoneFormat>;

impl Field<PhoneFormat> {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456789").is_err());
        assert!(PhoneNumber::new("12345678901").is_err());
        assert!(PhoneNumber::new("123-456-7890").is_err());
        assert!(PhoneNumber::new("+123456789").is_err());
        assert!(PhoneNumber::new("12345abcde").is_err());
        assert!(PhoneNumber::new("1234567890\n").is_err());
        assert!(PhoneNumber::new("١٢٣٤٥٦٧٨٩٠").is_err());
        assert!(PhoneNumber::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_error_message() {
        let err = PhoneNumber::new("555").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("555".to_string()));
        assert_eq!(err.to_string(), "invalid phone number");
    }

    #[test]
    fn test_phone_set_revalidates() {
        let mut phone = PhoneNumber::new("1234567890").unwrap();
        assert!(phone.set("abc").is_err());
        assert_eq!(phone.as_str(), "1234567890");

        phone.set("5550001111").unwrap();
        assert_eq!(phone.as_str(), "5550001111");
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(format!("{}", phone), "1234567890");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
