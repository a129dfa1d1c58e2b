//! Name value object.

use super::errors::ValidationError;
use super::field::{Field, FieldFormat};

/// Format rule for contact names: any non-empty string.
#[derive(Debug)]
pub enum NameFormat {}

impl FieldFormat for NameFormat {
    type Value = String;
    const NAME: &'static str = "Name";

    fn validate(raw: &str) -> Result<String, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(raw.to_string())
    }
}

/// A contact name. Used as the record's key inside an address book.
pub type Name = Field<NameFormat>;

impl Field<NameFormat> {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.get()
    }
}
