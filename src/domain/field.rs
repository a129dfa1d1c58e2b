//! Generic validated field.
//!
//! A [`Field`] owns exactly one value that has passed its format's validation
//! routine. The same routine runs on construction and on every [`Field::set`],
//! so there is no way to store an unchecked value.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// A format rule for a [`Field`].
///
/// Implementors are zero-sized markers; the rule lives in [`FieldFormat::validate`].
pub trait FieldFormat {
    /// The validated representation stored by the field.
    type Value: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Type name used in `Debug` output.
    const NAME: &'static str;

    /// Check raw input and convert it to the stored representation.
    fn validate(raw: &str) -> Result<Self::Value, ValidationError>;
}

/// A value holder that enforces its format rule on every assignment.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let mut phone = PhoneNumber::new("1234567890").unwrap();
/// assert!(phone.set("12-34").is_err());
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
pub struct Field<F: FieldFormat> {
    value: F::Value,
    format: PhantomData<F>,
}

impl<F: FieldFormat> Field<F> {
    /// Create a new field, validating the initial value.
    ///
    /// # Errors
    ///
    /// Returns the format's `ValidationError` if `raw` does not conform.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        F::validate(raw).map(|value| Self {
            value,
            format: PhantomData,
        })
    }

    /// Replace the value after re-validating it.
    ///
    /// On failure the previous value is left untouched.
    pub fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.value = F::validate(raw)?;
        Ok(())
    }

    /// Get the current value.
    pub fn get(&self) -> &F::Value {
        &self.value
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> F::Value {
        self.value
    }
}

impl<F: FieldFormat> Clone for Field<F> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            format: PhantomData,
        }
    }
}

impl<F: FieldFormat> PartialEq for Field<F> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<F: FieldFormat> Eq for Field<F> where F::Value: Eq {}

impl<F: FieldFormat> Hash for Field<F>
where
    F::Value: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<F: FieldFormat> fmt::Debug for Field<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(F::NAME).field(&self.value).finish()
    }
}

// Display support - the plain text form of the value
impl<F: FieldFormat> fmt::Display for Field<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<F: FieldFormat> FromStr for Field<F> {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as the plain text form
impl<F: FieldFormat> Serialize for Field<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.value)
    }
}

// Serde support - deserialize from string with validation
impl<'de, F: FieldFormat> Deserialize<'de> for Field<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(&s).map_err(serde::de::Error::custom)
    }
}
