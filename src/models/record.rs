//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationResult};
use crate::error::{RecordError, RecordResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phone numbers and an optional birthday.
///
/// The name is fixed at construction and is the record's key inside an
/// [`AddressBook`](crate::AddressBook). Phones keep insertion order and may
/// contain duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Birthday, `null` when unknown
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is empty or the birthday is not
    /// a valid `YYYY-MM-DD` date.
    pub fn new(name: &str, birthday: Option<&str>) -> ValidationResult<Self> {
        let name = Name::new(name)?;
        let birthday = birthday.map(Birthday::new).transpose()?;

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, number: &str) -> ValidationResult<()> {
        self.phones.push(PhoneNumber::new(number)?);
        Ok(())
    }

    /// Remove the first phone equal to `number`.
    ///
    /// Returns the removed phone, or `None` if it was not on the record.
    pub fn remove_phone(&mut self, number: &str) -> Option<PhoneNumber> {
        let index = self.position_of(number)?;
        Some(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old_number` in place.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old_number` is not on the record
    /// - `RecordError::Validation` if `new_number` is invalid
    ///
    /// The phone list is unchanged in both cases.
    pub fn edit_phone(&mut self, old_number: &str, new_number: &str) -> RecordResult<()> {
        let index = self
            .position_of(old_number)
            .ok_or_else(|| RecordError::PhoneNotFound(old_number.to_string()))?;

        self.phones[index].set(new_number)?;
        Ok(())
    }

    /// Find the first phone equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Set or replace the birthday.
    ///
    /// An existing birthday is kept if `raw` is invalid.
    pub fn set_birthday(&mut self, raw: &str) -> ValidationResult<()> {
        match self.birthday.as_mut() {
            Some(birthday) => birthday.set(raw),
            None => {
                self.birthday = Some(Birthday::new(raw)?);
                Ok(())
            }
        }
    }

    /// Remove the birthday, returning the previous one.
    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Days from `today` until the next birthday.
    ///
    /// `None` if no birthday is set or the next one is past chrono's date range.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .and_then(|birthday| birthday.days_to_next_occurrence(today))
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == number)
    }
}

// Display support - `Contact: <name>, phones: <a>; <b>, birthday: <date|none>`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "none"),
        }
    }
}
