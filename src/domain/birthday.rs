//! Birthday value object.

use super::errors::ValidationError;
use super::field::{Field, FieldFormat};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// chrono's `%Y`/`%m`/`%d` accept short or signed fields, so the shape is checked first.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format rule for birthdays: a strict `YYYY-MM-DD` calendar date.
#[derive(Debug)]
pub enum BirthdayFormat {}

impl FieldFormat for BirthdayFormat {
    type Value = NaiveDate;
    const NAME: &'static str = "Birthday";

    fn validate(raw: &str) -> Result<NaiveDate, ValidationError> {
        if !DATE_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
    }
}

/// A validated birth date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("1990-05-20").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(birthday.days_to_next_occurrence(today), Some(19));
/// ```
pub type Birthday = Field<BirthdayFormat>;

impl Field<BirthdayFormat> {
    /// Get the stored date.
    pub fn date(&self) -> NaiveDate {
        *self.get()
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A Feb 29 birthday falls on Feb 28 in non-leap years. Returns `None`
    /// only when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.date().month(), self.date().day());

        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if (month, day) == (2, 29) {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// Number of days from `today` until the next occurrence of this birthday.
    ///
    /// Returns `Some(0)` when the birthday is today, and `None` when the next
    /// occurrence falls past the last date chrono can represent.
    pub fn days_to_next_occurrence(&self, today: NaiveDate) -> Option<i64> {
        let next = match self.occurrence_in(today.year()) {
            Some(candidate) if candidate >= today => candidate,
            _ => self.occurrence_in(today.year().checked_add(1)?)?,
        };

        Some((next - today).num_days())
    }

    /// Days until the next occurrence, counted from the local calendar date.
    pub fn days_until_next(&self) -> Option<i64> {
        self.days_to_next_occurrence(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("1990-05-20").unwrap();
        assert_eq!(birthday.date(), date(1990, 5, 20));
        assert_eq!(birthday.to_string(), "1990-05-20");
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("2023-13-01").is_err());
        assert!(Birthday::new("2023-02-30").is_err());
        assert!(Birthday::new("2023-00-10").is_err());
        assert!(Birthday::new("20230101").is_err());
        assert!(Birthday::new("2023-1-01").is_err());
        assert!(Birthday::new("23-01-01").is_err());
        assert!(Birthday::new("+2023-01-01").is_err());
        assert!(Birthday::new("2023-01-01 ").is_err());
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("2024-02-29").is_ok());
        assert!(Birthday::new("2023-02-28").is_ok());
    }

    #[test]
    fn test_birthday_error_message() {
        let err = Birthday::new("2023-02-30").unwrap_err();
        assert_eq!(err.to_string(), "invalid date format");
    }

    #[test]
    fn test_days_to_next_occurrence_today() {
        let birthday = Birthday::new("1990-05-20").unwrap();
        assert_eq!(birthday.days_to_next_occurrence(date(2024, 5, 20)), Some(0));
    }

    #[test]
    fn test_days_to_next_occurrence_rolls_to_next_year() {
        let birthday = Birthday::new("1990-05-20").unwrap();
        // 2024-05-21 .. 2025-05-20 does not cross a Feb 29
        assert_eq!(birthday.days_to_next_occurrence(date(2024, 5, 21)), Some(364));
        // 2023-05-21 .. 2024-05-20 crosses 2024-02-29
        assert_eq!(birthday.days_to_next_occurrence(date(2023, 5, 21)), Some(365));
    }

    #[test]
    fn test_days_to_next_occurrence_later_this_year() {
        let birthday = Birthday::new("1985-12-15").unwrap();
        assert_eq!(birthday.days_to_next_occurrence(date(2024, 12, 1)), Some(14));
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let birthday = Birthday::new("2000-02-29").unwrap();
        assert_eq!(birthday.occurrence_in(2025), Some(date(2025, 2, 28)));
        assert_eq!(birthday.occurrence_in(2028), Some(date(2028, 2, 29)));

        assert_eq!(birthday.days_to_next_occurrence(date(2025, 2, 28)), Some(0));
        assert_eq!(birthday.days_to_next_occurrence(date(2025, 2, 1)), Some(27));
        // Next occurrence is 2026-02-28
        assert_eq!(birthday.days_to_next_occurrence(date(2025, 3, 1)), Some(364));
        // 2027-03-01 .. 2028-02-29
        assert_eq!(birthday.days_to_next_occurrence(date(2027, 3, 1)), Some(365));
    }

    #[test]
    fn test_days_to_next_occurrence_past_supported_range() {
        let birthday = Birthday::new("1990-05-20").unwrap();
        assert_eq!(birthday.days_to_next_occurrence(NaiveDate::MAX), None);

        let new_years_eve = Birthday::new("1990-12-31").unwrap();
        assert_eq!(new_years_eve.days_to_next_occurrence(NaiveDate::MAX), Some(0));
    }
}
