//! Substring matching of a query against a record's name and phones.

use crate::models::Record;

/// Which part of a record a query matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    /// Contact name (case-insensitive)
    Name,
    /// One of the contact's phone numbers (case-sensitive)
    Phone,
}

/// A prepared search query.
///
/// Names match case-insensitively, phone numbers match on the exact digit
/// substring. An empty query matches nothing.
#[derive(Debug, Clone)]
pub struct RecordQuery {
    raw: String,
    lowered: String,
}

impl RecordQuery {
    pub fn new(query: &str) -> Self {
        Self {
            raw: query.to_string(),
            lowered: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The first field of `record` the query matches, name before phones.
    pub fn matched_field(&self, record: &Record) -> Option<MatchedField> {
        if self.is_empty() {
            return None;
        }

        if record.name().as_str().to_lowercase().contains(&self.lowered) {
            return Some(MatchedField::Name);
        }

        record
            .phones()
            .iter()
            .any(|phone| phone.as_str().contains(&self.raw))
            .then_some(MatchedField::Phone)
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matched_field(record).is_some()
    }
}
