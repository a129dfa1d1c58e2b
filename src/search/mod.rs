//! Search utilities for address book records.
//!
//! This module provides linear substring matching over contact names and
//! phone numbers.

pub mod record_query;

pub use record_query::{MatchedField, RecordQuery};
