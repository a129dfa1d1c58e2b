//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is made of: names,
//! phone numbers and birthdays. Each is a [`Field`] parameterised by a
//! format rule, so invalid data cannot be represented in the system.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayFormat};
pub use errors::{ValidationError, ValidationResult};
pub use field::{Field, FieldFormat};
pub use name::{Name, NameFormat};
pub use phone::{PhoneFormat, PhoneNumber};
