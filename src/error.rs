//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit is not on the record
    #[error("phone number not found")]
    PhoneNotFound(String),
}

/// Errors that can occur during address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// An argument was outside its accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors that can occur while persisting or restoring an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing store failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The address book could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backing store content is corrupt or fails validation
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
