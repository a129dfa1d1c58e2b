//! Configuration management for the address book binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::directory::DEFAULT_BATCH_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default backing store file
pub const DEFAULT_STORE_PATH: &str = "address_book.json";

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing store file (default: "address_book.json")
    pub store_path: PathBuf,

    /// Records per batch when listing (default: 5)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Backing store file (default: "address_book.json")
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per batch, at least 1 (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine, a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let store_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));

        if store_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", DEFAULT_BATCH_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            store_path,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            page_size: DEFAULT_BATCH_SIZE,
            log_level: "error".to_string(),
        }
    }
}
