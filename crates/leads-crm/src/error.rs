//! Error types for Leads CRM

use thiserror::Error;

/// Region display-name lookup failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionNameError {
    /// Not a two-letter region code
    #[error("invalid region code: {0:?}")]
    InvalidRegionCode(String),
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Trunk prefix must be a non-empty run of digits
    #[error("invalid trunk prefix: {0:?}")]
    InvalidTrunkPrefix(String),

    /// Calling code must be 1-3 digits
    #[error("invalid calling code: {0:?}")]
    InvalidCallingCode(String),

    /// Region hint must be a two-letter code
    #[error("invalid region: {0:?}")]
    InvalidRegion(String),

    /// Minimum length shorter than the prefix it guards
    #[error("min_length {min_length} is shorter than prefix {prefix:?}")]
    MinLengthTooShort { prefix: String, min_length: usize },

    /// Unknown locale name
    #[error("unsupported locale: {0:?}")]
    UnsupportedLocale(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed config document
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for Leads CRM
pub type LeadsResult<T> = Result<T, ConfigError>;
