//! Outbound ports
//!
//! Hexagonal architecture: the phone parsing and locale capabilities the
//! resolver depends on. Infrastructure provides the implementations.

use crate::domain::value_objects::CountryCode;
use crate::error::RegionNameError;

/// Structured result of a successful parse
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedPhone {
    /// Region the number belongs to, when it could be determined
    pub region: Option<String>,
    /// Country calling code (`7`, `380`, ...)
    pub calling_code: u16,
}

/// Phone number parser port
pub trait PhoneNumberParser: Send + Sync {
    /// Parse `number`, using `region_hint` for numbers without a country code.
    ///
    /// `None` means nothing could be parsed; this is ordinary control flow.
    fn parse(&self, number: &str, region_hint: Option<&CountryCode>) -> Option<ParsedPhone>;
}

/// Localized region display-name port
pub trait RegionNameResolver: Send + Sync {
    /// Display name of `region`.
    ///
    /// `Ok(None)` when the code is well formed but has no known name.
    fn display_name(&self, region: &str) -> Result<Option<String>, RegionNameError>;
}
