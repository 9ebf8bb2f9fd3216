//! Phone Country Info Value Object

use serde::Serialize;
use std::fmt;

use super::country_code::CountryCode;

/// Country a phone number belongs to, ready for display
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneCountryInfo {
    country_name: String,
    flag: String,
    country_code: CountryCode,
}

impl PhoneCountryInfo {
    /// Build from a resolved code; an empty name falls back to the code itself
    pub fn new(country_code: CountryCode, country_name: impl Into<String>) -> Self {
        let country_name = country_name.into();
        let country_name = if country_name.trim().is_empty() {
            country_code.as_str().to_string()
        } else {
            country_name
        };

        Self {
            country_name,
            flag: country_code.flag_emoji(),
            country_code,
        }
    }

    pub fn country_name(&self) -> &str {
        &self.country_name
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }

    pub fn into_country_name(self) -> String {
        self.country_name
    }
}

impl fmt::Display for PhoneCountryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag, self.country_name)
    }
}
