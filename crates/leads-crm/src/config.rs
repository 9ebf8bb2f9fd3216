//! Resolver configuration
//!
//! Controls the display-name locale and the domestic trunk-prefix table used
//! when a number fails to parse in international form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::value_objects::CountryCode;
use crate::error::{ConfigError, LeadsResult};

/// Locale of region display names
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(ConfigError::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Domestic dialing convention: numbers starting with `prefix` and at least
/// `min_length` chars long are redialed as `+{calling_code}{rest}` with
/// `region` as the parse hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrunkPrefixRule {
    pub prefix: String,
    pub calling_code: String,
    pub region: String,
    pub min_length: usize,
}

impl TrunkPrefixRule {
    /// Russian/CIS `8` trunk prefix in place of `+7`
    pub fn russia() -> Self {
        Self {
            prefix: "8".to_string(),
            calling_code: "7".to_string(),
            region: "RU".to_string(),
            min_length: 11,
        }
    }

    pub fn validate(&self) -> LeadsResult<()> {
        if self.prefix.is_empty() || !self.prefix.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidTrunkPrefix(self.prefix.clone()));
        }

        let code_len = self.calling_code.len();
        if !(1..=3).contains(&code_len) || !self.calling_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidCallingCode(self.calling_code.clone()));
        }

        if CountryCode::new(&self.region).is_err() {
            return Err(ConfigError::InvalidRegion(self.region.clone()));
        }

        if self.min_length < self.prefix.len() {
            return Err(ConfigError::MinLengthTooShort {
                prefix: self.prefix.clone(),
                min_length: self.min_length,
            });
        }

        Ok(())
    }

    /// Region hint as a validated code
    pub fn region_code(&self) -> Option<CountryCode> {
        CountryCode::new(&self.region).ok()
    }
}

/// Phone country resolver configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub locale: Locale,
    pub trunk_prefixes: Vec<TrunkPrefixRule>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Ru,
            trunk_prefixes: vec![TrunkPrefixRule::russia()],
        }
    }
}

impl ResolverConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn validate(&self) -> LeadsResult<()> {
        self.trunk_prefixes.iter().try_for_each(TrunkPrefixRule::validate)
    }
}
