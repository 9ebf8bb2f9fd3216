//! Phone Value Object
//!
//! Free-form phone input with all whitespace stripped.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::TrunkPrefixRule;

/// Cleaned phone number as entered on a lead
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Strip surrounding and internal whitespace
    pub fn new(value: impl AsRef<str>) -> Result<Self, PhoneError> {
        let compact: String = value
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '\u{FEFF}')
            .collect();

        if compact.is_empty() {
            return Err(PhoneError::Empty);
        }

        Ok(Self(compact))
    }

    /// The cleaned input
    pub fn compact(&self) -> &str {
        &self.0
    }

    /// Length in chars
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// International form: a leading `+` is kept, otherwise one is added
    pub fn to_international(&self) -> String {
        if self.0.starts_with('+') {
            self.0.clone()
        } else {
            format!("+{}", self.0)
        }
    }

    /// Redial through a domestic trunk prefix.
    ///
    /// Returns `None` unless the number starts with the rule's prefix and is
    /// at least `min_length` chars long.
    pub fn with_trunk_prefix_replaced(&self, rule: &TrunkPrefixRule) -> Option<String> {
        if rule.prefix.is_empty() || self.char_count() < rule.min_length {
            return None;
        }

        self.0
            .strip_prefix(rule.prefix.as_str())
            .map(|rest| format!("+{}{}", rule.calling_code, rest))
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    Empty,
}

impl std::error::Error for PhoneError {}

impl fmt::Display for PhoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Phone number cannot be empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_removed() {
        let phone = Phone::new("  +7 950\t123 45\u{a0}67 ").unwrap();
        assert_eq!(phone.compact(), "+79501234567");
        assert_eq!(phone.char_count(), 12);
    }

    #[test]
    fn test_empty_phone() {
        assert!(matches!(Phone::new(""), Err(PhoneError::Empty)));
        assert!(matches!(Phone::new(" \t\n "), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_international_form() {
        assert_eq!(Phone::new("+380501234567").unwrap().to_international(), "+380501234567");
        assert_eq!(Phone::new("380501234567").unwrap().to_international(), "+380501234567");
    }

    #[test]
    fn test_trunk_prefix_replaced() {
        let rule = TrunkPrefixRule::russia();
        let phone = Phone::new("8 950 123 45 67").unwrap();
        assert_eq!(phone.with_trunk_prefix_replaced(&rule).as_deref(), Some("+79501234567"));
    }

    #[test]
    fn test_trunk_prefix_requires_length() {
        let rule = TrunkPrefixRule::russia();
        assert_eq!(Phone::new("8950123456").unwrap().with_trunk_prefix_replaced(&rule), None);
    }

    #[test]
    fn test_trunk_prefix_requires_prefix() {
        let rule = TrunkPrefixRule::russia();
        assert_eq!(Phone::new("+89501234567").unwrap().with_trunk_prefix_replaced(&rule), None);
        assert_eq!(Phone::new("79501234567").unwrap().with_trunk_prefix_replaced(&rule), None);
    }
}
