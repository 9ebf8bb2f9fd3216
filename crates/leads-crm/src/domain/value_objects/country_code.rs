//! Country Code Value Object
//!
//! ISO 3166-1 alpha-2 region code and its regional indicator flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance from `'A'` to REGIONAL INDICATOR SYMBOL LETTER A (U+1F1E6)
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// Encode a two-char region code as a flag emoji.
///
/// Anything that is not exactly two chars long yields an empty string.
/// Non-letters are shifted by the same offset and do not render as a flag;
/// chars pushed past the Unicode scalar range are dropped.
///
/// ```
/// use leads_crm::country_code_to_flag_emoji;
///
/// assert_eq!(country_code_to_flag_emoji("de"), "\u{1F1E9}\u{1F1EA}");
/// assert_eq!(country_code_to_flag_emoji("DEU"), "");
/// ```
pub fn country_code_to_flag_emoji(country_code: &str) -> String {
    if country_code.is_empty() || country_code.chars().count() != 2 {
        return String::new();
    }

    country_code
        .to_uppercase()
        .chars()
        .filter_map(|c| char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET))
        .collect()
}

/// Two-letter uppercase region code
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a validated code; input is uppercased
    pub fn new(value: impl AsRef<str>) -> Result<Self, CountryCodeError> {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(CountryCodeError::Empty);
        }

        if value.len() != 2 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CountryCodeError::InvalidFormat(value.to_string()));
        }

        Ok(Self(value.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Regional indicator pair for this code
    pub fn flag_emoji(&self) -> String {
        country_code_to_flag_emoji(&self.0)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryCodeError {
    Empty,
    InvalidFormat(String),
}

impl std::error::Error for CountryCodeError {}

impl fmt::Display for CountryCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Country code cannot be empty"),
            Self::InvalidFormat(v) => write!(f, "Invalid country code: {:?}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const REGIONAL_INDICATORS: std::ops::RangeInclusive<u32> = 0x1F1E6..=0x1F1FF;

    #[test]
    fn test_flag_for_known_codes() {
        assert_eq!(country_code_to_flag_emoji("RU"), "\u{1F1F7}\u{1F1FA}");
        assert_eq!(country_code_to_flag_emoji("UA"), "\u{1F1FA}\u{1F1E6}");
        assert_eq!(country_code_to_flag_emoji("us"), country_code_to_flag_emoji("US"));
    }

    #[test]
    fn test_flag_degenerate_lengths() {
        assert_eq!(country_code_to_flag_emoji(""), "");
        assert_eq!(country_code_to_flag_emoji("A"), "");
        assert_eq!(country_code_to_flag_emoji("ABC"), "");
    }

    #[test]
    fn test_flag_non_letters_still_encoded() {
        let flag = country_code_to_flag_emoji("1!");
        assert_eq!(flag.chars().count(), 2);
        assert!(flag.chars().all(|c| !REGIONAL_INDICATORS.contains(&(c as u32))));
    }

    #[test]
    fn test_country_code_creation() {
        let code = CountryCode::new(" ru ").unwrap();
        assert_eq!(code.as_str(), "RU");
        assert_eq!(code.flag_emoji(), "\u{1F1F7}\u{1F1FA}");
    }

    #[test]
    fn test_invalid_country_code() {
        assert!(matches!(CountryCode::new(""), Err(CountryCodeError::Empty)));
        assert!(matches!(CountryCode::new("R1"), Err(CountryCodeError::InvalidFormat(_))));
        assert!(matches!(CountryCode::new("RUS"), Err(CountryCodeError::InvalidFormat(_))));
        assert!(CountryCode::new("ÄB").is_err());
    }

    #[test]
    fn test_country_code_serde() {
        let code: CountryCode = serde_json::from_str("\"kz\"").unwrap();
        assert_eq!(code.as_str(), "KZ");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"KZ\"");
        assert!(serde_json::from_str::<CountryCode>("\"KAZ\"").is_err());
    }

    proptest! {
        #[test]
        fn flag_is_two_regional_indicators(code in "[a-zA-Z]{2}") {
            let flag = country_code_to_flag_emoji(&code);
            let points: Vec<u32> = flag.chars().map(|c| c as u32).collect();
            prop_assert_eq!(points.len(), 2);
            prop_assert!(points.iter().all(|p| REGIONAL_INDICATORS.contains(p)));
            prop_assert_eq!(flag, country_code_to_flag_emoji(&code));
        }

        #[test]
        fn flag_empty_unless_two_chars(code in "\\PC{0,6}") {
            prop_assume!(code.chars().count() != 2);
            prop_assert_eq!(country_code_to_flag_emoji(&code), "");
        }
    }
}
