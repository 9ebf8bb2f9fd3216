//! Data Transfer Objects (DTOs)
//!
//! Objects for transferring data across boundaries. Field names follow the
//! front-end's camelCase shape.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PhoneCountryInfo;

// =============================================================================
// Phone Country Views
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneCountryInfoDto {
    pub country_name: String,
    pub flag: String,
    pub country_code: String,
}

impl From<PhoneCountryInfo> for PhoneCountryInfoDto {
    fn from(info: PhoneCountryInfo) -> Self {
        Self {
            country_name: info.country_name().to_string(),
            flag: info.flag().to_string(),
            country_code: info.country_code().to_string(),
        }
    }
}

/// A lead phone number with its resolved country, if any
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneAnnotation {
    pub phone: String,
    pub country: Option<PhoneCountryInfoDto>,
}

impl PhoneAnnotation {
    pub fn new(phone: String, info: Option<PhoneCountryInfo>) -> Self {
        Self {
            phone,
            country: info.map(PhoneCountryInfoDto::from),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.country.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CountryCode;

    #[test]
    fn test_dto_from_info() {
        let info = PhoneCountryInfo::new(CountryCode::new("KZ").unwrap(), "Казахстан");
        let dto = PhoneCountryInfoDto::from(info);
        assert_eq!(dto.country_code, "KZ");
        assert_eq!(dto.country_name, "Казахстан");
        assert_eq!(dto.flag, "\u{1F1F0}\u{1F1FF}");
    }

    #[test]
    fn test_annotation_json() {
        let unresolved = PhoneAnnotation::new("abc".into(), None);
        assert!(!unresolved.is_resolved());
        assert_eq!(
            serde_json::to_string(&unresolved).unwrap(),
            r#"{"phone":"abc","country":null}"#
        );

        let info = PhoneCountryInfo::new(CountryCode::new("RU").unwrap(), "Россия");
        let resolved = PhoneAnnotation::new("89501234567".into(), Some(info));
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["country"]["countryCode"], "RU");
        assert_eq!(json["country"]["countryName"], "Россия");
    }
}
