//! Inbound ports (Use case traits)
//!
//! Hexagonal architecture: application service interfaces.

use crate::application::dto::PhoneAnnotation;
use crate::domain::value_objects::PhoneCountryInfo;

/// Phone country use cases
pub trait PhoneCountryUseCases: Send + Sync {
    /// Resolve country, localized name and flag of a phone number
    fn phone_country_info(&self, phone: &str) -> Option<PhoneCountryInfo>;

    /// Localized country name only
    fn country_from_phone(&self, phone: &str) -> Option<String> {
        self.phone_country_info(phone).map(PhoneCountryInfo::into_country_name)
    }

    /// Annotate a batch of phones, one entry per input in input order
    fn annotate_phones(&self, phones: &[String]) -> Vec<PhoneAnnotation> {
        phones
            .iter()
            .map(|phone| PhoneAnnotation::new(phone.clone(), self.phone_country_info(phone)))
            .collect()
    }
}
