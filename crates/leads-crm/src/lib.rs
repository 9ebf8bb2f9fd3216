//! Leads CRM - phone country annotation
//!
//! Resolves the issuing country of a lead's phone number and renders it as a
//! localized display name plus a regional indicator flag.
//!
//! ## Architecture
//!
//! - **Domain Layer**: `Phone`, `CountryCode`, `PhoneCountryInfo` value objects
//!   and the `PhoneCountryResolver` domain service
//! - **Ports Layer**: `PhoneNumberParser` and `RegionNameResolver` outbound ports,
//!   `PhoneCountryUseCases` inbound port
//! - **Application Layer**: `PhoneCountryService` and DTOs
//! - **Infrastructure Layer**: `phonenumber` adapter and bundled locale tables
//!
//! ## Quick start
//!
//! ```no_run
//! let info = leads_crm::get_phone_country_info("+380 50 123 45 67").unwrap();
//! assert_eq!(info.country_code().as_str(), "UA");
//! println!("{} {}", info.flag(), info.country_name());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::{PhoneAnnotation, PhoneCountryInfoDto, PhoneCountryService};
pub use config::{Locale, ResolverConfig, TrunkPrefixRule};
pub use domain::services::PhoneCountryResolver;
pub use domain::value_objects::{country_code_to_flag_emoji, CountryCode, Phone, PhoneCountryInfo};
pub use error::{ConfigError, LeadsResult, RegionNameError};
pub use infrastructure::{LibPhoneNumberParser, StaticRegionNames};
pub use ports::inbound::PhoneCountryUseCases;
pub use ports::outbound::{ParsedPhone, PhoneNumberParser, RegionNameResolver};

/// Resolve the country of `phone` using the bundled parser and Russian names.
///
/// Returns `None` for anything that cannot be resolved to a named country.
pub fn get_phone_country_info(phone: &str) -> Option<PhoneCountryInfo> {
    PhoneCountryService::with_defaults().phone_country_info(phone)
}

/// Localized country name for `phone`.
///
/// Narrow accessor kept for call-sites that only display the name.
pub fn get_country_from_phone(phone: &str) -> Option<String> {
    PhoneCountryService::with_defaults().country_from_phone(phone)
}
