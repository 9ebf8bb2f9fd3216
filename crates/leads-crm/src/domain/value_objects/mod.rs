//! Value Objects module
//!
//! Immutable, validated domain primitives.

pub mod country_code;
pub mod phone;
pub mod phone_country_info;

pub use country_code::{country_code_to_flag_emoji, CountryCode, CountryCodeError};
pub use phone::{Phone, PhoneError};
pub use phone_country_info::PhoneCountryInfo;
