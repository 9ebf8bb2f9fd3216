//! `phonenumber` crate adapter

use phonenumber::country;

use crate::domain::value_objects::CountryCode;
use crate::ports::outbound::{ParsedPhone, PhoneNumberParser};

/// Phone parser backed by the libphonenumber metadata of the `phonenumber` crate
#[derive(Clone, Copy, Debug, Default)]
pub struct LibPhoneNumberParser;

impl LibPhoneNumberParser {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneNumberParser for LibPhoneNumberParser {
    fn parse(&self, number: &str, region_hint: Option<&CountryCode>) -> Option<ParsedPhone> {
        let hint = match region_hint {
            Some(code) => match code.as_str().parse::<country::Id>() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::debug!(region = %code, "Region hint unknown to phone metadata");
                    return None;
                }
            },
            None => None,
        };

        // The phonenumber crate can panic on malformed input
        let input = number.to_string();
        let result = std::panic::catch_unwind(move || phonenumber::parse(hint, input));

        let parsed = match result {
            Ok(Ok(parsed)) => parsed,
            Ok(Err(err)) => {
                tracing::trace!(error = ?err, "Phone number rejected by parser");
                return None;
            }
            Err(_) => {
                tracing::warn!("phonenumber crate panicked while parsing phone number");
                return None;
            }
        };

        Some(ParsedPhone {
            region: parsed.country().id().map(|id| format!("{:?}", id)),
            calling_code: parsed.code().value(),
        })
    }
}
