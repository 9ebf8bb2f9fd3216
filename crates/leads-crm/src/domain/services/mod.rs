//! Domain services module

use tracing::{debug, trace};

use crate::config::TrunkPrefixRule;
use crate::domain::value_objects::{CountryCode, Phone, PhoneCountryInfo};
use crate::ports::outbound::{ParsedPhone, PhoneNumberParser, RegionNameResolver};

/// Phone-to-country resolution domain service
///
/// Every failure path ends in `None`; nothing is raised to the caller.
pub struct PhoneCountryResolver<P, N> {
    parser: P,
    names: N,
    trunk_prefixes: Vec<TrunkPrefixRule>,
}

impl<P, N> PhoneCountryResolver<P, N>
where
    P: PhoneNumberParser,
    N: RegionNameResolver,
{
    pub fn new(parser: P, names: N, trunk_prefixes: Vec<TrunkPrefixRule>) -> Self {
        Self {
            parser,
            names,
            trunk_prefixes,
        }
    }

    pub fn trunk_prefixes(&self) -> &[TrunkPrefixRule] {
        &self.trunk_prefixes
    }

    /// Resolve the country a phone number was issued in
    pub fn resolve(&self, input: &str) -> Option<PhoneCountryInfo> {
        let phone = Phone::new(input).ok()?;

        let Some(parsed) = self.parse(&phone) else {
            debug!(phone = %phone, "Phone number could not be parsed");
            return None;
        };

        let Some(country_code) = parsed.region.as_deref().and_then(|r| CountryCode::new(r).ok())
        else {
            debug!(
                phone = %phone,
                calling_code = parsed.calling_code,
                "Phone number has no resolvable country"
            );
            return None;
        };

        let name = match self.names.display_name(country_code.as_str()) {
            Ok(name) => name.unwrap_or_default(),
            Err(e) => {
                debug!(phone = %phone, error = %e, "Country name lookup failed");
                return None;
            }
        };

        let info = PhoneCountryInfo::new(country_code, name);
        trace!(phone = %phone, country = %info.country_code(), "Resolved phone country");
        Some(info)
    }

    /// International parse first, then each matching trunk-prefix rule in order
    fn parse(&self, phone: &Phone) -> Option<ParsedPhone> {
        if let Some(parsed) = self.parser.parse(&phone.to_international(), None) {
            return Some(parsed);
        }

        self.trunk_prefixes.iter().find_map(|rule| {
            let redialed = phone.with_trunk_prefix_replaced(rule)?;
            trace!(
                phone = %phone,
                redialed = %redialed,
                region = %rule.region,
                "Retrying with trunk prefix"
            );
            self.parser.parse(&redialed, rule.region_code().as_ref())
        })
    }
}
