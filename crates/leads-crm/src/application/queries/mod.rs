//! Query handlers
//!
//! Application services answering read-only questions about lead phones.

use tracing::debug;

use crate::config::{ResolverConfig, TrunkPrefixRule};
use crate::domain::services::PhoneCountryResolver;
use crate::domain::value_objects::PhoneCountryInfo;
use crate::error::LeadsResult;
use crate::infrastructure::{LibPhoneNumberParser, StaticRegionNames};
use crate::ports::inbound::PhoneCountryUseCases;
use crate::ports::outbound::{PhoneNumberParser, RegionNameResolver};

/// Phone country application service
pub struct PhoneCountryService<P = LibPhoneNumberParser, N = StaticRegionNames> {
    resolver: PhoneCountryResolver<P, N>,
}

impl PhoneCountryService {
    /// `phonenumber` parsing, Russian names, `8` to `+7` fallback
    pub fn with_defaults() -> Self {
        let config = ResolverConfig::default();
        Self::new(
            LibPhoneNumberParser::new(),
            StaticRegionNames::new(config.locale),
            config.trunk_prefixes,
        )
    }

    /// Production adapters driven by a validated config
    pub fn from_config(config: &ResolverConfig) -> LeadsResult<Self> {
        config.validate()?;
        debug!(
            locale = %config.locale,
            trunk_prefixes = config.trunk_prefixes.len(),
            "Building phone country service"
        );
        Ok(Self::new(
            LibPhoneNumberParser::new(),
            StaticRegionNames::new(config.locale),
            config.trunk_prefixes.clone(),
        ))
    }
}

impl<P, N> PhoneCountryService<P, N>
where
    P: PhoneNumberParser,
    N: RegionNameResolver,
{
    pub fn new(parser: P, names: N, trunk_prefixes: Vec<TrunkPrefixRule>) -> Self {
        Self {
            resolver: PhoneCountryResolver::new(parser, names, trunk_prefixes),
        }
    }

    pub fn resolver(&self) -> &PhoneCountryResolver<P, N> {
        &self.resolver
    }
}

impl<P, N> PhoneCountryUseCases for PhoneCountryService<P, N>
where
    P: PhoneNumberParser,
    N: RegionNameResolver,
{
    fn phone_country_info(&self, phone: &str) -> Option<PhoneCountryInfo> {
        self.resolver.resolve(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use crate::error::ConfigError;

    #[test]
    fn test_from_config_rejects_invalid_rules() {
        let mut config = ResolverConfig::default();
        config.trunk_prefixes.push(TrunkPrefixRule {
            prefix: String::new(),
            calling_code: "7".into(),
            region: "RU".into(),
            min_length: 11,
        });
        assert!(matches!(
            PhoneCountryService::from_config(&config),
            Err(ConfigError::InvalidTrunkPrefix(_))
        ));
    }

    #[test]
    fn test_from_config_keeps_rules() {
        let config = ResolverConfig::default().with_locale(Locale::En);
        let service = PhoneCountryService::from_config(&config).unwrap();
        assert_eq!(service.resolver().trunk_prefixes(), &[TrunkPrefixRule::russia()]);
    }

    #[test]
    fn test_english_locale() {
        let config = ResolverConfig::default().with_locale(Locale::En);
        let service = PhoneCountryService::from_config(&config).unwrap();
        assert_eq!(service.country_from_phone("+380501234567").as_deref(), Some("Ukraine"));
    }

    #[test]
    fn test_annotate_preserves_order() {
        let service = PhoneCountryService::with_defaults();
        let phones = vec![
            "+380501234567".to_string(),
            "not-a-number".to_string(),
            "89501234567".to_string(),
        ];

        let annotations = service.annotate_phones(&phones);
        assert_eq!(annotations.len(), 3);
        assert_eq!(annotations[0].phone, "+380501234567");
        assert_eq!(annotations[0].country.as_ref().unwrap().country_code, "UA");
        assert!(!annotations[1].is_resolved());
        assert_eq!(annotations[2].country.as_ref().unwrap().country_code, "RU");
    }
}
