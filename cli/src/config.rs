//! CLI Configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use leads_crm::{ConfigError, LeadsResult, Locale, ResolverConfig, TrunkPrefixRule};

use crate::output::OutputFormat;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub locale: Option<Locale>,
    pub default_format: Option<String>,
    pub trunk_prefixes: Option<Vec<TrunkPrefixRule>>,
}

impl Config {
    /// Missing file means defaults
    pub fn load(path: Option<&Path>) -> LeadsResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if let Some(format) = config.default_format.as_deref() {
            OutputFormat::from_str(format, true)
                .map_err(|_| ConfigError::Parse(format!("Unknown output format: {}", format)))?;
        }
        config.resolver_config().validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> LeadsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Fully populated config, as written by `config init`
    pub fn initial() -> Self {
        let defaults = ResolverConfig::default();
        Self {
            locale: Some(defaults.locale),
            default_format: Some("table".to_string()),
            trunk_prefixes: Some(defaults.trunk_prefixes),
        }
    }

    /// `~/.leads/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".leads").join("config.toml"))
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        let defaults = ResolverConfig::default();
        ResolverConfig {
            locale: self.locale.unwrap_or(defaults.locale),
            trunk_prefixes: self
                .trunk_prefixes
                .clone()
                .unwrap_or(defaults.trunk_prefixes),
        }
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.default_format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f, true).ok())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "locale" => self.locale = Some(value.parse::<Locale>().map_err(|e| e.to_string())?),
            "default_format" => {
                OutputFormat::from_str(value, true)
                    .map_err(|_| format!("Unknown output format: {}", value))?;
                self.default_format = Some(value.to_lowercase());
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("leads-cli-{}-{}", name, std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load(Some(scratch_path("missing").as_path())).unwrap();
        assert!(config.locale.is_none());
        assert_eq!(config.resolver_config(), ResolverConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch_path("roundtrip");
        let mut config = Config::initial();
        config.set("locale", "en").unwrap();
        config.set("default_format", "JSON").unwrap();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded.locale, Some(Locale::En));
        assert!(matches!(loaded.format(), Some(OutputFormat::Json)));
        assert_eq!(loaded.resolver_config().trunk_prefixes, vec![TrunkPrefixRule::russia()]);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_rule_rejected_on_load() {
        let path = scratch_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            "[[trunk_prefixes]]\nprefix = \"x\"\ncalling_code = \"7\"\nregion = \"RU\"\nmin_length = 11\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ConfigError::InvalidTrunkPrefix(_))
        ));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_invalid_format_rejected_on_load() {
        let path = scratch_path("bad-format");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "locale = \"ru\"\ndefault_format = \"jsno\"\n").unwrap();

        let loaded = Config::load(Some(path.as_path()));
        assert!(matches!(loaded, Err(ConfigError::Parse(ref msg)) if msg.contains("jsno")));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_unknown_key() {
        let mut config = Config::default();
        assert!(config.set("api_key", "x").is_err());
        assert!(config.set("locale", "de").is_err());
        assert!(config.set("default_format", "xml").is_err());
    }
}
