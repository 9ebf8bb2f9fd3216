//! Config commands

use std::path::Path;

use crate::config::Config;
use crate::ConfigCommands;

pub fn handle(action: ConfigCommands, path: Option<&Path>) -> Result<(), String> {
    let path = path.ok_or("Cannot find home directory; pass --config")?;

    match action {
        ConfigCommands::Init => {
            Config::initial().save(path).map_err(|e| e.to_string())?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Show => {
            let config = Config::load(Some(path)).map_err(|e| e.to_string())?;
            let resolver = config.resolver_config();
            println!("path: {}", path.display());
            println!("locale: {}", resolver.locale);
            println!(
                "default_format: {}",
                config.default_format.as_deref().unwrap_or("(not set)")
            );
            for rule in &resolver.trunk_prefixes {
                println!(
                    "trunk_prefix: {} -> +{} ({}, min length {})",
                    rule.prefix, rule.calling_code, rule.region, rule.min_length
                );
            }
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load(Some(path)).map_err(|e| e.to_string())?;
            config.set(&key, &value)?;
            config.save(path).map_err(|e| e.to_string())?;
            println!("Set {} successfully", key);
        }
    }
    Ok(())
}
