//! Leads CLI
//!
//! Command-line interface for lead phone annotation.
//!
//! # Usage
//!
//! ```bash
//! leads phone resolve "+380 50 123 45 67" 89501234567
//! leads phone country 89501234567
//! cat phones.txt | leads phone resolve --format json
//! leads flag RU UA KZ
//! leads config set locale en
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leads_crm::{Locale, ResolverConfig};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "leads")]
#[command(author = "Leads")]
#[command(version)]
#[command(about = "Leads CRM Command Line Interface", long_about = None)]
struct Cli {
    /// Output format (defaults to the config file, then table)
    #[arg(long, short)]
    format: Option<output::OutputFormat>,

    /// Locale of country names (ru, en)
    #[arg(long, env = "LEADS_LOCALE")]
    locale: Option<Locale>,

    /// Config file path
    #[arg(long, env = "LEADS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve phone numbers to countries
    Phone {
        #[command(subcommand)]
        action: PhoneCommands,
    },
    /// Print flag emoji for region codes
    Flag {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum PhoneCommands {
    /// Resolve country, name and flag; reads stdin lines when no phone is given
    Resolve { phones: Vec<String> },
    /// Print only the localized country name
    Country { phone: String },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Write the default configuration
    Init,
    /// Show the effective configuration
    Show,
    /// Set configuration value
    Set { key: String, value: String },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let config_path = cli.config.or_else(config::Config::default_path);
    let path = config_path.as_deref();
    let (format, locale) = (cli.format, cli.locale);

    let settings = || -> Result<(ResolverConfig, output::OutputFormat), String> {
        let config = config::Config::load(path).map_err(|e| e.to_string())?;
        let mut resolver_config = config.resolver_config();
        if let Some(locale) = locale {
            resolver_config.locale = locale;
        }
        let format = format
            .or_else(|| config.format())
            .unwrap_or(output::OutputFormat::Table);
        Ok((resolver_config, format))
    };

    match cli.command {
        Commands::Phone { action } => {
            let (resolver_config, format) = settings()?;
            commands::phone::handle(action, &resolver_config, format)
        }
        Commands::Flag { codes } => {
            let (_, format) = settings()?;
            commands::flag::handle(&codes, format)
        }
        Commands::Config { action } => commands::config::handle(action, path),
    }
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
