//! Phone commands

use colored::Colorize;
use std::io::BufRead;
use tabled::Tabled;

use leads_crm::{PhoneAnnotation, PhoneCountryService, PhoneCountryUseCases, ResolverConfig};

use crate::{output::OutputFormat, PhoneCommands};

#[derive(Tabled)]
struct AnnotationRow {
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Flag")]
    flag: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Country")]
    country: String,
}

impl From<&PhoneAnnotation> for AnnotationRow {
    fn from(annotation: &PhoneAnnotation) -> Self {
        match &annotation.country {
            Some(country) => Self {
                phone: annotation.phone.clone(),
                flag: country.flag.clone(),
                code: country.country_code.clone(),
                country: country.country_name.clone(),
            },
            None => Self {
                phone: annotation.phone.clone(),
                flag: String::new(),
                code: "-".to_string(),
                country: "(unresolved)".to_string(),
            },
        }
    }
}

pub fn handle(
    action: PhoneCommands,
    config: &ResolverConfig,
    format: OutputFormat,
) -> Result<(), String> {
    let service = PhoneCountryService::from_config(config).map_err(|e| e.to_string())?;

    match action {
        PhoneCommands::Resolve { phones } => {
            let phones = if phones.is_empty() {
                read_lines(std::io::stdin().lock())?
            } else {
                phones
            };

            tracing::debug!(count = phones.len(), locale = %config.locale, "Resolving phones");
            let annotations = service.annotate_phones(&phones);
            format.print(&annotations, annotations.iter().map(AnnotationRow::from));

            if matches!(format, OutputFormat::Table) {
                let resolved = annotations.iter().filter(|a| a.is_resolved()).count();
                let summary = format!("{}/{} resolved", resolved, annotations.len());
                if resolved == annotations.len() {
                    println!("{}", summary.green());
                } else {
                    println!("{}", summary.yellow());
                }
            }
        }
        PhoneCommands::Country { phone } => match service.country_from_phone(&phone) {
            Some(name) => println!("{}", name),
            None => println!("{}", "(unknown)".dimmed()),
        },
    }
    Ok(())
}

/// Non-blank input lines
fn read_lines(reader: impl BufRead) -> Result<Vec<String>, String> {
    let mut phones = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| e.to_string())?;
        if !line.trim().is_empty() {
            phones.push(line);
        }
    }
    Ok(phones)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_from_annotations() {
        let service = PhoneCountryService::with_defaults();
        let annotations = service.annotate_phones(&["89501234567".to_string(), "x".to_string()]);

        let resolved = AnnotationRow::from(&annotations[0]);
        assert_eq!(resolved.code, "RU");
        assert_eq!(resolved.country, "Россия");

        let unresolved = AnnotationRow::from(&annotations[1]);
        assert_eq!(unresolved.code, "-");
        assert!(unresolved.flag.is_empty());
    }

    #[test]
    fn test_read_lines_skips_blank() {
        let input = std::io::Cursor::new("+380501234567\n\n   \n8 950 123 45 67\r\n\t\n");
        let phones = read_lines(input).unwrap();
        assert_eq!(phones, vec!["+380501234567", "8 950 123 45 67"]);
    }

    #[test]
    fn test_read_lines_empty_input() {
        assert!(read_lines(std::io::Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_read_lines_invalid_utf8() {
        let input = std::io::Cursor::new(vec![0xff, 0xfe, b'\n']);
        assert!(read_lines(input).is_err());
    }
}
