//! Flag command

use serde::Serialize;
use tabled::Tabled;

use leads_crm::country_code_to_flag_emoji;

use crate::output::OutputFormat;

#[derive(Debug, Serialize, Tabled)]
pub struct FlagRow {
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Flag")]
    pub flag: String,
}

pub fn handle(codes: &[String], format: OutputFormat) -> Result<(), String> {
    let rows = flag_rows(codes);
    let invalid: Vec<&str> = rows
        .iter()
        .filter(|r| r.flag.is_empty())
        .map(|r| r.code.as_str())
        .collect();
    if !invalid.is_empty() {
        return Err(format!("Not a two-letter region code: {}", invalid.join(", ")));
    }

    format.print(&rows, rows.iter().map(|r| FlagRow {
        code: r.code.clone(),
        flag: r.flag.clone(),
    }));
    Ok(())
}

fn flag_rows(codes: &[String]) -> Vec<FlagRow> {
    codes
        .iter()
        .map(|code| FlagRow {
            code: code.to_uppercase(),
            flag: country_code_to_flag_emoji(code),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_rows() {
        let rows = flag_rows(&["ru".to_string(), "RUS".to_string()]);
        assert_eq!(rows[0].code, "RU");
        assert_eq!(rows[0].flag, "\u{1F1F7}\u{1F1FA}");
        assert!(rows[1].flag.is_empty());
    }

    #[test]
    fn test_invalid_code_is_error() {
        assert!(handle(&["A".to_string()], OutputFormat::Json).is_err());
    }
}
