//! Pure rendering of conversion results: display lines, share text, JSON.

use anyhow::{Context, Result, bail};
use ethio_calendar::EthiopianDate;
use serde::Serialize;

use crate::cli::OutputArgs;
use crate::config;

/// Month-name language for rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Amharic,
}

/// Parses a display language name string into the corresponding enum variant.
pub fn parse_language(s: &str) -> Result<Language> {
    match s.to_lowercase().as_str() {
        "english" => Ok(Language::English),
        "amharic" => Ok(Language::Amharic),
        other => bail!("unknown display language: {other:?}"),
    }
}

fn month_name(date: EthiopianDate, language: Language) -> &'static str {
    match language {
        Language::English => date.month_name(),
        Language::Amharic => date.month_name_amharic(),
    }
}

/// Renders the single-line display form `"{day} {month} {year}"`.
pub fn display_line(date: EthiopianDate, language: Language) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        month_name(date, language),
        date.year()
    )
}

/// Renders the shareable plain-text form: the display line behind the
/// configured prefix.
pub fn share_line(date: EthiopianDate, language: Language, prefix: &str) -> String {
    format!("{prefix}{}", display_line(date, language))
}

/// Structured conversion result for JSON output.
#[derive(Debug, Serialize)]
pub struct DateOutput {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub month_name: String,
}

impl DateOutput {
    /// Builds the JSON-facing view of a converted date.
    pub fn new(date: EthiopianDate, language: Language) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            month_name: month_name(date, language).to_string(),
        }
    }
}

/// Serializes a conversion result to a pretty JSON string.
pub fn to_json(output: &DateOutput) -> Result<String> {
    serde_json::to_string_pretty(output).context("failed to serialize result to JSON")
}

/// Resolves output options against the config file and prints the
/// converted date to stdout.
pub fn emit(date: EthiopianDate, opts: &OutputArgs) -> Result<()> {
    let cfg = config::load(opts.config.as_deref())?;
    let language = if opts.amharic {
        Language::Amharic
    } else {
        parse_language(&cfg.display.language)?
    };

    if opts.json {
        println!("{}", to_json(&DateOutput::new(date, language))?);
    } else if opts.share {
        println!("{}", share_line(date, language, &cfg.share.prefix));
    } else {
        println!("{}", display_line(date, language));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethio_calendar::from_gregorian;

    fn new_year_2017() -> EthiopianDate {
        from_gregorian(2024, 9, 11).unwrap()
    }

    #[test]
    fn parse_language_known() {
        assert_eq!(parse_language("english").unwrap(), Language::English);
        assert_eq!(parse_language("amharic").unwrap(), Language::Amharic);
        assert_eq!(parse_language("Amharic").unwrap(), Language::Amharic);
    }

    #[test]
    fn parse_language_unknown() {
        let err = parse_language("oromo").unwrap_err();
        assert!(err.to_string().contains("unknown display language"));
    }

    #[test]
    fn display_line_english() {
        assert_eq!(
            display_line(new_year_2017(), Language::English),
            "01 Meskerem 2017"
        );
    }

    #[test]
    fn display_line_amharic() {
        assert_eq!(
            display_line(new_year_2017(), Language::Amharic),
            "01 መስከረም 2017"
        );
    }

    #[test]
    fn share_line_uses_prefix() {
        assert_eq!(
            share_line(new_year_2017(), Language::English, "Ethiopian date: "),
            "Ethiopian date: 01 Meskerem 2017"
        );
    }

    #[test]
    fn json_shape() {
        let output = DateOutput::new(new_year_2017(), Language::English);
        let json = to_json(&output).unwrap();
        assert!(json.contains("\"year\": 2017"));
        assert!(json.contains("\"month\": 1"));
        assert!(json.contains("\"day\": 1"));
        assert!(json.contains("\"month_name\": \"Meskerem\""));
    }

    #[test]
    fn json_amharic_month_name() {
        let output = DateOutput::new(new_year_2017(), Language::Amharic);
        let json = to_json(&output).unwrap();
        assert!(json.contains("መስከረም"));
    }
}
