//! Date extraction and multi-format parsing.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::FieldExtractor;
use super::patterns::DATE_TOKEN;

/// One accepted date format: an anchored shape regex plus the chrono pattern
/// used to parse strings of that shape.
///
/// The shape check keeps each attempt strict. chrono's `%Y` would happily
/// read "25" in "23/07/25" as the year 25, so formats must not bleed into
/// each other's inputs.
pub struct DateFormat {
    pub shape: Regex,
    pub chrono_format: &'static str,
}

impl DateFormat {
    fn new(shape: &str, chrono_format: &'static str) -> Self {
        Self {
            shape: Regex::new(shape).unwrap(),
            chrono_format,
        }
    }
}

lazy_static! {
    /// Accepted date formats, tried in order; first success wins.
    ///
    /// Two-digit years resolve through chrono's fixed `%y` pivot
    /// (00-68 => 20xx, 69-99 => 19xx), independent of any locale.
    pub static ref DATE_FORMATS: Vec<DateFormat> = vec![
        DateFormat::new(r"^\d{2}\.\d{2}\.\d{4}$", "%d.%m.%Y"),
        DateFormat::new(r"^\d{4}-\d{2}-\d{2}$", "%Y-%m-%d"),
        DateFormat::new(r"^\d{2}/\d{2}/\d{4}$", "%d/%m/%Y"),
        DateFormat::new(r"^\d{2}\.\d{2}\.\d{2}$", "%d.%m.%y"),
        DateFormat::new(r"^\d{2}/\d{2}/\d{2}$", "%d/%m/%y"),
    ];
}

/// Locate the first date-shaped token in free text.
///
/// No validation beyond the shape; "99.99.2025" is still a token here and
/// gets rejected by [`parse_date`].
pub fn find_date_token(text: &str) -> Option<&str> {
    DATE_TOKEN.find(text).map(|m| m.as_str())
}

/// Parse a date string against the format catalog, in catalog order.
///
/// Also the entry point for manually typed dates, so the input may be any
/// of the catalog shapes, surrounded by whitespace, and must not be assumed
/// machine-extracted.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    DATE_FORMATS.iter().find_map(|format| {
        if !format.shape.is_match(trimmed) {
            return None;
        }
        NaiveDate::parse_from_str(trimmed, format.chrono_format).ok()
    })
}

/// Date field extractor: locates a token, then parses it.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        find_date_token(text).and_then(parse_date)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_TOKEN
            .find_iter(text)
            .filter_map(|m| parse_date(m.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_catalog_formats() {
        assert_eq!(parse_date("23.07.2025"), Some(ymd(2025, 7, 23)));
        assert_eq!(parse_date("2025-07-23"), Some(ymd(2025, 7, 23)));
        assert_eq!(parse_date("23/07/2025"), Some(ymd(2025, 7, 23)));
        assert_eq!(parse_date("23.07.25"), Some(ymd(2025, 7, 23)));
        assert_eq!(parse_date("23/07/25"), Some(ymd(2025, 7, 23)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("99.99.2025"), None);
        assert_eq!(parse_date("31.02.2025"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_no_cross_format_reinterpretation() {
        // dd/MM/yy must not be swallowed by dd/MM/yyyy as year 25.
        assert_eq!(parse_date("23/07/25"), Some(ymd(2025, 7, 23)));
        // Dash-separated dates are located by the extractor but are not in
        // the parse catalog.
        assert_eq!(parse_date("23-07-2025"), None);
    }

    #[test]
    fn test_manual_entry_whitespace() {
        assert_eq!(parse_date("  23.07.2025 "), Some(ymd(2025, 7, 23)));
    }

    #[test]
    fn test_find_date_token() {
        let text = "REWE Markt GmbH\nBon 4711\n23.07.2025 14:31";
        assert_eq!(find_date_token(text), Some("23.07.2025"));
        assert_eq!(find_date_token("no date here"), None);
    }

    #[test]
    fn test_extract_first_token_in_document_order() {
        let extractor = DateExtractor::new();
        let text = "gedruckt 23.07.2025, gültig bis 01/01/2026";
        assert_eq!(extractor.extract(text), Some(ymd(2025, 7, 23)));
        assert_eq!(extractor.extract_all(text).len(), 2);
    }

    #[test]
    fn test_extract_token_that_fails_catalog() {
        // Located but unparseable: absent, not an error.
        let extractor = DateExtractor::new();
        assert_eq!(extractor.extract("Datum: 45.45.2025"), None);
    }
}
