//! Lenient parsing of publish dates in the mixture of formats found in
//! real metadata exports.
//!
//! A value that no recognized format accepts yields `None`, never an
//! error; the imputer's required-date policy turns that into a dropped
//! row. Partial dates (`2020 Dec`, bare `2020`) are clamped to the first
//! of the month or the year.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Full-date formats tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

static YEAR_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

static YEAR_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4} [A-Za-z]{3,9}$").unwrap());

/// Parse a date from any of the recognized textual formats.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // ISO datetimes: parse the date prefix.
    if trimmed.len() > 10 && trimmed.as_bytes()[4] == b'-' && trimmed.as_bytes()[7] == b'-' {
        if let Some(prefix) = trimmed.get(..10) {
            if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
                return Some(date);
            }
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    if YEAR_MONTH.is_match(trimmed) {
        let padded = format!("{} 1", trimmed);
        for format in ["%Y %b %d", "%Y %B %d"] {
            if let Ok(date) = NaiveDate::parse_from_str(&padded, format) {
                return Some(date);
            }
        }
    }

    if YEAR_ONLY.is_match(trimmed) {
        let year: i32 = trimmed.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}
