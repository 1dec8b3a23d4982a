//! Heuristic typing of untyped literals.
//!
//! Used only when no attribute metadata is available for a condition. The
//! literal parsers in here are shared with [`crate::format`], so that a value
//! classified as a number or a date is also rendered as one.

use regex::Regex;

// used to parse date and time literals
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::datatype::SemanticType;

lazy_static::lazy_static! {
    static ref GUID: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    ).unwrap();
    static ref DECIMAL: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$"
    ).unwrap();
    static ref YEAR_MONTH: Regex = Regex::new(r"^\d{4}-\d{2}$").unwrap();
}

/// Classifies a literal, first match wins: boolean, GUID, number, date, string.
///
/// The empty string classifies as [`SemanticType::Number`] because it parses
/// as zero. Callers rely on this, so it stays.
pub fn guess(raw: &str) -> SemanticType {
    if parse_boolean(raw).is_some() {
        SemanticType::Boolean
    } else if is_guid(raw) {
        SemanticType::Lookup
    } else if parse_number(raw).is_some() {
        SemanticType::Number
    } else if parse_date(raw).is_some() {
        SemanticType::Date
    } else {
        SemanticType::String
    }
}

/// Case-insensitive `true`/`false`, nothing else.
pub fn parse_boolean(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Canonical `8-4-4-4-12` hexadecimal form.
pub fn is_guid(raw: &str) -> bool {
    GUID.is_match(raw)
}

/// Lenient numeric parse: surrounding whitespace is ignored, blank text is
/// zero, `0x`/`0o`/`0b` prefixes are honored. Only finite results count.
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    let radix = match text.get(..2).map(|p| p.to_ascii_lowercase()) {
        Some(p) if p == "0x" => Some(16),
        Some(p) if p == "0o" => Some(8),
        Some(p) if p == "0b" => Some(2),
        _ => None,
    };
    let number = match radix {
        // the radix parser would take a sign after the prefix
        Some(_) if text[2..].starts_with(['+', '-']) => None,
        Some(radix) => u64::from_str_radix(&text[2..], radix).ok().map(|n| n as f64),
        // the float parser also accepts "inf" and "nan", which do not count
        None if DECIMAL.is_match(text) => text.parse::<f64>().ok(),
        None => None,
    };
    number.filter(|n| n.is_finite())
}

/// Accepts RFC 3339 / ISO-8601 instants (minute precision included), naive
/// date-times (taken as UTC), plain dates and year-months (midnight UTC,
/// first of the month), `Jan 15 2024`-style dates and RFC 2822 dates.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M:%S%.f%z"] {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    // a trailing Z is UTC, which naive date-times are taken as anyway
    let naive = text.strip_suffix(['Z', 'z']).unwrap_or(text);
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(dt.and_utc());
        }
    }
    if YEAR_MONTH.is_match(text) {
        return NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc());
    }
    // %b also takes full month names when parsing
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%b %d %Y", "%b %d, %Y", "%d %b %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(text, format) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }
    DateTime::parse_from_rfc2822(text).ok().map(|dt| dt.with_timezone(&Utc))
}
