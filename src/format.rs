//! Type-aware rendering of literal values.

use chrono::SecondsFormat;
use serde_json::Value;

use crate::datatype::SemanticType;
use crate::infer::{is_guid, parse_boolean, parse_date, parse_number};

/// Renders `raw` as an OData literal of type `semantic`.
///
/// A value that does not have the shape its type demands (a boolean column
/// compared with `"yes"`, a lookup compared with something that is not a
/// GUID) falls back to a quoted string literal.
pub fn format_value(raw: &str, semantic: SemanticType) -> String {
    let literal = match semantic {
        SemanticType::Boolean => parse_boolean(raw).map(|b| b.to_string()),
        // keys are not string literals, so no quoting and no escaping
        SemanticType::Lookup => is_guid(raw).then(|| raw.to_string()),
        SemanticType::Number => parse_number(raw).map(number_text),
        SemanticType::Date => parse_date(raw)
            .map(|dt| quote(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))),
        SemanticType::OptionSet => Some(format_option_set(raw)),
        SemanticType::String => None,
    };
    literal.unwrap_or_else(|| quote(&escape_odata_string(raw)))
}

/// Option-set codes are numbers; text labels are matched as strings.
pub fn format_option_set(raw: &str) -> String {
    match parse_number(raw) {
        Some(code) => number_text(code),
        None => quote(&escape_odata_string(raw)),
    }
}

/// Doubles every single quote. Nothing else is escaped.
pub fn escape_odata_string(raw: &str) -> String {
    raw.replace('\'', "''")
}

/// [`escape_odata_string`] over an arbitrary JSON scalar. Every falsy value
/// (`null`, `false`, `0`, `""`) escapes to the empty string.
pub fn escape_odata_value(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::String(s) => escape_odata_string(s),
        other => escape_odata_string(&other.to_string()),
    }
}

/// Wraps already-escaped text in single quotes.
pub fn quote(escaped: &str) -> String {
    format!("'{}'", escaped)
}

/// Canonical text of a finite number: shortest round-trip digits, no negative
/// zero, exponent notation only for very large or very small magnitudes.
pub fn number_text(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{}", n)
    } else {
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    }
}
