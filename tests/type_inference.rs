use odataq::datatype::SemanticType;
use odataq::infer::{guess, is_guid, parse_date, parse_number};

#[test]
fn booleans_win_first() {
    assert_eq!(guess("true"), SemanticType::Boolean);
    assert_eq!(guess("FALSE"), SemanticType::Boolean);
    assert_eq!(guess("truthy"), SemanticType::String);
}

#[test]
fn guids_are_lookups() {
    assert_eq!(guess("0f8fad5b-d9cb-469f-a165-70867728950e"), SemanticType::Lookup);
    assert_eq!(guess("0F8FAD5B-D9CB-469F-A165-70867728950E"), SemanticType::Lookup);
    // wrong group lengths
    assert!(!is_guid("0f8fad5b-d9cb-469f-a165-70867728950"));
    assert!(!is_guid("{0f8fad5b-d9cb-469f-a165-70867728950e}"));
}

#[test]
fn numbers() {
    assert_eq!(guess("42"), SemanticType::Number);
    assert_eq!(guess("-3.5"), SemanticType::Number);
    assert_eq!(guess(".5"), SemanticType::Number);
    assert_eq!(guess("1e3"), SemanticType::Number);
    assert_eq!(guess("0x1F"), SemanticType::Number);
    assert_eq!(parse_number("0x1F"), Some(31.0));
    assert_eq!(parse_number("0b101"), Some(5.0));
    assert_eq!(parse_number(" 7 "), Some(7.0));
}

#[test]
fn blank_text_is_a_number() {
    // pinned: blank text parses as zero
    assert_eq!(guess(""), SemanticType::Number);
    assert_eq!(guess("   "), SemanticType::Number);
    assert_eq!(parse_number(""), Some(0.0));
}

#[test]
fn non_finite_and_non_numeric_text_is_not_a_number() {
    assert_eq!(parse_number("Infinity"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number("1e400"), None);
    assert_eq!(parse_number("12abc"), None);
    assert_eq!(parse_number("-0x10"), None);
    assert_eq!(guess("Infinity"), SemanticType::String);
}

#[test]
fn radix_digits_take_no_sign() {
    assert_eq!(parse_number("0x+1"), None);
    assert_eq!(parse_number("0x-1"), None);
    assert_eq!(parse_number("0b+1"), None);
    assert_eq!(guess("0x+1"), SemanticType::String);
}

#[test]
fn dates() {
    assert_eq!(guess("2024-01-15"), SemanticType::Date);
    assert_eq!(guess("2024-01-15T10:30:00Z"), SemanticType::Date);
    assert_eq!(guess("1/2/2024"), SemanticType::Date);
    assert_eq!(guess("Tue, 1 Jul 2003 10:52:37 +0200"), SemanticType::Date);
    assert!(parse_date("2024-13-45").is_none());
}

#[test]
fn short_and_spelled_out_dates() {
    assert_eq!(guess("2024-01"), SemanticType::Date);
    assert_eq!(guess("2024-01-15T10:30Z"), SemanticType::Date);
    assert_eq!(guess("Jan 15 2024"), SemanticType::Date);
    assert_eq!(guess("January 15, 2024"), SemanticType::Date);
    assert_eq!(guess("15 Jan 2024"), SemanticType::Date);
    assert!(parse_date("2024-13").is_none());
    assert!(parse_date("Jan 32 2024").is_none());
}

#[test]
fn everything_else_is_a_string() {
    assert_eq!(guess("John"), SemanticType::String);
    assert_eq!(guess("O'Brien"), SemanticType::String);
    assert_eq!(guess("12 Main Street"), SemanticType::String);
}
