use odataq::datatype::{lookup_storage_name, AttributeTypeInfo, AttributeTypeMap, SemanticType};
use odataq::operator::{OperatorClass, OperatorToken, FILTER_OPERATORS};
use serde_json::json;

#[test]
fn dataverse_type_names_fold_into_semantic_types() {
    let cases = [
        ("Integer", SemanticType::Number),
        ("Money", SemanticType::Number),
        ("DateTime", SemanticType::Date),
        ("Picklist", SemanticType::OptionSet),
        ("Status", SemanticType::OptionSet),
        ("Owner", SemanticType::Lookup),
        ("Customer", SemanticType::Lookup),
        ("Memo", SemanticType::String),
        ("somethingnew", SemanticType::String),
    ];
    for (name, expected) in cases {
        assert_eq!(name.parse::<SemanticType>().unwrap(), expected, "{name}");
    }
}

#[test]
fn only_strings_take_string_functions() {
    for semantic in SemanticType::ALL {
        assert_eq!(semantic.supports_string_functions(), semantic == SemanticType::String, "{semantic}");
    }
}

#[test]
fn attribute_map_accepts_both_forms() {
    let map: AttributeTypeMap = serde_json::from_value(json!({
        "name": "string",
        "ownerid": { "type": "lookup", "targets": ["systemuser", "team"] }
    }))
    .unwrap();
    assert_eq!(map["name"], AttributeTypeInfo::new(SemanticType::String));
    assert_eq!(map["ownerid"], AttributeTypeInfo::lookup(["systemuser", "team"]));
    assert!(map["ownerid"].is_lookup());
    // serializes in the object form
    assert_eq!(serde_json::to_value(&map["name"]).unwrap(), json!({ "type": "string" }));
}

#[test]
fn lookup_storage_names() {
    assert_eq!(lookup_storage_name("ownerid"), "_ownerid_value");
    assert_eq!(lookup_storage_name("parentaccountid"), "_parentaccountid_value");
}

#[test]
fn operator_table_round_trips_tokens() {
    assert_eq!(FILTER_OPERATORS.len(), 12);
    for (operator, token, class) in FILTER_OPERATORS {
        assert_eq!(OperatorToken::parse(token), Some(*operator));
        assert_eq!(operator.token(), *token);
        assert_eq!(operator.class(), *class);
    }
    assert_eq!(OperatorToken::parse(" not contains "), Some(OperatorToken::NotContains));
    assert_eq!(OperatorToken::EqNull.class(), OperatorClass::NullCheck);
    assert_eq!(OperatorToken::parse("notcontains"), None);
}
