use odataq::response::{normalize, select_display_properties, NormalizedResponse, ResponseShape};
use serde_json::{json, Value};

#[test]
fn value_envelopes_are_unwrapped() {
    let normalized = normalize(json!({ "value": [{ "id": 1 }], "@odata.context": "ctx" }));
    assert_eq!(normalized.into_value(), json!({ "entities": [{ "id": 1 }] }));
}

#[test]
fn normalized_responses_keep_their_keys() {
    let response = json!({ "entities": [{ "id": 1 }], "@odata.count": 1 });
    assert_eq!(normalize(response.clone()).into_value(), response);
}

#[test]
fn null_arrays_and_scalars() {
    assert_eq!(normalize(Value::Null).into_value(), json!({ "entities": [] }));
    assert_eq!(normalize(json!([1, 2])).into_value(), json!({ "entities": [1, 2] }));
    assert_eq!(normalize(json!(42)).into_value(), json!({ "entities": [42] }));
    assert_eq!(normalize(json!("x")).into_value(), json!({ "entities": ["x"] }));
}

#[test]
fn single_objects_are_wrapped() {
    let record = json!({ "id": 7, "name": "Contoso" });
    assert_eq!(normalize(record.clone()).entities, vec![record]);
    // non-array value/entities keys do not count as envelopes
    let odd = json!({ "value": 5, "entities": "many" });
    assert_eq!(normalize(odd.clone()).into_value(), json!({ "entities": [odd] }));
}

#[test]
fn value_wins_over_entities() {
    let both = json!({ "value": [1], "entities": [2], "extra": true });
    assert_eq!(ResponseShape::classify(both.clone()), ResponseShape::Wrapped(vec![json!(1)]));
    assert_eq!(normalize(both).into_value(), json!({ "entities": [1] }));
}

#[test]
fn normalizing_twice_changes_nothing() {
    let once = normalize(json!({ "value": [{ "id": 1 }, { "id": 2 }] }));
    let twice = normalize(once.clone().into_value());
    assert_eq!(once, twice);
}

#[test]
fn normalized_response_serializes_flat() {
    let normalized: NormalizedResponse =
        serde_json::from_value(json!({ "entities": [], "@odata.nextLink": "next" })).unwrap();
    assert_eq!(normalized.rest.get("@odata.nextLink"), Some(&json!("next")));
    assert_eq!(serde_json::to_value(&normalized).unwrap(), json!({ "entities": [], "@odata.nextLink": "next" }));
}

#[test]
fn display_properties() {
    let entity = json!({ "zeta": "z", "alpha": "a", "@odata.etag": "x", "nested": { "a": 1 } });
    assert_eq!(
        select_display_properties(&entity),
        vec![("alpha".to_string(), json!("a")), ("zeta".to_string(), json!("z"))]
    );
}

#[test]
fn display_properties_skip_nulls_and_collections() {
    let entity = json!({
        "name": "Contoso",
        "revenue": 1000,
        "active": false,
        "parent": null,
        "tags": ["a"],
        "@odata.editLink": "accounts(1)",
        "_ownerid_value@OData.Community.Display.V1.FormattedValue": "Jane"
    });
    let keys: Vec<String> = select_display_properties(&entity).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["_ownerid_value@OData.Community.Display.V1.FormattedValue", "active", "name", "revenue"]);
}

#[test]
fn display_order_ignores_case() {
    let entity = json!({ "b": 1, "A": 2, "a": 3, "C": 4 });
    let keys: Vec<String> = select_display_properties(&entity).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "A", "b", "C"]);
}

#[test]
fn display_order_puts_punctuation_before_digits_before_letters() {
    let entity = json!({ "a1": 1, "ab": 2, "a_b": 3, "B": 4 });
    let keys: Vec<String> = select_display_properties(&entity).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a_b", "a1", "ab", "B"]);
}

#[test]
fn non_objects_have_no_display_properties() {
    assert!(select_display_properties(&json!(null)).is_empty());
    assert!(select_display_properties(&json!([{ "a": 1 }])).is_empty());
    assert!(select_display_properties(&json!("text")).is_empty());
}
