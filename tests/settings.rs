use odataq::settings::Settings;
use odataq::spec::{OrderDirection, QuerySpec};
use odataq::{build, OdataqError};
use std::path::Path;

fn settings_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("odataq-{}-{}.toml", name, std::process::id()));
    std::fs::write(&path, contents).expect("temp file writable");
    path
}

#[test]
fn file_values_override_defaults() {
    let path = settings_file("override", "default_order_direction = \"desc\"\ndefault_top = 50\npretty = false\n");
    let settings = Settings::load(Some(path.as_path())).expect("settings load");
    std::fs::remove_file(&path).ok();
    assert_eq!(settings.default_order_direction, OrderDirection::Desc);
    assert_eq!(settings.default_top, Some(50));
    assert!(!settings.pretty);
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = Settings::load(Some(Path::new("/nonexistent/odataq-settings.toml"))).unwrap_err();
    assert!(matches!(err, OdataqError::Config(_)));
}

#[test]
fn defaults_fill_open_fields_only() {
    let settings = Settings {
        default_order_direction: OrderDirection::Desc,
        default_top: Some(50),
        ..Settings::default()
    };
    let open = settings.apply_defaults(QuerySpec::new().select(["name"]));
    assert_eq!(build(&open), "?$select=name&$top=50");

    let mut ordered = QuerySpec::new().top(5);
    ordered.order_attr = Some("name".into());
    assert_eq!(build(&settings.apply_defaults(ordered)), "?$orderby=name desc&$top=5");

    let explicit = QuerySpec::new().order_by("name", OrderDirection::Asc);
    assert_eq!(build(&settings.apply_defaults(explicit)), "?$orderby=name asc&$top=50");
}
