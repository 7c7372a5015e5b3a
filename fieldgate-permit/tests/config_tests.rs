use fieldgate_permit::{PermitError, PermitOptions, Permitted, PermittedSet, configure};
use pretty_assertions::assert_eq;
use serde_json::json;

fn names(set: &PermittedSet) -> Vec<&str> {
    set.iter().collect()
}

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn configure_without_options_uses_defaults() {
    let resolved = configure(None);
    assert!(resolved.permitted.is_empty());
    assert!(!resolved.override_methods);
}

#[test]
fn default_options_permit_nothing() {
    let options = PermitOptions::default();
    assert_eq!(options.permitted, Permitted::Fields(Vec::new()));
    assert!(!options.override_methods);
}

// ── Permitted normalization ──────────────────────────────────────

#[test]
fn sequence_is_used_verbatim() {
    let resolved = configure(Some(PermitOptions::new().with_permitted(["name", "email"])));
    assert_eq!(names(&resolved.permitted), vec!["name", "email"]);
}

#[test]
fn space_delimited_string_matches_sequence() {
    let delimited = configure(Some(PermitOptions::new().with_delimited("name email")));
    let sequence = configure(Some(PermitOptions::new().with_permitted(["name", "email"])));
    assert_eq!(delimited.permitted, sequence.permitted);
}

#[test]
fn repeated_spaces_do_not_create_empty_names() {
    let resolved = configure(Some(PermitOptions::new().with_delimited("  name   email ")));
    assert_eq!(names(&resolved.permitted), vec!["name", "email"]);
}

#[test]
fn single_name_string_is_one_field() {
    let resolved = configure(Some(PermitOptions::new().with_delimited("name")));
    assert_eq!(names(&resolved.permitted), vec!["name"]);
}

#[test]
fn empty_string_permits_nothing() {
    let resolved = configure(Some(PermitOptions::new().with_delimited("")));
    assert!(resolved.permitted.is_empty());
}

#[test]
fn duplicates_are_tolerated() {
    let resolved = configure(Some(PermitOptions::new().with_permitted(["name", "name"])));
    assert_eq!(resolved.permitted.len(), 2);
    assert!(resolved.permitted.contains("name"));
    assert!(!resolved.permitted.contains("email"));
}

// ── JSON loading ─────────────────────────────────────────────────

#[test]
fn json_options_use_camel_case_keys() {
    let options = PermitOptions::from_json_value(&json!({
        "permitted": ["name"],
        "overrideMethods": true,
    }));
    assert_eq!(options.permitted, Permitted::Fields(vec!["name".into()]));
    assert!(options.override_methods);
}

#[test]
fn json_delimited_string() {
    let options = PermitOptions::from_json_value(&json!({"permitted": "name email"}));
    assert_eq!(options.permitted, Permitted::Delimited("name email".into()));
    assert_eq!(names(&options.resolve().permitted), vec!["name", "email"]);
}

#[test]
fn json_missing_fields_take_defaults() {
    let options = PermitOptions::from_json_value(&json!({}));
    assert_eq!(options, PermitOptions::default());
}

#[test]
fn json_non_object_degrades_to_defaults() {
    assert_eq!(PermitOptions::from_json_value(&json!(42)), PermitOptions::default());
    assert_eq!(PermitOptions::from_json_value(&json!(null)), PermitOptions::default());
    assert_eq!(PermitOptions::from_json_value(&json!(["name"])), PermitOptions::default());
}

#[test]
fn json_malformed_permitted_degrades_to_empty() {
    let options = PermitOptions::from_json_value(&json!({"permitted": 7, "overrideMethods": true}));
    assert!(options.resolve().permitted.is_empty());
}

#[test]
fn json_non_string_items_are_skipped() {
    let options = PermitOptions::from_json_value(&json!({"permitted": ["name", 3, null, "email"]}));
    assert_eq!(names(&options.resolve().permitted), vec!["name", "email"]);
}

#[test]
fn json_non_bool_override_flag_is_false() {
    let options = PermitOptions::from_json_value(&json!({"overrideMethods": "yes"}));
    assert!(!options.override_methods);
}

#[test]
fn json_str_reports_syntax_errors_only() {
    let err = PermitOptions::from_json_str("{").unwrap_err();
    assert!(matches!(err, PermitError::Json(_)));
    assert!(format!("{err}").contains("invalid JSON options"));

    let options = PermitOptions::from_json_str(r#"{"permitted": false}"#).unwrap();
    assert_eq!(options, PermitOptions::default());
}

// ── TOML loading ─────────────────────────────────────────────────

#[test]
fn toml_options() {
    let options = PermitOptions::from_toml_str(
        r#"
        permitted = ["name", "email"]
        overrideMethods = true
        "#,
    )
    .unwrap();
    let resolved = options.resolve();
    assert_eq!(names(&resolved.permitted), vec!["name", "email"]);
    assert!(resolved.override_methods);
}

#[test]
fn toml_delimited_string() {
    let options = PermitOptions::from_toml_str(r#"permitted = "name email""#).unwrap();
    assert_eq!(names(&options.resolve().permitted), vec!["name", "email"]);
}

#[test]
fn toml_syntax_error() {
    let err = PermitOptions::from_toml_str("permitted = [").unwrap_err();
    assert!(matches!(err, PermitError::Toml(_)));
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn options_serialize_camel_case() {
    let options = PermitOptions::new()
        .with_permitted(["name"])
        .with_override_methods(true);
    assert_eq!(
        serde_json::to_value(&options).unwrap(),
        json!({"permitted": ["name"], "overrideMethods": true})
    );
}
