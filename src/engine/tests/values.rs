#[test]
fn test_string_valued_setting_accepts_string() {
    let resource = declare(STRING_VALUED_PATH)
        .with_value(json!("1"))
        .validate()
        .unwrap();
    assert_eq!(resource.value(), Some(&SuppliedValue::Text("1".to_string())));
}

#[test]
fn test_string_valued_setting_rejects_boolean() {
    let err = declare(STRING_VALUED_PATH)
        .with_value(json!(true))
        .validate()
        .unwrap_err();
    assert_snapshot!(err.to_string(), @"Value should be a string, not 'true'");
}

#[parameterized(
    number = { json!(42), "42" },
    mapping = { json!({"foo": "bar"}), r#"{"foo":"bar"}"# },
)]
fn test_string_valued_setting_rejects_other_shapes(value: serde_json::Value, rendered: &str) {
    let err = declare(STRING_VALUED_PATH)
        .with_value(value)
        .validate()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Value should be a string, not '{rendered}'")
    );
}

#[test]
fn test_mapping_valued_setting_accepts_mapping() {
    let resource = declare(MAPPING_VALUED_PATH)
        .with_value(json!({"foo": "bar"}))
        .validate()
        .unwrap();

    let expected = std::collections::BTreeMap::from([("foo".to_string(), "bar".to_string())]);
    assert_eq!(resource.value(), Some(&SuppliedValue::Mapping(expected)));
}

#[test]
fn test_mapping_valued_setting_rejects_string() {
    let err = declare(MAPPING_VALUED_PATH)
        .with_value(json!("foo"))
        .validate()
        .unwrap_err();
    assert_snapshot!(err.to_string(), @"Value should be a hash, not 'foo'");
}

#[test]
fn test_mapping_valued_setting_rejects_non_string_entries() {
    let err = declare(MAPPING_VALUED_PATH)
        .with_value(json!({"rule": 1}))
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        GpoError::ValueTypeMismatch(PolicyValueKind::MappingValue, _)
    ));
}

#[test]
fn test_unknown_setting_validates_as_string_valued() {
    let err = declare("nosuchfile::nosuchpolicy::nosuchvalue")
        .with_value(json!({"foo": "bar"}))
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        GpoError::ValueTypeMismatch(PolicyValueKind::StringValue, _)
    ));
}

#[test]
fn test_value_is_optional() {
    let resource = declare(MAPPING_VALUED_PATH).validate().unwrap();
    assert_eq!(resource.value(), None);
}

#[test]
fn test_declaration_from_resource_block() {
    let declaration: Declaration = serde_json::from_value(json!({
        "title": "advancedfirewall::wf_firewallrules::firewallrules",
        "value": {"block-all": "yes"},
        "ensure": "present",
    }))
    .unwrap();

    let resource = declaration.validate().unwrap();
    assert_eq!(resource.scope(), Scope::Machine);
    assert_eq!(
        resource.value().unwrap().kind(),
        PolicyValueKind::MappingValue
    );
}

#[test]
fn test_declaration_serialization_skips_unset_fields() {
    let declaration = declare(STRING_VALUED_PATH);
    let serialized = serde_json::to_value(&declaration).unwrap();
    assert_eq!(serialized, json!({"title": STRING_VALUED_PATH}));
}

#[test]
fn test_path_error_takes_precedence_over_value_error() {
    // Fail-fast ordering: the path is rejected before the value shape
    // is ever consulted.
    let err = declare("foo").with_value(json!(true)).validate().unwrap_err();
    assert!(matches!(err, GpoError::NotAValidPath(_)));
}
