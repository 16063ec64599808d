use super::*;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

const TODAY: &str = "2024-05-01";

#[test]
fn test_merge_empty_onto_default_is_default() {
    let default = invoice_skeleton(TODAY);
    assert_eq!(merge_onto(&default, &json!({})), default);
}

#[test]
fn test_merge_default_onto_itself_is_default() {
    let default = invoice_skeleton(TODAY);
    assert_eq!(merge_onto(&default, &default), default);
}

#[test]
fn test_merge_fills_missing_nested_fields() {
    let loaded = json!({
        "basic": {"dataName": "XRD run 12", "experimentId": "EXP-7"}
    });
    let merged = merge_onto(&invoice_skeleton(TODAY), &loaded);

    assert_eq!(merged["basic"]["description"], json!(""));
    assert_eq!(merged["basic"]["dateSubmitted"], json!(TODAY));
    assert_eq!(merged["basic"]["dataName"], json!("XRD run 12"));
    assert_eq!(merged["basic"]["experimentId"], json!("EXP-7"));
    assert_eq!(merged["sample"]["names"], json!([]));
}

#[test]
fn test_merge_replaces_arrays_wholesale() {
    let defaults = json!({"sample": {"names": ["default-a", "default-b"]}});
    let loaded = json!({"sample": {"names": ["X"]}});
    let merged = merge_onto(&defaults, &loaded);

    assert_eq!(merged["sample"]["names"], json!(["X"]));
}

#[test]
fn test_merge_keeps_loaded_only_keys_after_default_keys() {
    let merged = merge_onto(&json!({"a": 1, "b": 2}), &json!({"c": 3, "a": 10}));
    let keys: Vec<&String> = merged.as_object().unwrap().keys().collect();

    assert_eq!(keys, ["a", "b", "c"]);
    assert_eq!(merged["a"], json!(10));
}

#[test]
fn test_merge_scalar_replaces_object() {
    let merged = merge_onto(&json!({"custom": {"x": 1}}), &json!({"custom": null}));
    assert_eq!(merged["custom"], Value::Null);
}

#[test]
fn test_load_missing_file_is_empty_object() {
    let dir = tempdir().unwrap();
    let value = load_json(&dir.path().join("absent.json")).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn test_load_malformed_json_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"basic\": ").unwrap();

    let err = load_json(&path).unwrap_err();
    assert!(matches!(err, DocumentError::ParseError { .. }));
}

#[test]
fn test_missing_invoice_loads_defaults() {
    let dir = tempdir().unwrap();
    let invoice = Invoice::load(&dir.path().join("invoice.json"), TODAY).unwrap();

    assert_eq!(invoice.date_submitted(), TODAY);
    assert_eq!(invoice.basic.data_owner_id, "プレビューユーザ");
    assert_eq!(invoice.data_name(), None);
    assert_eq!(invoice.sample_display_id(), "");
    assert!(invoice.custom.is_empty());
}

#[test]
fn test_invoice_sample_display_id_prefers_first_name() {
    let value = merge_onto(
        &invoice_skeleton(TODAY),
        &json!({"sample": {"sampleId": "S-001", "names": ["alloy-A", "alloy-B"]}}),
    );
    let invoice = Invoice::from_value(value).unwrap();
    assert_eq!(invoice.sample_display_id(), "alloy-A");

    let value = merge_onto(&invoice_skeleton(TODAY), &json!({"sample": {"sampleId": "S-001"}}));
    let invoice = Invoice::from_value(value).unwrap();
    assert_eq!(invoice.sample_display_id(), "S-001");
}

#[test]
fn test_invoice_null_fields_are_tolerated() {
    let value = merge_onto(
        &invoice_skeleton(TODAY),
        &json!({"basic": {"experimentId": null, "description": null}}),
    );
    let invoice = Invoice::from_value(value).unwrap();
    assert_eq!(invoice.basic.experiment_id, "");
    assert_eq!(invoice.basic.description, "");
}

#[test]
fn test_invoice_scalar_text_fields_become_text() {
    let value = merge_onto(
        &invoice_skeleton(TODAY),
        &json!({
            "basic": {"experimentId": 42, "dataName": true},
            "sample": {"sampleId": 7.5, "names": [101, "b"], "composition": false}
        }),
    );
    let invoice = Invoice::from_value(value).unwrap();
    assert_eq!(invoice.basic.experiment_id, "42");
    assert_eq!(invoice.data_name(), Some("true"));
    assert_eq!(invoice.sample.sample_id, "7.5");
    assert_eq!(invoice.sample.names, ["101", "b"]);
    assert_eq!(invoice.sample_display_id(), "101");
    assert_eq!(invoice.sample.composition, "false");
}

#[test]
fn test_invoice_attributes_parse() {
    let value = merge_onto(
        &invoice_skeleton(TODAY),
        &json!({
            "sample": {
                "generalAttributes": [
                    {"termId": "0aadfff2-37de-411f-883a-38b62b2abbce", "value": "Fe2O3"}
                ],
                "specificAttributes": [
                    {"classId": "01cb3c01-37a4-5a43-d8ca-f523ca99a75b",
                     "termId": "659da80e-c2ee-2986-41ce-68201b3bc4dd", "value": null}
                ]
            },
            "custom": {"temperature": 300, "operator": ""}
        }),
    );
    let invoice = Invoice::from_value(value).unwrap();

    assert_eq!(invoice.sample.general_attributes.len(), 1);
    assert_eq!(invoice.sample.general_attributes[0].value, json!("Fe2O3"));
    assert_eq!(invoice.sample.specific_attributes[0].value, Value::Null);
    let custom_keys: Vec<&String> = invoice.custom.keys().collect();
    assert_eq!(custom_keys, ["temperature", "operator"]);
}

#[test]
fn test_metadata_empty_document() {
    let metadata = Metadata::from_value(json!({})).unwrap();
    assert!(metadata.constant.is_empty());
    assert!(metadata.variable.is_empty());
    assert_eq!(metadata.column_count(), 1);
}

#[test]
fn test_metadata_column_count_follows_variable() {
    let metadata = Metadata::from_value(json!({
        "constant": {"sample_temp": {"value": 25, "unit": "degC"}},
        "variable": [
            {"scan_no": {"value": 1}},
            {"scan_no": {"value": 2}},
            {"scan_no": {"value": 3}}
        ]
    }))
    .unwrap();

    assert_eq!(metadata.column_count(), 3);
    assert_eq!(metadata.constant["sample_temp"].unit.as_deref(), Some("degC"));
    assert_eq!(metadata.variable[2]["scan_no"].value, json!(3));
}

#[test]
fn test_definitions_keep_document_order() {
    let defs = MetadataDefinitions::from_value(json!({
        "zeta": {"name": {"ja": "ゼータ", "en": "Zeta"}, "order": 1},
        "alpha": {"name": {"ja": "アルファ", "en": "Alpha"}, "variable": 1}
    }))
    .unwrap();

    let keys: Vec<&String> = defs.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["zeta", "alpha"]);
    assert!(!defs.get("zeta").unwrap().is_variable());
    assert!(defs.get("alpha").unwrap().is_variable());
    assert_eq!(defs.get("alpha").unwrap().sort_order(), f64::INFINITY);
}

#[test]
fn test_definition_constant_marker() {
    let defs = MetadataDefinitions::from_value(json!({"k": {"variable": 2}})).unwrap();
    assert!(!defs.get("k").unwrap().is_variable());
}

#[test]
fn test_invoice_schema_custom_field() {
    let schema = InvoiceSchema::from_value(json!({
        "type": "object",
        "properties": {
            "custom": {
                "type": "object",
                "properties": {
                    "temperature": {
                        "label": {"ja": "温度", "en": "Temperature"},
                        "options": {"unit": "K"},
                        "type": "number"
                    }
                }
            }
        }
    }))
    .unwrap();

    let field = schema.custom_field("temperature").unwrap();
    assert_eq!(field.label.ja.as_deref(), Some("温度"));
    assert_eq!(field.options.unit.as_deref(), Some("K"));
    assert!(schema.custom_field("pressure").is_none());
}

#[test]
fn test_empty_invoice_schema() {
    let schema = InvoiceSchema::from_value(json!({})).unwrap();
    assert!(schema.custom_field("anything").is_none());
}

#[test]
fn test_value_text_and_truthiness() {
    assert_eq!(value_text(&Value::Null), "");
    assert_eq!(value_text(&json!("abc")), "abc");
    assert_eq!(value_text(&json!(1.5)), "1.5");

    assert!(!is_truthy(&Value::Null));
    assert!(!is_truthy(&json!("")));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!([])));
    assert!(is_truthy(&json!("x")));
    assert!(is_truthy(&json!(0.5)));
    assert!(is_truthy(&json!({"a": 1})));
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn object_document() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-d]", document(), 0..4)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

proptest! {
    #[test]
    fn prop_merge_with_empty_is_identity(doc in object_document()) {
        prop_assert_eq!(merge_onto(&doc, &json!({})), doc.clone());
        prop_assert_eq!(merge_onto(&json!({}), &doc), doc);
    }

    #[test]
    fn prop_merge_is_idempotent(doc in document()) {
        prop_assert_eq!(merge_onto(&doc, &doc), doc);
    }
}
