//! Reading JSON documents from a package and filling in invoice defaults.

use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

use super::DocumentError;

/// Read a JSON document, treating a missing file as an empty object.
///
/// Optional documents (an invoice of a divided dataset, for example) are
/// routinely absent, so absence is not an error. Malformed JSON is.
pub fn load_json(path: &Path) -> Result<Value, DocumentError> {
    if !path.exists() {
        log::debug!("{} not found, using an empty document", path.display());
        return Ok(Value::Object(Map::new()));
    }

    let content = fs::read_to_string(path).map_err(|source| DocumentError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| DocumentError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an invoice document and merge it onto the default skeleton.
///
/// `today` becomes the default `basic.dateSubmitted` (`YYYY-MM-DD`).
pub fn load_invoice_json(path: &Path, today: &str) -> Result<Value, DocumentError> {
    let loaded = load_json(path)?;
    Ok(merge_onto(&invoice_skeleton(today), &loaded))
}

/// The invoice skeleton every loaded invoice is merged onto.
pub fn invoice_skeleton(today: &str) -> Value {
    json!({
        "datasetId": "",
        "basic": {
            "dateSubmitted": today,
            "dataOwnerId": "プレビューユーザ",
            "dataName": "",
            "instrumentId": "",
            "experimentId": "",
            "description": ""
        },
        "sample": {
            "sampleId": "",
            "names": [],
            "ownerId": "",
            "composition": "",
            "referenceUrl": "",
            "description": ""
        }
    })
}

/// Deep-merge `loaded` onto `defaults`.
///
/// Keys present on one side only are taken from that side. Keys present on
/// both sides recurse when both values are objects; otherwise the loaded
/// value replaces the default wholesale (arrays are never merged
/// element-wise). Default keys come first in the result, followed by keys
/// only the loaded document has.
pub fn merge_onto(defaults: &Value, loaded: &Value) -> Value {
    match (defaults, loaded) {
        (Value::Object(base), Value::Object(patch)) => {
            let mut merged = Map::with_capacity(base.len() + patch.len());
            for (key, default_value) in base {
                let value = match patch.get(key) {
                    Some(patch_value) => merge_onto(default_value, patch_value),
                    None => default_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            for (key, patch_value) in patch {
                if !merged.contains_key(key) {
                    merged.insert(key.clone(), patch_value.clone());
                }
            }
            Value::Object(merged)
        }
        (_, patch) => patch.clone(),
    }
}

/// Display text of a JSON value: `null` is empty, strings are unquoted.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether a value counts as "filled in" (non-empty, non-zero, non-false).
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
