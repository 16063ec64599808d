//! Metadata key resolution: which metadata rows a dataset shows, in what order.

use std::collections::HashSet;

use crate::document::{Metadata, MetadataDefinitions};

/// Ordered metadata keys to render for one dataset.
///
/// The candidate set is every key of `metadata.constant` plus every key of
/// any `metadata.variable` element. Candidates are ordered by their
/// definition's `order` (definitions without one sort last, ties keep the
/// definition document's order). Keys without a definition cannot be
/// labelled and are left out.
pub fn resolve_keys<'d>(metadata: &Metadata, definitions: &'d MetadataDefinitions) -> Vec<&'d str> {
    let present: HashSet<&str> = metadata
        .constant
        .keys()
        .chain(metadata.variable.iter().flat_map(|column| column.keys()))
        .map(String::as_str)
        .collect();

    for key in &present {
        if definitions.get(key).is_none() {
            log::warn!("metadata key '{key}' has no definition and is not shown");
        }
    }

    let mut keys: Vec<(&'d str, f64)> = definitions
        .iter()
        .filter(|(key, _)| present.contains(key.as_str()))
        .map(|(key, def)| (key.as_str(), def.sort_order()))
        .collect();
    keys.sort_by(|a, b| a.1.total_cmp(&b.1));
    keys.into_iter().map(|(key, _)| key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definitions(value: serde_json::Value) -> MetadataDefinitions {
        MetadataDefinitions::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_order_sorts_last() {
        let defs = definitions(json!({
            "C": {"name": {"ja": "c", "en": "c"}},
            "A": {"name": {"ja": "a", "en": "a"}, "order": 2},
            "B": {"name": {"ja": "b", "en": "b"}, "order": 1}
        }));
        let metadata = Metadata::from_value(json!({
            "constant": {"A": {"value": 1}, "C": {"value": 3}}
        }))
        .unwrap();

        assert_eq!(resolve_keys(&metadata, &defs), ["A", "C"]);
    }

    #[test]
    fn test_variable_keys_are_deduplicated() {
        let defs = definitions(json!({
            "scan": {"order": 2, "variable": 1},
            "temp": {"order": 1}
        }));
        let metadata = Metadata::from_value(json!({
            "constant": {"temp": {"value": 300}},
            "variable": [
                {"scan": {"value": 1}},
                {"scan": {"value": 2}},
                {"scan": {"value": 3}}
            ]
        }))
        .unwrap();

        assert_eq!(resolve_keys(&metadata, &defs), ["temp", "scan"]);
    }

    #[test]
    fn test_undefined_keys_are_dropped() {
        let defs = definitions(json!({"known": {"order": 1}}));
        let metadata = Metadata::from_value(json!({
            "constant": {"known": {"value": 1}, "unknown": {"value": 2}}
        }))
        .unwrap();

        assert_eq!(resolve_keys(&metadata, &defs), ["known"]);
    }

    #[test]
    fn test_ties_keep_definition_order() {
        let defs = definitions(json!({
            "z": {"order": 5},
            "y": {},
            "x": {"order": 5},
            "w": {}
        }));
        let metadata = Metadata::from_value(json!({
            "constant": {"w": {}, "x": {}, "y": {}, "z": {}}
        }))
        .unwrap();

        assert_eq!(resolve_keys(&metadata, &defs), ["z", "x", "y", "w"]);
    }

    #[test]
    fn test_empty_metadata_resolves_nothing() {
        let defs = definitions(json!({"a": {"order": 1}}));
        assert!(resolve_keys(&Metadata::default(), &defs).is_empty());
    }
}
