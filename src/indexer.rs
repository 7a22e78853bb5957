//! Identity indexes for array elements.
//!
//! Given an array and an identity rule, builds a map from extracted
//! identity text to element so the engine can pair elements across the
//! two trees by key instead of by position.

use crate::rules::ListRule;
use crate::tree::Node;
use std::collections::HashMap;

/// Sentinel key for elements whose identity value is missing or null.
pub(crate) const NULL_KEY: &str = "<null>";

/// Builds the identity index for one side of an array comparison.
///
/// Only object elements are indexed; scalars and nested arrays cannot
/// carry an identity and are invisible to identity-based pairing. On
/// duplicate keys the last occurrence wins. Keys are stored unescaped;
/// pointer escaping is applied later, when the child path is built.
pub(crate) fn build_index<'a>(elements: &'a [Node], rule: &ListRule) -> HashMap<String, &'a Node> {
    let mut index = HashMap::new();
    for element in elements {
        if element.is_object() {
            index.insert(extract_key(element, rule), element);
        }
    }
    index
}

fn extract_key(element: &Node, rule: &ListRule) -> String {
    extract_id(element, rule).unwrap_or_else(|| NULL_KEY.to_string())
}

fn extract_id(element: &Node, rule: &ListRule) -> Option<String> {
    let id_node = if rule.is_pointer() {
        element.pointer(rule.identifier_path())?
    } else {
        match element {
            Node::Object(map) => map.get(rule.identifier_path())?,
            _ => return None,
        }
    };
    id_node.id_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::from_value;
    use serde_json::json;

    fn elements(value: serde_json::Value) -> Vec<Node> {
        match from_value(value) {
            Node::Array(arr) => arr,
            _ => panic!("Expected array fixture"),
        }
    }

    #[test]
    fn test_indexes_by_simple_field() {
        let arr = elements(json!([
            {"id": "1", "name": "Alice"},
            {"id": "2", "name": "Bob"}
        ]));
        let rule = ListRule::id("id").unwrap();

        let index = build_index(&arr, &rule);

        assert_eq!(index.len(), 2);
        assert!(index.contains_key("1"));
        assert!(index.contains_key("2"));
    }

    #[test]
    fn test_indexes_by_pointer() {
        let arr = elements(json!([
            {"metadata": {"id": "uuid-1"}, "value": "data1"},
            {"metadata": {"id": "uuid-2"}, "value": "data2"}
        ]));
        let rule = ListRule::id("/metadata/id").unwrap();

        let index = build_index(&arr, &rule);

        assert_eq!(index.len(), 2);
        assert!(index.contains_key("uuid-1"));
        assert!(index.contains_key("uuid-2"));
    }

    #[test]
    fn test_null_id_uses_sentinel() {
        let arr = elements(json!([
            {"id": null, "name": "NoId"},
            {"id": "1", "name": "WithId"}
        ]));
        let rule = ListRule::id("id").unwrap();

        let index = build_index(&arr, &rule);

        assert_eq!(index.len(), 2);
        assert!(index.contains_key(NULL_KEY));
        assert!(index.contains_key("1"));
    }

    #[test]
    fn test_missing_id_uses_sentinel() {
        let arr = elements(json!([
            {"name": "NoIdField"},
            {"id": "1", "name": "WithId"}
        ]));
        let rule = ListRule::id("id").unwrap();

        let index = build_index(&arr, &rule);

        assert_eq!(index.len(), 2);
        assert!(index.contains_key(NULL_KEY));
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let arr = elements(json!([
            {"id": "dup", "value": "first"},
            {"id": "dup", "value": "second"},
            {"id": "dup", "value": "third"}
        ]));
        let rule = ListRule::id("id").unwrap();

        let index = build_index(&arr, &rule);

        assert_eq!(index.len(), 1);
        match index.get("dup").unwrap() {
            Node::Object(map) => {
                assert_eq!(map.get("value").unwrap(), &Node::String("third".to_string()));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_skips_non_object_elements() {
        let arr = elements(json!([
            {"id": "1", "name": "Object"},
            "string value",
            123,
            {"id": "2", "name": "AnotherObject"}
        ]));
        let rule = ListRule::id("id").unwrap();

        let index = build_index(&arr, &rule);

        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_empty_array() {
        let arr = elements(json!([]));
        let rule = ListRule::id("id").unwrap();
        assert!(build_index(&arr, &rule).is_empty());
    }

    #[test]
    fn test_converts_non_text_ids_to_text() {
        let arr = elements(json!([
            {"id": 123, "name": "NumericId"},
            {"id": true, "name": "BooleanId"}
        ]));
        let rule = ListRule::id("id").unwrap();

        let index = build_index(&arr, &rule);

        assert!(index.contains_key("123"));
        assert!(index.contains_key("true"));
    }

    #[test]
    fn test_nested_pointer_paths() {
        let arr = elements(json!([
            {"data": {"meta": {"uuid": "deep-1"}}},
            {"data": {"meta": {"uuid": "deep-2"}}}
        ]));
        let rule = ListRule::id("/data/meta/uuid").unwrap();

        let index = build_index(&arr, &rule);

        assert!(index.contains_key("deep-1"));
        assert!(index.contains_key("deep-2"));
    }

    #[test]
    fn test_missing_pointer_path_uses_sentinel() {
        let arr = elements(json!([
            {"name": "NoMeta"},
            {"meta": {"id": "has-meta"}}
        ]));
        let rule = ListRule::id("/meta/id").unwrap();

        let index = build_index(&arr, &rule);

        assert_eq!(index.len(), 2);
        assert!(index.contains_key(NULL_KEY));
        assert!(index.contains_key("has-meta"));
    }
}
