use rulediff_rs::{parse_json, Node};
use std::collections::HashMap;

#[test]
fn test_type_names() {
    assert_eq!(Node::Null.type_name(), "null");
    assert_eq!(Node::Bool(true).type_name(), "boolean");
    assert_eq!(Node::Number(1.0).type_name(), "number");
    assert_eq!(Node::String("x".to_string()).type_name(), "string");
    assert_eq!(Node::Object(HashMap::new()).type_name(), "object");
    assert_eq!(Node::Array(Vec::new()).type_name(), "array");
}

#[test]
fn test_is_leaf() {
    assert!(Node::Null.is_leaf());
    assert!(Node::Bool(false).is_leaf());
    assert!(Node::Number(0.0).is_leaf());
    assert!(Node::String(String::new()).is_leaf());
    assert!(!Node::Object(HashMap::new()).is_leaf());
    assert!(!Node::Array(Vec::new()).is_leaf());
}

#[test]
fn test_pointer_traverses_objects_and_arrays() {
    let node = parse_json(r#"{"user": {"tags": ["a", "b"], "name": "Bob"}}"#).unwrap();

    assert_eq!(
        node.pointer("/user/name"),
        Some(&Node::String("Bob".to_string()))
    );
    assert_eq!(
        node.pointer("/user/tags/1"),
        Some(&Node::String("b".to_string()))
    );
    assert!(node.pointer("/user/missing").is_none());
    assert!(node.pointer("/user/tags/9").is_none());
}

#[test]
fn test_pointer_empty_returns_self() {
    let node = parse_json(r#"{"a": 1}"#).unwrap();
    assert_eq!(node.pointer(""), Some(&node));
}

#[test]
fn test_pointer_unescapes_segments() {
    let node = parse_json(r#"{"field/name": "v1", "field~name": "v2"}"#).unwrap();

    assert_eq!(
        node.pointer("/field~1name"),
        Some(&Node::String("v1".to_string()))
    );
    assert_eq!(
        node.pointer("/field~0name"),
        Some(&Node::String("v2".to_string()))
    );
}

#[test]
fn test_id_text_forms() {
    assert_eq!(
        Node::String("abc".to_string()).id_text(),
        Some("abc".to_string())
    );
    assert_eq!(Node::Number(123.0).id_text(), Some("123".to_string()));
    assert_eq!(Node::Number(1.5).id_text(), Some("1.5".to_string()));
    assert_eq!(Node::Bool(true).id_text(), Some("true".to_string()));
    assert_eq!(Node::Null.id_text(), None);
    assert_eq!(Node::Array(Vec::new()).id_text(), None);
    assert_eq!(Node::Object(HashMap::new()).id_text(), None);
}

#[test]
fn test_preview_scalars() {
    assert_eq!(Node::Null.preview(80), "null");
    assert_eq!(Node::Bool(true).preview(80), "true");
    assert_eq!(Node::Number(42.0).preview(80), "42");
    assert_eq!(Node::Number(3.15).preview(80), "3.15");
    assert_eq!(Node::String("hi".to_string()).preview(80), "\"hi\"");
}

#[test]
fn test_preview_containers_summarize() {
    let obj = parse_json(r#"{"a": 1, "b": 2}"#).unwrap();
    assert_eq!(obj.preview(80), "{ 2 keys }");

    let arr = parse_json("[1]").unwrap();
    assert_eq!(arr.preview(80), "[ 1 item ]");

    assert_eq!(parse_json("{}").unwrap().preview(80), "{}");
    assert_eq!(parse_json("[]").unwrap().preview(80), "[]");
}

#[test]
fn test_preview_truncates() {
    let long = Node::String("a".repeat(100));
    let preview = long.preview(10);
    assert!(preview.ends_with("..."));
    assert!(preview.len() <= 10);
}

#[test]
fn test_serializes_as_natural_json() {
    let node = parse_json(r#"{"a": [1, null, true, "x"]}"#).unwrap();
    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json, serde_json::json!({"a": [1.0, null, true, "x"]}));
}
