//! Conversion between `serde_json` values and the tree representation.
//!
//! This is the crate's only tree factory. Producing trees from arbitrary
//! host objects is a collaborator concern; anything serde can serialize
//! reaches the engine through `serde_json::Value` and this adapter.
//!
//! # Examples
//!
//! ```
//! use rulediff_rs::parse_json;
//!
//! let node = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert!(node.is_object());
//! ```

use crate::tree::Node;
use std::collections::HashMap;

/// Parses a JSON string into a Node.
pub fn parse_json(content: &str) -> Result<Node, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(from_value(value))
}

/// Converts a `serde_json::Value` into our Node representation.
pub fn from_value(value: serde_json::Value) -> Node {
    match value {
        serde_json::Value::Null => Node::Null,
        serde_json::Value::Bool(b) => Node::Bool(b),
        serde_json::Value::Number(n) => Node::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => Node::String(s),
        serde_json::Value::Array(arr) => Node::Array(arr.into_iter().map(from_value).collect()),
        serde_json::Value::Object(obj) => {
            let map: HashMap<String, Node> =
                obj.into_iter().map(|(k, v)| (k, from_value(v))).collect();
            Node::Object(map)
        }
    }
}

/// Converts a Node back into a `serde_json::Value`.
pub fn to_value(node: &Node) -> serde_json::Value {
    match node {
        Node::Null => serde_json::Value::Null,
        Node::Bool(b) => serde_json::Value::Bool(*b),
        Node::Number(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Node::String(s) => serde_json::Value::String(s.clone()),
        Node::Array(arr) => serde_json::Value::Array(arr.iter().map(to_value).collect()),
        Node::Object(map) => {
            let obj: serde_json::Map<String, serde_json::Value> =
                map.iter().map(|(k, v)| (k.clone(), to_value(v))).collect();
            serde_json::Value::Object(obj)
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_primitives() {
        assert_eq!(parse_json("null").unwrap(), Node::Null);
        assert_eq!(parse_json("true").unwrap(), Node::Bool(true));
        assert_eq!(parse_json("false").unwrap(), Node::Bool(false));
        assert_eq!(parse_json("42").unwrap(), Node::Number(42.0));
        assert_eq!(parse_json("3.15").unwrap(), Node::Number(3.15));
        assert_eq!(
            parse_json(r#""hello""#).unwrap(),
            Node::String("hello".to_string())
        );
    }

    #[test]
    fn test_parse_json_array() {
        let node = parse_json("[1, 2, 3]").unwrap();
        match node {
            Node::Array(arr) => {
                assert_eq!(arr.len(), 3);
                assert_eq!(arr[0], Node::Number(1.0));
                assert_eq!(arr[2], Node::Number(3.0));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_parse_json_object() {
        let node = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
        match node {
            Node::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name").unwrap(), &Node::String("Alice".to_string()));
                assert_eq!(map.get("age").unwrap(), &Node::Number(30.0));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_parse_json_invalid() {
        assert!(parse_json("{invalid json}").is_err());
        assert!(parse_json("[1, 2,]").is_err());
    }

    #[test]
    fn test_from_value_via_into() {
        let node: Node = serde_json::json!({"a": [1, null, "x"]}).into();
        match node {
            Node::Object(map) => match map.get("a").unwrap() {
                Node::Array(arr) => {
                    assert_eq!(arr[1], Node::Null);
                    assert_eq!(arr[2], Node::String("x".to_string()));
                }
                _ => panic!("Expected array"),
            },
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_to_value_round_trip() {
        let source = serde_json::json!({"user": {"name": "Bob", "scores": [10, 20]}});
        let node = from_value(source.clone());
        assert_eq!(to_value(&node), source);
    }
}
