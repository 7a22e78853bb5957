//! Tree representation of structured values.
//!
//! The engine treats a [`Node`] as read-only input: it is produced by an
//! external adapter (see [`crate::parser`]), never mutated, and never
//! retained beyond a single comparison call.

use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// A node in a JSON-shaped value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(HashMap<String, Node>),
    Array(Vec<Node>),
}

impl Node {
    pub fn type_name(&self) -> &str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Object(_) => "object",
            Node::Array(_) => "array",
        }
    }

    /// True for null and scalar values; containers are not leaves.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Node::Object(_) | Node::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Looks up a descendant by RFC 6901 JSON Pointer.
    ///
    /// Segments are unescaped (`~1` → `/`, `~0` → `~`) before lookup.
    /// Object segments select fields, array segments select numeric
    /// indices. Returns `None` when any step is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulediff_rs::parse_json;
    ///
    /// let node = parse_json(r#"{"meta": {"id": "uuid-1"}}"#).unwrap();
    /// assert!(node.pointer("/meta/id").is_some());
    /// assert!(node.pointer("/meta/missing").is_none());
    /// ```
    pub fn pointer(&self, pointer: &str) -> Option<&Node> {
        if pointer.is_empty() {
            return Some(self);
        }
        if !pointer.starts_with('/') {
            return None;
        }

        let mut current = self;
        for segment in pointer.split('/').skip(1) {
            let key = segment.replace("~1", "/").replace("~0", "~");
            current = match current {
                Node::Object(map) => map.get(&key)?,
                Node::Array(arr) => arr.get(key.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Returns the textual identity form of this node, used to key array
    /// elements during identity-based pairing.
    ///
    /// Strings are taken verbatim, numbers with an integral value print
    /// without a fractional part, booleans print as `true`/`false`. Null
    /// and container values have no identity text.
    pub fn id_text(&self) -> Option<String> {
        match self {
            Node::String(s) => Some(s.clone()),
            Node::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            Node::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Returns a short preview of the node's value, truncated to max_len.
    pub fn preview(&self, max_len: usize) -> String {
        let preview = match self {
            Node::Null => "null".to_string(),
            Node::Bool(b) => b.to_string(),
            Node::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Node::String(s) => format!("\"{}\"", s),
            Node::Object(map) => {
                let count = map.len();
                if count == 0 {
                    "{}".to_string()
                } else if count == 1 {
                    format!("{{ {} key }}", count)
                } else {
                    format!("{{ {} keys }}", count)
                }
            }
            Node::Array(arr) => {
                let count = arr.len();
                if count == 0 {
                    "[]".to_string()
                } else if count == 1 {
                    format!("[ {} item ]", count)
                } else {
                    format!("[ {} items ]", count)
                }
            }
        };

        if preview.len() > max_len {
            format!("{}...", &preview[..max_len.saturating_sub(3)])
        } else {
            preview
        }
    }
}

/// Serializes as the natural JSON value, not as a tagged enum.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => serializer.serialize_f64(*n),
            Node::String(s) => serializer.serialize_str(s),
            Node::Array(arr) => arr.serialize(serializer),
            Node::Object(map) => map.serialize(serializer),
        }
    }
}
