//! Core diff engine.
//!
//! This module implements the recursive walk that compares two trees in
//! lock-step and produces an ordered list of [`DiffEntry`] records. At
//! every path the engine consults the configuration: ignored paths skip
//! their whole subtree, a resolved equivalence predicate can declare two
//! values equal despite literal inequality, and list rules switch arrays
//! from positional to identity-based pairing.
//!
//! Output order is fully deterministic: object fields and identity keys
//! are traversed in sorted order, positional elements in numeric order.
//!
//! # Examples
//!
//! ```
//! use rulediff_rs::{compare, parse_json, DiffConfig, DiffKind};
//!
//! let left = parse_json(r#"{"age": 30}"#).unwrap();
//! let right = parse_json(r#"{"age": 31}"#).unwrap();
//!
//! let diffs = compare(&left, &right, &DiffConfig::default());
//!
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs[0].path, "/age");
//! assert_eq!(diffs[0].kind, DiffKind::Changed);
//! ```

use crate::config::DiffConfig;
use crate::indexer;
use crate::path;
use crate::rules::ListRule;
use crate::tree::Node;
use serde::Serialize;
use std::collections::BTreeSet;

/// The kind of difference recorded at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Array element present on the right only
    Added,
    /// Array element present on the left only
    Removed,
    /// Value present on both sides with different content. Object fields
    /// present on one side only also surface as `Changed`, with the
    /// absent side `None`.
    Changed,
}

/// A single difference, anchored to a pointer path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub path: String,
    pub kind: DiffKind,
    pub old_value: Option<Node>,
    pub new_value: Option<Node>,
}

impl DiffEntry {
    fn changed(path: String, old: Option<&Node>, new: Option<&Node>) -> Self {
        Self {
            path,
            kind: DiffKind::Changed,
            old_value: old.cloned(),
            new_value: new.cloned(),
        }
    }

    fn added(path: String, new: &Node) -> Self {
        Self {
            path,
            kind: DiffKind::Added,
            old_value: None,
            new_value: Some(new.clone()),
        }
    }

    fn removed(path: String, old: &Node) -> Self {
        Self {
            path,
            kind: DiffKind::Removed,
            old_value: Some(old.clone()),
            new_value: None,
        }
    }
}

/// Compares two trees and returns the ordered list of differences.
///
/// This is the main entry point. Each call owns a private accumulator and
/// call stack; the configuration is only read, so one `DiffConfig` may
/// serve any number of concurrent calls.
pub fn compare(left: &Node, right: &Node, config: &DiffConfig) -> Vec<DiffEntry> {
    let mut diffs = Vec::new();
    walk(config.root_path(), Some(left), Some(right), config, &mut diffs);
    diffs
}

/// Recursively compares two optional nodes at a path.
///
/// `None` stands for a value absent on that side (a missing object field
/// or an unmatched array slot).
fn walk(
    path: &str,
    left: Option<&Node>,
    right: Option<&Node>,
    config: &DiffConfig,
    diffs: &mut Vec<DiffEntry>,
) {
    if should_skip(path, left, right, config) {
        return;
    }

    if is_leaf(left) || is_leaf(right) {
        diffs.push(DiffEntry::changed(path.to_string(), left, right));
        return;
    }

    // Both present and both containers past this point.
    match (left.unwrap(), right.unwrap()) {
        (Node::Object(left_map), Node::Object(right_map)) => {
            diff_object(path, left_map, right_map, config, diffs);
        }
        (Node::Array(left_arr), Node::Array(right_arr)) => {
            diff_array(path, left_arr, right_arr, config, diffs);
        }
        _ => {
            // Container kind mismatch: one object, one array.
            diffs.push(DiffEntry::changed(path.to_string(), left, right));
        }
    }
}

fn should_skip(
    path: &str,
    left: Option<&Node>,
    right: Option<&Node>,
    config: &DiffConfig,
) -> bool {
    if config.is_ignored(path) {
        return true;
    }
    let (l, r) = match (left, right) {
        (Some(l), Some(r)) => (l, r),
        _ => return false,
    };
    are_identical(l, r) || are_equal_leaves(l, r) || matches_custom_equivalence(path, l, r, config)
}

/// Same allocation on both sides; a shortcut, not a correctness requirement.
fn are_identical(left: &Node, right: &Node) -> bool {
    std::ptr::eq(left, right)
}

fn are_equal_leaves(left: &Node, right: &Node) -> bool {
    left.is_leaf() && right.is_leaf() && left == right
}

fn matches_custom_equivalence(path: &str, left: &Node, right: &Node, config: &DiffConfig) -> bool {
    config
        .equivalence_at(path)
        .is_some_and(|eq| eq(left, right))
}

fn is_leaf(node: Option<&Node>) -> bool {
    node.is_none_or(Node::is_leaf)
}

fn diff_object(
    path: &str,
    left_map: &std::collections::HashMap<String, Node>,
    right_map: &std::collections::HashMap<String, Node>,
    config: &DiffConfig,
    diffs: &mut Vec<DiffEntry>,
) {
    // Sorted union of field names: this is what makes the output order
    // independent of insertion order.
    let names: BTreeSet<&str> = left_map
        .keys()
        .chain(right_map.keys())
        .map(String::as_str)
        .collect();

    for name in names {
        let child_path = path::child(path, name);
        walk(
            &child_path,
            left_map.get(name),
            right_map.get(name),
            config,
            diffs,
        );
    }
}

fn diff_array(
    path: &str,
    left_arr: &[Node],
    right_arr: &[Node],
    config: &DiffConfig,
    diffs: &mut Vec<DiffEntry>,
) {
    match config.list_rule(path) {
        Some(rule) if !rule.is_none() => {
            pair_by_id(path, left_arr, right_arr, rule, config, diffs);
        }
        _ => pair_by_index(path, left_arr, right_arr, config, diffs),
    }
}

fn pair_by_index(
    path: &str,
    left_arr: &[Node],
    right_arr: &[Node],
    config: &DiffConfig,
    diffs: &mut Vec<DiffEntry>,
) {
    let max_len = left_arr.len().max(right_arr.len());
    for i in 0..max_len {
        let child_path = path::child_index(path, i);
        pair_nodes(&child_path, left_arr.get(i), right_arr.get(i), config, diffs);
    }
}

fn pair_by_id(
    path: &str,
    left_arr: &[Node],
    right_arr: &[Node],
    rule: &ListRule,
    config: &DiffConfig,
    diffs: &mut Vec<DiffEntry>,
) {
    let left_index = indexer::build_index(left_arr, rule);
    let right_index = indexer::build_index(right_arr, rule);

    let keys: BTreeSet<&str> = left_index
        .keys()
        .chain(right_index.keys())
        .map(String::as_str)
        .collect();

    for key in keys {
        // The braced key marks identity-addressed elements; escaping the
        // whole segment keeps `~` and `/` inside keys pointer-safe.
        let child_path = path::child(path, &format!("{{{}}}", key));
        pair_nodes(
            &child_path,
            left_index.get(key).copied(),
            right_index.get(key).copied(),
            config,
            diffs,
        );
    }
}

/// Shared pairing routine for both array strategies.
fn pair_nodes(
    path: &str,
    left: Option<&Node>,
    right: Option<&Node>,
    config: &DiffConfig,
    diffs: &mut Vec<DiffEntry>,
) {
    match (left, right) {
        (None, Some(new)) => diffs.push(DiffEntry::added(path.to_string(), new)),
        (Some(old), None) => diffs.push(DiffEntry::removed(path.to_string(), old)),
        _ => walk(path, left, right, config, diffs),
    }
}
