//! Built-in equivalence predicates.
//!
//! Each constructor returns an [`Equivalence`] ready to register through
//! the configuration builder. All built-ins treat wrong-typed or
//! unparseable inputs as *not equivalent*: a single malformed value
//! degrades to a reported difference instead of aborting the comparison.
//!
//! # Examples
//!
//! ```
//! use rulediff_rs::{compare, equivalence, parse_json, DiffConfig};
//!
//! let left = parse_json(r#"{"price": 10.00}"#).unwrap();
//! let right = parse_json(r#"{"price": 10.005}"#).unwrap();
//!
//! let config = DiffConfig::builder()
//!     .equivalent_at("/price", equivalence::numeric_within(0.01))
//!     .unwrap()
//!     .build();
//!
//! assert!(compare(&left, &right, &config).is_empty());
//! ```

use crate::tree::Node;
use chrono::{DateTime, Duration, DurationRound, FixedOffset, Utc};

/// Numbers equal within an absolute tolerance; the boundary is inclusive.
pub fn numeric_within(epsilon: f64) -> impl Fn(&Node, &Node) -> bool + Send + Sync {
    move |l, r| match (l, r) {
        (Node::Number(a), Node::Number(b)) => (a - b).abs() <= epsilon,
        _ => false,
    }
}

/// Strings equal after Unicode lowercasing.
pub fn case_insensitive() -> impl Fn(&Node, &Node) -> bool + Send + Sync {
    |l, r| match (l, r) {
        (Node::String(a), Node::String(b)) => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}

/// Strings equal after reducing to alphanumeric words separated by single
/// spaces. `"Hello, world!"` matches `"Hello world"`.
pub fn ignoring_punctuation() -> impl Fn(&Node, &Node) -> bool + Send + Sync {
    |l, r| match (l, r) {
        (Node::String(a), Node::String(b)) => normalize_punctuation(a) == normalize_punctuation(b),
        _ => false,
    }
}

fn normalize_punctuation(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = false;
    for c in s.chars() {
        if c.is_alphanumeric() {
            out.push(c);
            last_was_space = false;
        } else if !last_was_space && !out.is_empty() {
            out.push(' ');
            last_was_space = true;
        }
    }
    out.trim_end().to_string()
}

/// RFC 3339 timestamp strings whose instants differ by at most `tolerance`.
pub fn datetime_within(tolerance: Duration) -> impl Fn(&Node, &Node) -> bool + Send + Sync {
    move |l, r| match (parse_datetime(l), parse_datetime(r)) {
        (Some(a), Some(b)) => (a - b).abs() <= tolerance,
        _ => false,
    }
}

/// RFC 3339 timestamp strings equal after truncating their instants to
/// the given granularity (e.g. `Duration::seconds(1)` drops sub-second
/// precision).
pub fn datetime_truncated_to(granularity: Duration) -> impl Fn(&Node, &Node) -> bool + Send + Sync {
    move |l, r| match (truncated(l, granularity), truncated(r, granularity)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn parse_datetime(node: &Node) -> Option<DateTime<FixedOffset>> {
    match node {
        Node::String(s) => DateTime::parse_from_rfc3339(s).ok(),
        _ => None,
    }
}

fn truncated(node: &Node, granularity: Duration) -> Option<DateTime<Utc>> {
    parse_datetime(node)?
        .with_timezone(&Utc)
        .duration_trunc(granularity)
        .ok()
}
