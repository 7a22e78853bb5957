//! RULEDIFF - Rule-driven semantic diff for JSON trees.
//!
//! This library compares two tree-shaped values and produces an ordered
//! list of differences anchored to JSON Pointer paths. Callers declare
//! which paths are noise (ignores), which values count as equal despite
//! literal inequality (equivalences), and how array elements pair across
//! the two trees (by position, or by a declared identity).
//!
//! # Example
//!
//! ```
//! use rulediff_rs::{compare, equivalence, parse_json, DiffConfig, ListRule};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let left = parse_json(r#"{"name": "Alice", "items": [{"id": "1", "v": 1}]}"#)?;
//! let right = parse_json(r#"{"name": "ALICE", "items": [{"id": "1", "v": 2}]}"#)?;
//!
//! let config = DiffConfig::builder()
//!     .list("/items", ListRule::id("id")?)?
//!     .equivalent_at("/name", equivalence::case_insensitive())?
//!     .build();
//!
//! let diffs = compare(&left, &right, &config);
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs[0].path, "/items/{1}/v");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod diff;
pub mod equivalence;
pub mod error;
pub mod glob;
mod indexer;
pub mod output;
pub mod parser;
pub mod path;
pub mod rules;
pub mod tree;

// Re-export commonly used types for convenience
pub use config::{DiffConfig, DiffConfigBuilder};
pub use diff::{compare, DiffEntry, DiffKind};
pub use error::{ConfigError, RenderError};
pub use glob::PathPattern;
pub use output::{render_entries, OutputFormat, OutputOptions};
pub use parser::{from_value, parse_json, to_value};
pub use rules::{Equivalence, ListRule};
pub use tree::Node;
