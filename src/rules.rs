//! Rule types and the registries that resolve them against paths.
//!
//! Three independent rule categories exist: ignores (suppress a subtree),
//! equivalences (treat two values as equal despite literal inequality),
//! and list rules (how array elements pair up). All registries are
//! immutable once the configuration is built.

use crate::error::ConfigError;
use crate::glob::PathPattern;
use crate::path;
use crate::tree::Node;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A custom equality predicate for values at a path.
///
/// Predicates are shared (`Arc`) so a built configuration can be cloned
/// and used from any number of threads.
pub type Equivalence = Arc<dyn Fn(&Node, &Node) -> bool + Send + Sync>;

/// Defines how array elements are paired across the two trees.
///
/// The default is positional pairing ([`ListRule::none`]). An identity
/// rule ([`ListRule::id`]) pairs elements by an extracted identity value:
/// a bare field name, or a nested JSON Pointer when the path starts with
/// `/`.
///
/// # Examples
///
/// ```
/// use rulediff_rs::ListRule;
///
/// let by_field = ListRule::id("id").unwrap();
/// assert!(!by_field.is_pointer());
///
/// let by_pointer = ListRule::id("/metadata/id").unwrap();
/// assert!(by_pointer.is_pointer());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRule {
    identifier_path: String,
    pointer: bool,
}

impl ListRule {
    /// Positional pairing; no identity is extracted.
    pub fn none() -> Self {
        Self {
            identifier_path: String::new(),
            pointer: false,
        }
    }

    /// Identity-based pairing by the given field name or JSON Pointer.
    /// Paths starting with `/` are treated as pointers into each element.
    pub fn id(path: &str) -> Result<Self, ConfigError> {
        if path.is_empty() {
            return Err(ConfigError::EmptyIdentifier);
        }
        Ok(Self {
            identifier_path: path.to_string(),
            pointer: path.starts_with('/'),
        })
    }

    pub fn identifier_path(&self) -> &str {
        &self.identifier_path
    }

    pub fn is_none(&self) -> bool {
        self.identifier_path.is_empty()
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer
    }
}

/// Decides whether a path is suppressed from the diff.
///
/// A path is ignored when it matches the exact set, falls under any
/// registered prefix, or fully matches any compiled pattern.
#[derive(Clone, Default)]
pub(crate) struct PathIgnoreFilter {
    exact: HashSet<String>,
    prefixes: Vec<String>,
    patterns: Vec<PathPattern>,
}

impl PathIgnoreFilter {
    pub(crate) fn new(
        exact: HashSet<String>,
        prefixes: Vec<String>,
        patterns: Vec<PathPattern>,
    ) -> Self {
        Self {
            exact,
            prefixes,
            patterns,
        }
    }

    pub(crate) fn should_ignore(&self, pointer: &str) -> bool {
        self.is_exact_match(pointer)
            || self.matches_any_prefix(pointer)
            || self.matches_any_pattern(pointer)
    }

    fn is_exact_match(&self, pointer: &str) -> bool {
        self.exact.contains(pointer)
    }

    fn matches_any_prefix(&self, pointer: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| path::starts_with_prefix(pointer, prefix))
    }

    fn matches_any_pattern(&self, pointer: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(pointer))
    }
}

/// Resolves the equivalence predicate for a path, in strict precedence:
/// exact path > first matching pattern (declaration order) > longest
/// matching prefix > type label > fallback. The first tier that yields a
/// predicate wins; later tiers are never consulted.
#[derive(Clone, Default)]
pub(crate) struct EquivalenceRegistry {
    exact: HashMap<String, Equivalence>,
    patterns: Vec<(PathPattern, Equivalence)>,
    prefixes: Vec<(String, Equivalence)>,
    by_type: HashMap<String, Equivalence>,
    fallback: Option<Equivalence>,
}

impl EquivalenceRegistry {
    /// Prefixes are sorted by descending normalized length so the longest
    /// declared prefix wins deterministically under overlaps.
    pub(crate) fn new(
        exact: HashMap<String, Equivalence>,
        patterns: Vec<(PathPattern, Equivalence)>,
        mut prefixes: Vec<(String, Equivalence)>,
        by_type: HashMap<String, Equivalence>,
        fallback: Option<Equivalence>,
    ) -> Self {
        prefixes.sort_by_key(|(prefix, _)| std::cmp::Reverse(path::normalize_prefix(prefix).len()));
        Self {
            exact,
            patterns,
            prefixes,
            by_type,
            fallback,
        }
    }

    pub(crate) fn resolve(&self, pointer: &str, type_key: Option<&str>) -> Option<&Equivalence> {
        self.resolve_exact(pointer)
            .or_else(|| self.resolve_pattern(pointer))
            .or_else(|| self.resolve_prefix(pointer))
            .or_else(|| self.resolve_by_type(type_key))
            .or_else(|| self.fallback.as_ref())
    }

    fn resolve_exact(&self, pointer: &str) -> Option<&Equivalence> {
        self.exact.get(pointer)
    }

    fn resolve_pattern(&self, pointer: &str) -> Option<&Equivalence> {
        self.patterns
            .iter()
            .find(|(pattern, _)| pattern.matches(pointer))
            .map(|(_, eq)| eq)
    }

    fn resolve_prefix(&self, pointer: &str) -> Option<&Equivalence> {
        self.prefixes
            .iter()
            .find(|(prefix, _)| path::starts_with_prefix(pointer, prefix))
            .map(|(_, eq)| eq)
    }

    fn resolve_by_type(&self, type_key: Option<&str>) -> Option<&Equivalence> {
        self.by_type.get(type_key?)
    }
}

/// Maps declared array paths to their list rules. Lookup is by exact
/// normalized path; no prefix or pattern tiers exist for this category.
#[derive(Debug, Clone, Default)]
pub(crate) struct ListRuleRegistry {
    by_path: HashMap<String, ListRule>,
}

impl ListRuleRegistry {
    pub(crate) fn new(by_path: HashMap<String, ListRule>) -> Self {
        Self { by_path }
    }

    pub(crate) fn rule_for(&self, pointer: &str) -> Option<&ListRule> {
        self.by_path.get(pointer)
    }
}
