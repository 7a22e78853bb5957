//! Comparison configuration: the aggregate of all rule registries.
//!
//! A [`DiffConfig`] is built once through [`DiffConfigBuilder`], validated
//! eagerly at every registration, and frozen on [`DiffConfigBuilder::build`].
//! Once built it is immutable and may be shared across any number of
//! concurrent comparisons.
//!
//! # Examples
//!
//! ```
//! use rulediff_rs::{DiffConfig, ListRule};
//!
//! # fn example() -> Result<(), rulediff_rs::ConfigError> {
//! let config = DiffConfig::builder()
//!     .list("/items", ListRule::id("id")?)?
//!     .ignore("/updatedAt")?
//!     .ignore_prefix("/meta")?
//!     .build();
//! # Ok(())
//! # }
//! ```

use crate::error::ConfigError;
use crate::glob::PathPattern;
use crate::path;
use crate::rules::{Equivalence, EquivalenceRegistry, ListRule, ListRuleRegistry, PathIgnoreFilter};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

const DEFAULT_ROOT_PATH: &str = "/";

/// Immutable aggregate of list rules, ignore filters, equivalence
/// predicates, type hints, and the root path.
#[derive(Clone, Default)]
pub struct DiffConfig {
    list_rules: ListRuleRegistry,
    ignores: PathIgnoreFilter,
    equivalences: EquivalenceRegistry,
    type_hints: HashMap<String, String>,
    root_path: String,
}

impl DiffConfig {
    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder::new()
    }

    /// Returns the list rule declared for the array at `pointer`, if any.
    /// The pointer is normalized first, so one declaration covers every
    /// instance of the array shape.
    pub fn list_rule(&self, pointer: &str) -> Option<&ListRule> {
        let normalized = path::normalize(pointer);
        self.list_rules.rule_for(&normalized)
    }

    /// True when the path matches any ignore category.
    pub fn is_ignored(&self, pointer: &str) -> bool {
        self.ignores.should_ignore(pointer)
    }

    /// Resolves the equivalence predicate that applies at `pointer`, if
    /// any. Exact, pattern, and prefix tiers see the raw instance path;
    /// the type tier looks the normalized path up in the type-hint map.
    pub fn equivalence_at(&self, pointer: &str) -> Option<&Equivalence> {
        let normalized = path::normalize(pointer);
        let type_key = self.type_hints.get(&normalized).map(String::as_str);
        self.equivalences.resolve(pointer, type_key)
    }

    pub fn root_path(&self) -> &str {
        if self.root_path.is_empty() {
            DEFAULT_ROOT_PATH
        } else {
            &self.root_path
        }
    }
}

/// Staged builder for [`DiffConfig`].
///
/// Every registration validates its arguments and returns
/// `Result<Self, ConfigError>`, so failures surface at the registration
/// site rather than at comparison time.
#[derive(Default)]
pub struct DiffConfigBuilder {
    list_rules: HashMap<String, ListRule>,
    ignore_exact: HashSet<String>,
    ignore_prefixes: Vec<String>,
    ignore_patterns: Vec<PathPattern>,
    equivalence_exact: HashMap<String, Equivalence>,
    equivalence_patterns: Vec<(PathPattern, Equivalence)>,
    equivalence_prefixes: Vec<(String, Equivalence)>,
    equivalence_by_type: HashMap<String, Equivalence>,
    equivalence_fallback: Option<Equivalence>,
    type_hints: HashMap<String, String>,
    root_path: String,
}

impl DiffConfigBuilder {
    pub fn new() -> Self {
        Self {
            root_path: DEFAULT_ROOT_PATH.to_string(),
            ..Self::default()
        }
    }

    /// Declares how the array at `pointer` pairs its elements.
    pub fn list(mut self, pointer: &str, rule: ListRule) -> Result<Self, ConfigError> {
        validate_pointer(pointer, "pointer")?;
        self.list_rules.insert(pointer.to_string(), rule);
        Ok(self)
    }

    /// Suppresses the exact path from the diff.
    pub fn ignore(mut self, pointer: &str) -> Result<Self, ConfigError> {
        validate_pointer(pointer, "pointer")?;
        self.ignore_exact.insert(pointer.to_string());
        Ok(self)
    }

    /// Suppresses the prefix path and everything under it.
    pub fn ignore_prefix(mut self, prefix: &str) -> Result<Self, ConfigError> {
        validate_pointer(prefix, "prefix")?;
        self.ignore_prefixes.push(prefix.to_string());
        Ok(self)
    }

    /// Suppresses every path fully matched by a compiled pattern.
    pub fn ignore_pattern(mut self, pattern: PathPattern) -> Self {
        self.ignore_patterns.push(pattern);
        self
    }

    /// Compiles a glob and suppresses every path it fully matches.
    pub fn ignore_glob(mut self, glob: &str) -> Self {
        self.ignore_patterns.push(PathPattern::compile(glob));
        self
    }

    /// Registers an equivalence predicate for the exact path.
    pub fn equivalent_at<F>(mut self, pointer: &str, eq: F) -> Result<Self, ConfigError>
    where
        F: Fn(&crate::tree::Node, &crate::tree::Node) -> bool + Send + Sync + 'static,
    {
        validate_pointer(pointer, "pointer")?;
        self.equivalence_exact.insert(pointer.to_string(), Arc::new(eq));
        Ok(self)
    }

    /// Registers an equivalence predicate for a prefix path and everything
    /// under it. When prefixes overlap, the longest one wins.
    pub fn equivalent_under<F>(mut self, prefix: &str, eq: F) -> Result<Self, ConfigError>
    where
        F: Fn(&crate::tree::Node, &crate::tree::Node) -> bool + Send + Sync + 'static,
    {
        validate_pointer(prefix, "prefix")?;
        self.equivalence_prefixes.push((prefix.to_string(), Arc::new(eq)));
        Ok(self)
    }

    /// Registers an equivalence predicate for every path matching the
    /// compiled pattern. Patterns are tried in declaration order.
    pub fn equivalent_pattern<F>(mut self, pattern: PathPattern, eq: F) -> Self
    where
        F: Fn(&crate::tree::Node, &crate::tree::Node) -> bool + Send + Sync + 'static,
    {
        self.equivalence_patterns.push((pattern, Arc::new(eq)));
        self
    }

    /// Registers an equivalence predicate for a type label; paths are
    /// mapped to labels through [`DiffConfigBuilder::type_hint`].
    pub fn equivalent_for_type<F>(mut self, type_key: &str, eq: F) -> Result<Self, ConfigError>
    where
        F: Fn(&crate::tree::Node, &crate::tree::Node) -> bool + Send + Sync + 'static,
    {
        validate_label(type_key)?;
        self.equivalence_by_type.insert(type_key.to_string(), Arc::new(eq));
        Ok(self)
    }

    /// Registers the last-resort equivalence predicate, consulted when no
    /// other tier matches.
    pub fn equivalent_fallback<F>(mut self, eq: F) -> Self
    where
        F: Fn(&crate::tree::Node, &crate::tree::Node) -> bool + Send + Sync + 'static,
    {
        self.equivalence_fallback = Some(Arc::new(eq));
        self
    }

    /// Labels the normalized path with a type key, feeding the type tier
    /// of equivalence resolution. Labels come from an external provider;
    /// this crate only consumes them.
    pub fn type_hint(mut self, pointer: &str, type_key: &str) -> Result<Self, ConfigError> {
        validate_pointer(pointer, "pointer")?;
        validate_label(type_key)?;
        self.type_hints.insert(pointer.to_string(), type_key.to_string());
        Ok(self)
    }

    /// Sets the path the walk starts from. Blank input falls back to `/`.
    pub fn root_path(mut self, root: &str) -> Self {
        self.root_path = if root.trim().is_empty() {
            DEFAULT_ROOT_PATH.to_string()
        } else {
            root.to_string()
        };
        self
    }

    /// Freezes the registered rules into an immutable [`DiffConfig`].
    pub fn build(self) -> DiffConfig {
        DiffConfig {
            list_rules: ListRuleRegistry::new(self.list_rules),
            ignores: PathIgnoreFilter::new(
                self.ignore_exact,
                self.ignore_prefixes,
                self.ignore_patterns,
            ),
            equivalences: EquivalenceRegistry::new(
                self.equivalence_exact,
                self.equivalence_patterns,
                self.equivalence_prefixes,
                self.equivalence_by_type,
                self.equivalence_fallback,
            ),
            type_hints: self.type_hints,
            root_path: self.root_path,
        }
    }
}

fn validate_pointer(pointer: &str, param: &'static str) -> Result<(), ConfigError> {
    if pointer.is_empty() {
        return Err(ConfigError::empty_path(param));
    }
    Ok(())
}

fn validate_label(label: &str) -> Result<(), ConfigError> {
    if label.trim().is_empty() {
        return Err(ConfigError::BlankTypeLabel);
    }
    Ok(())
}
