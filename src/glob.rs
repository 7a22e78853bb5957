//! Wildcard patterns for JSON Pointer paths.
//!
//! This module compiles a small glob grammar into a pattern that can be
//! matched against full pointer strings.
//!
//! # Pattern Syntax
//!
//! - `*` - matches any run of characters within a single segment (stops at `/`)
//! - `**` - matches any run of characters, crossing segment boundaries
//! - `?` - matches exactly one character other than `/`
//! - any other character matches itself
//!
//! # Examples
//!
//! ```
//! use rulediff_rs::glob::PathPattern;
//!
//! let pattern = PathPattern::compile("/metadata/timestamp");
//! assert!(pattern.matches("/metadata/timestamp"));
//!
//! let pattern = PathPattern::compile("/**/version");
//! assert!(pattern.matches("/package/version"));
//! assert!(pattern.matches("/dependencies/foo/version"));
//! ```
//!
//! The wildcards expand at character level, so the `/` separators written
//! around them are still matched literally: `/**/version` requires at
//! least one segment before `version`.

/// A single compiled element of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GlobToken {
    /// Matches exactly this character
    Literal(char),
    /// Matches any run of non-`/` characters (*)
    AnySegment,
    /// Matches any run of characters including `/` (**)
    AnyPath,
    /// Matches one non-`/` character (?)
    AnyChar,
}

/// A compiled wildcard pattern for matching pointer paths.
#[derive(Debug, Clone)]
pub struct PathPattern {
    tokens: Vec<GlobToken>,
    source: String,
}

impl PathPattern {
    /// Compiles a glob string into a pattern.
    pub fn compile(glob: &str) -> Self {
        let mut tokens = Vec::new();
        let chars: Vec<char> = glob.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            match chars[i] {
                '*' => {
                    if i + 1 < chars.len() && chars[i + 1] == '*' {
                        tokens.push(GlobToken::AnyPath);
                        i += 1;
                    } else {
                        tokens.push(GlobToken::AnySegment);
                    }
                }
                '?' => tokens.push(GlobToken::AnyChar),
                c => tokens.push(GlobToken::Literal(c)),
            }
            i += 1;
        }
        Self {
            tokens,
            source: glob.to_string(),
        }
    }

    /// The glob string this pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tests whether the pattern matches the entire path.
    pub fn matches(&self, path: &str) -> bool {
        let chars: Vec<char> = path.chars().collect();
        matches_recursive(&self.tokens, &chars)
    }
}

fn matches_recursive(tokens: &[GlobToken], path: &[char]) -> bool {
    match (tokens.first(), path.first()) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(_), None) => tokens
            .iter()
            .all(|t| matches!(t, GlobToken::AnyPath | GlobToken::AnySegment)),
        (Some(token), Some(&c)) => match token {
            GlobToken::Literal(lit) => *lit == c && matches_recursive(&tokens[1..], &path[1..]),
            GlobToken::AnyChar => c != '/' && matches_recursive(&tokens[1..], &path[1..]),
            GlobToken::AnySegment => {
                matches_recursive(&tokens[1..], path)
                    || (c != '/' && matches_recursive(tokens, &path[1..]))
            }
            GlobToken::AnyPath => {
                matches_recursive(&tokens[1..], path) || matches_recursive(tokens, &path[1..])
            }
        },
    }
}
