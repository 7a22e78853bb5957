//! JSON Pointer path utilities.
//!
//! Paths are RFC 6901 pointer strings: segments separated by `/`, with a
//! literal `~` escaped as `~0` and a literal `/` as `~1`. Array elements
//! addressed by identity carry a synthetic `{key}` segment instead of a
//! numeric index.

/// Escapes a string for use as a JSON Pointer segment.
pub fn escape(raw: &str) -> String {
    raw.replace('~', "~0").replace('/', "~1")
}

/// Appends an escaped field segment to a base path.
///
/// # Examples
///
/// ```
/// use rulediff_rs::path;
///
/// assert_eq!(path::child("/items", "name"), "/items/name");
/// assert_eq!(path::child("/", "name"), "/name");
/// assert_eq!(path::child("/items", "field/name"), "/items/field~1name");
/// ```
pub fn child(base: &str, key: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, escape(key))
    } else {
        format!("{}/{}", base, escape(key))
    }
}

/// Appends a positional index segment to a base path.
pub fn child_index(base: &str, index: usize) -> String {
    child(base, &index.to_string())
}

/// Normalizes a prefix so it ends with a slash.
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.ends_with('/') {
        prefix.to_string()
    } else {
        format!("{}/", prefix)
    }
}

/// True when `path` falls under `prefix`: either the prefix path itself or
/// any descendant. `/meta` matches `/meta` and `/meta/x` but not
/// `/metadata`.
pub fn starts_with_prefix(path: &str, prefix: &str) -> bool {
    let normalized = normalize_prefix(prefix);
    path.starts_with(&normalized) || normalized.strip_suffix('/') == Some(path)
}

/// Normalizes a pointer path by removing numeric index and `{…}` identity
/// segments. This converts instance-specific paths to structure-based
/// paths, so one rule declaration applies to every instance of an array
/// shape.
///
/// # Examples
///
/// ```
/// use rulediff_rs::path;
///
/// assert_eq!(path::normalize("/items/0/name"), "/items/name");
/// assert_eq!(path::normalize("/items/{id}/name"), "/items/name");
/// assert_eq!(path::normalize("/"), "/");
/// ```
pub fn normalize(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }

    let mut normalized = String::new();
    for segment in path.split('/') {
        if is_structural_segment(segment) {
            normalized.push('/');
            normalized.push_str(segment);
        }
    }

    if normalized.is_empty() {
        "/".to_string()
    } else {
        normalized
    }
}

fn is_structural_segment(segment: &str) -> bool {
    !segment.is_empty() && !is_numeric_index(segment) && !is_identity_segment(segment)
}

fn is_numeric_index(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

fn is_identity_segment(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}
