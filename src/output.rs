//! Output formatting for diff results.
//!
//! Renders an ordered list of diff entries as colored terminal text,
//! plain text, or JSON.

use crate::diff::{DiffEntry, DiffKind};
use crate::error::RenderError;
use crate::parser::to_value;
use colored::*;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the diff
    Json,
    /// Plain text, no colors (suitable for piping)
    Plain,
}

/// Options for controlling output formatting.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Maximum length for displayed values (truncate if longer)
    pub max_value_length: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            max_value_length: 80,
        }
    }
}

/// Formats a diff entry list according to the specified format and options.
///
/// # Examples
///
/// ```
/// use rulediff_rs::{compare, parse_json, DiffConfig, OutputFormat, OutputOptions, render_entries};
///
/// let left = parse_json(r#"{"age": 30}"#).unwrap();
/// let right = parse_json(r#"{"age": 31}"#).unwrap();
/// let diffs = compare(&left, &right, &DiffConfig::default());
///
/// let output = render_entries(&diffs, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
/// assert!(output.contains("/age"));
/// ```
pub fn render_entries(
    entries: &[DiffEntry],
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Terminal => Ok(render_terminal(entries, options)),
        OutputFormat::Json => render_json(entries),
        OutputFormat::Plain => Ok(render_plain(entries, options)),
    }
}

fn render_terminal(entries: &[DiffEntry], options: &OutputOptions) -> String {
    if entries.is_empty() {
        return "No changes detected.".dimmed().to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&render_entry_terminal(entry, options));
        output.push('\n');
    }
    output.push('\n');
    output.push_str(&render_summary(entries));
    output
}

fn render_entry_terminal(entry: &DiffEntry, options: &OutputOptions) -> String {
    match entry.kind {
        DiffKind::Added => {
            let value = preview_of(&entry.new_value, options);
            format!(
                "{} {}: {}",
                "+".bright_green(),
                entry.path.green(),
                value.green()
            )
        }
        DiffKind::Removed => {
            let value = preview_of(&entry.old_value, options);
            format!(
                "{} {}: {}",
                "-".bright_red(),
                entry.path.red(),
                value.red()
            )
        }
        DiffKind::Changed => {
            let old_value = preview_of(&entry.old_value, options);
            let new_value = preview_of(&entry.new_value, options);
            format!(
                "{} {}: {} {} {}",
                "•".bright_yellow(),
                entry.path.yellow(),
                old_value.yellow(),
                "→".bright_yellow(),
                new_value.yellow()
            )
        }
    }
}

fn render_plain(entries: &[DiffEntry], options: &OutputOptions) -> String {
    if entries.is_empty() {
        return "No changes detected.".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&render_entry_plain(entry, options));
        output.push('\n');
    }
    output.push('\n');
    output.push_str(&render_summary(entries));
    output
}

fn render_entry_plain(entry: &DiffEntry, options: &OutputOptions) -> String {
    match entry.kind {
        DiffKind::Added => {
            format!("+ {}: {}", entry.path, preview_of(&entry.new_value, options))
        }
        DiffKind::Removed => {
            format!("- {}: {}", entry.path, preview_of(&entry.old_value, options))
        }
        DiffKind::Changed => format!(
            "• {}: {} → {}",
            entry.path,
            preview_of(&entry.old_value, options),
            preview_of(&entry.new_value, options)
        ),
    }
}

fn render_json(entries: &[DiffEntry]) -> Result<String, RenderError> {
    use serde_json::json;

    let changes: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "path": entry.path,
                "kind": entry.kind,
                "old_value": entry.old_value.as_ref().map(to_value),
                "new_value": entry.new_value.as_ref().map(to_value),
            })
        })
        .collect();

    let (added, removed, changed) = count_kinds(entries);
    let output = json!({
        "changes": changes,
        "stats": {
            "added": added,
            "removed": removed,
            "changed": changed,
        }
    });

    Ok(serde_json::to_string_pretty(&output)?)
}

fn preview_of(value: &Option<crate::tree::Node>, options: &OutputOptions) -> String {
    value
        .as_ref()
        .map(|node| node.preview(options.max_value_length))
        .unwrap_or_else(|| "(absent)".to_string())
}

fn count_kinds(entries: &[DiffEntry]) -> (usize, usize, usize) {
    let mut added = 0;
    let mut removed = 0;
    let mut changed = 0;
    for entry in entries {
        match entry.kind {
            DiffKind::Added => added += 1,
            DiffKind::Removed => removed += 1,
            DiffKind::Changed => changed += 1,
        }
    }
    (added, removed, changed)
}

fn render_summary(entries: &[DiffEntry]) -> String {
    let (added, removed, changed) = count_kinds(entries);
    let mut parts = Vec::new();
    if added > 0 {
        parts.push(format!("{} added", added));
    }
    if removed > 0 {
        parts.push(format!("{} removed", removed));
    }
    if changed > 0 {
        parts.push(format!("{} changed", changed));
    }
    format!("Summary: {}", parts.join(", "))
}
