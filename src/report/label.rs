//! Short display labels for root directories
//!
//! Gradle and Maven projects keep code under `<project>/src/...`, so the
//! directory just above `src` usually names the project.

use std::path::MAIN_SEPARATOR;

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Derive the report label for a root path.
///
/// - first segment starting with `src` is the first segment: `"src"`
/// - otherwise the segment right before it
/// - no such segment: the last segment of the path
pub fn derive_label(root: &str) -> String {
    let segments: Vec<&str> = root.split(is_separator).collect();

    if let Some(position) = segments.iter().position(|s| s.starts_with("src")) {
        if position == 0 {
            return "src".to_string();
        }
        return segments[position - 1].to_string();
    }

    let trimmed = root.trim_end_matches(is_separator);
    let trimmed = if trimmed.is_empty() { root } else { trimmed };
    trimmed
        .rsplit(is_separator)
        .next()
        .unwrap_or(trimmed)
        .to_string()
}
