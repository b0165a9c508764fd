//! Tail of the validation framework log

use std::path::Path;

use super::read_optional;

/// Return the last `max_lines` lines of the log joined with `\n`.
///
/// A missing log yields an empty string.
pub fn read_recent_logs(path: &Path, max_lines: usize) -> String {
    let Some(content) = read_optional(path) else {
        return String::new();
    };

    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}
