//! Validation context formatting
//!
//! Renders loop state and the recent log tail as markdown, capped at a
//! fixed number of characters.

use crate::config::HookConfig;
use crate::fs::{read_recent_logs, read_state_file, LoopState};

/// Appended after the cut when context exceeds the cap
pub const TRUNCATION_SUFFIX: &str = "\n... (truncated)";

/// Format state and log tail into a single context string.
///
/// Either part may be absent; with neither, the result is empty. The cap
/// is applied before the suffix, so a truncated result is longer than
/// `max_chars` by the suffix length.
pub fn format_context(state: Option<&LoopState>, logs: &str, max_chars: usize) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(state) = state.filter(|s| !s.is_empty()) {
        parts.push("## Validation Loop State\n".to_string());
        parts.push(format!(
            "Iteration: {}/{}\n",
            state.iteration().unwrap_or("?"),
            state.max_iterations().unwrap_or("?")
        ));
        parts.push(format!("Temp Dir: {}\n", state.temp_dir().unwrap_or("N/A")));
    }

    if !logs.is_empty() {
        parts.push(format!("\n## Recent Activity\n```\n{logs}\n```"));
    }

    truncate_context(parts.join("\n"), max_chars)
}

/// Cut `context` to `max_chars` characters and mark it as truncated.
///
/// Strings at or under the cap are returned untouched.
pub fn truncate_context(context: String, max_chars: usize) -> String {
    match context.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            tracing::debug!("Truncating context to {max_chars} chars");
            let mut truncated = context;
            truncated.truncate(cut);
            truncated.push_str(TRUNCATION_SUFFIX);
            truncated
        }
        None => context,
    }
}

/// Read the state and log files named by `config` and format them
pub fn build_context(config: &HookConfig) -> String {
    let state = read_state_file(&config.state_file);
    let logs = read_recent_logs(&config.log_file, config.max_log_lines);
    tracing::debug!(
        has_state = state.is_some(),
        log_chars = logs.len(),
        "Building validation context"
    );
    format_context(state.as_ref(), &logs, config.max_context_chars)
}
