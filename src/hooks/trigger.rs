//! Decide whether a tool call is a validator task.
//!
//! Matching is a loose heuristic on the prompt text. False positives only
//! cost a little extra context, so it is kept deliberately simple.

use std::path::Path;

use super::ToolInvocation;

/// Tool name Claude Code uses for sub-agent tasks
pub const TASK_TOOL_NAME: &str = "Task";

const PROMPT_KEYWORDS: [&str; 2] = ["validator", "validate"];

/// Returns true when `invocation` is a Task call that looks like validation,
/// or any Task call while a validation loop state file exists.
pub fn should_inject(invocation: &ToolInvocation, state_file: &Path) -> bool {
    if invocation.tool_name() != Some(TASK_TOOL_NAME) {
        return false;
    }

    // A null or non-string prompt has no keywords to match
    let prompt = invocation.prompt().unwrap_or_default().to_lowercase();
    PROMPT_KEYWORDS.iter().any(|keyword| prompt.contains(keyword)) || state_file.exists()
}
