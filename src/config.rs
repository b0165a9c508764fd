//! Hook configuration
//!
//! Paths and size caps are resolved once at startup and passed down to the
//! readers and the context builder, so every stage can be pointed at a
//! scratch directory in tests.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// State file written by the validation loop, relative to the home directory
pub const STATE_FILE_RELATIVE: &str = ".claude/validation-loop.local.md";

/// Validation framework log, relative to the home directory
pub const LOG_FILE_RELATIVE: &str = ".claude/logs/validation-framework.log";

/// Maximum characters of injected context before truncation
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 2000;

/// Number of trailing log lines included in the context
pub const DEFAULT_MAX_LOG_LINES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    pub state_file: PathBuf,
    pub log_file: PathBuf,
    pub max_context_chars: usize,
    pub max_log_lines: usize,
}

impl HookConfig {
    /// Build the default layout under an arbitrary home directory
    pub fn with_home<P: AsRef<Path>>(home: P) -> Self {
        let home = home.as_ref();
        Self {
            state_file: home.join(STATE_FILE_RELATIVE),
            log_file: home.join(LOG_FILE_RELATIVE),
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            max_log_lines: DEFAULT_MAX_LOG_LINES,
        }
    }

    /// Build the default layout under the current user's home directory
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().context("Failed to determine home directory")?;
        Ok(Self::with_home(home))
    }
}
