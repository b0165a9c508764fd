//! Validation loop state file
//!
//! The loop writes a markdown file whose frontmatter tracks progress:
//!
//! ```text
//! ---
//! iteration: 3
//! max_iterations: 10
//! temp_dir: /tmp/validation-abc
//! ---
//! free-form body
//! ```
//!
//! Only the frontmatter is read. Values stay strings; nothing is validated.

use std::collections::HashMap;
use std::path::Path;

use super::read_optional;

const FRONTMATTER_DELIMITER: &str = "---";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopState {
    pub fields: HashMap<String, String>,
}

impl LoopState {
    /// Parse the frontmatter block of a state file.
    ///
    /// Returns `None` unless the first line is exactly `---`. Header lines
    /// without a `:` are skipped; a missing closing `---` reads to the end.
    pub fn parse(content: &str) -> Option<Self> {
        let mut lines = content.split('\n');

        if lines.next() != Some(FRONTMATTER_DELIMITER) {
            return None;
        }

        let mut fields = HashMap::new();
        for line in lines {
            if line == FRONTMATTER_DELIMITER {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                fields.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Some(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn iteration(&self) -> Option<&str> {
        self.get("iteration")
    }

    pub fn max_iterations(&self) -> Option<&str> {
        self.get("max_iterations")
    }

    pub fn temp_dir(&self) -> Option<&str> {
        self.get("temp_dir")
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Read and parse the state file, if one exists
pub fn read_state_file(path: &Path) -> Option<LoopState> {
    let content = read_optional(path)?;
    let state = LoopState::parse(&content);
    if state.is_none() {
        tracing::debug!("{} has no frontmatter, ignoring", path.display());
    }
    state
}
