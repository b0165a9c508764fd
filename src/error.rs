//! Error types for the validation hook.
//!
//! Only the incoming request can fail an invocation. Missing or malformed
//! state and log files degrade to less context instead of surfacing here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("Failed to read hook input from stdin: {0}")]
    ReadInput(#[from] std::io::Error),

    #[error("Failed to parse hook input as JSON: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("Hook input must be a JSON object")]
    NotAnObject,
}
