//! PreToolUse hook plumbing
//!
//! Claude Code pipes one JSON object describing the pending tool call to the
//! hook on stdin and reads one JSON object back from stdout.

pub mod context;
mod json;
pub mod trigger;

pub use context::{build_context, truncate_context, TRUNCATION_SUFFIX};
pub use trigger::should_inject;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{Read, Write};

use crate::error::HookError;
use json::AsciiSpacedFormatter;

/// The pending tool call, as described by Claude Code.
///
/// Fields are kept as raw JSON so a wrongly typed value only fails to match
/// instead of rejecting the whole request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolInvocation {
    #[serde(rename = "toolName", default)]
    pub tool_name: Option<Value>,
    #[serde(default)]
    pub prompt: Option<Value>,
}

impl ToolInvocation {
    pub fn new(tool_name: &str, prompt: &str) -> Self {
        Self {
            tool_name: Some(Value::from(tool_name)),
            prompt: Some(Value::from(prompt)),
        }
    }

    /// Tool name, if present and a string
    pub fn tool_name(&self) -> Option<&str> {
        self.tool_name.as_ref().and_then(Value::as_str)
    }

    /// Prompt text, if present and a string
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_ref().and_then(Value::as_str)
    }
}

/// Hook reply. An empty object means there is nothing to add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HookResponse {
    #[serde(rename = "additionalContext", skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl HookResponse {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_context(context: String) -> Self {
        Self {
            additional_context: Some(context),
        }
    }
}

/// Parse a tool invocation from raw hook input
pub fn parse_hook_input(input: &str) -> Result<ToolInvocation, HookError> {
    let value: Value = serde_json::from_str(input)?;
    if !value.is_object() {
        return Err(HookError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Read and parse hook input from a stream (stdin in production)
pub fn read_hook_input<R: Read>(mut reader: R) -> Result<ToolInvocation, HookError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_hook_input(&input)
}

/// Write the hook response as a single JSON line.
///
/// Output uses `", "`/`": "` separators and `\uXXXX` escapes for anything
/// outside printable ASCII.
pub fn write_hook_output<W: Write>(mut writer: W, response: &HookResponse) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiSpacedFormatter);
    response.serialize(&mut serializer)?;
    buf.push(b'\n');
    writer.write_all(&buf)?;
    writer.flush()
}
