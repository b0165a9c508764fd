//! Inject validation context into a pending Task call
//!
//! One read-compute-emit cycle: parse the tool call, decide whether it is a
//! validator task, and reply with either `{}` or the formatted context.

use std::io::{Read, Write};

use anyhow::{Context, Result};

use crate::config::HookConfig;
use crate::hooks::{build_context, read_hook_input, should_inject, write_hook_output, HookResponse};

/// Compute the response for one hook invocation read from `input`
pub fn respond<R: Read>(input: R, config: &HookConfig) -> Result<HookResponse> {
    let invocation = read_hook_input(input)?;

    if !should_inject(&invocation, &config.state_file) {
        tracing::debug!(tool = ?invocation.tool_name(), "Not a validator task, skipping");
        return Ok(HookResponse::empty());
    }

    let context = build_context(config);
    if context.is_empty() {
        tracing::debug!("No validation state or logs to inject");
        return Ok(HookResponse::empty());
    }

    Ok(HookResponse::with_context(context))
}

/// Run the hook against the given streams.
///
/// Nothing is written to `stdout` if the input cannot be parsed.
pub fn execute<R: Read, W: Write, E: Write>(
    stdin: R,
    mut stdout: W,
    mut stderr: E,
    config: &HookConfig,
) -> Result<()> {
    let response = respond(stdin, config)?;

    write_hook_output(&mut stdout, &response).context("Failed to write hook output")?;

    if let Some(context) = &response.additional_context {
        writeln!(stderr, "[Validation Hook] Injected {} chars", context.chars().count())
            .context("Failed to write hook diagnostic")?;
    }

    Ok(())
}
