//! Process-level tests for the validation hook
//!
//! Each test points `HOME` at a scratch directory so the default state and
//! log paths resolve inside it.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const STATE_FILE: &str = ".claude/validation-loop.local.md";
const LOG_FILE: &str = ".claude/logs/validation-framework.log";
const TRUNCATION_SUFFIX: &str = "\n... (truncated)";

fn run_hook(home: &Path, input: &str) -> Output {
    run_hook_with_args(home, input, &[])
}

fn run_hook_with_args(home: &Path, input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_validation-hook"))
        .args(args)
        .env("HOME", home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn validation-hook");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write hook input");

    child.wait_with_output().expect("Failed to wait for hook")
}

fn write_file(home: &Path, relative: &str, content: &str) -> PathBuf {
    let path = home.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    serde_json::from_str(stdout.trim_end()).expect("stdout should be one JSON object")
}

fn injected_context(output: &Output) -> String {
    stdout_json(output)["additionalContext"]
        .as_str()
        .expect("additionalContext should be a string")
        .to_string()
}

#[test]
fn test_non_task_without_state_is_noop() {
    let home = TempDir::new().unwrap();
    write_file(home.path(), LOG_FILE, "log line\n");

    for input in [
        r#"{"toolName": "Bash", "prompt": "validate the build"}"#,
        r#"{"toolName": "Read", "prompt": ""}"#,
        r#"{"prompt": "validator"}"#,
    ] {
        let output = run_hook(home.path(), input);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "{}\n");
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn test_wrongly_typed_fields_are_noop() {
    let home = TempDir::new().unwrap();
    write_file(home.path(), LOG_FILE, "log line\n");

    for input in [
        r#"{"toolName": "Bash", "prompt": 42}"#,
        r#"{"toolName": 7}"#,
        r#"{"toolName": ["Task"], "prompt": "validator"}"#,
    ] {
        let output = run_hook(home.path(), input);
        assert!(output.status.success(), "Expected '{input}' to succeed");
        assert_eq!(String::from_utf8_lossy(&output.stdout), "{}\n");
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn test_large_input_is_accepted() {
    let home = TempDir::new().unwrap();
    let input = format!(
        r#"{{"toolName": "Bash", "prompt": "{}"}}"#,
        "a".repeat(1_100_000)
    );

    let output = run_hook(home.path(), &input);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{}\n");
}

#[test]
fn test_output_escapes_non_ascii() {
    let home = TempDir::new().unwrap();
    write_file(home.path(), LOG_FILE, "r\u{e9}sum\u{e9} failed\n");

    let output = run_hook(home.path(), r#"{"toolName": "Task", "prompt": "validate"}"#);

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(stdout.starts_with("{\"additionalContext\": \""));
    assert!(stdout.contains("r\\u00e9sum\\u00e9 failed"));
    assert!(stdout.is_ascii());
    assert!(injected_context(&output).contains("r\u{e9}sum\u{e9} failed"));
}

#[test]
fn test_validate_prompt_without_files_is_noop() {
    let home = TempDir::new().unwrap();

    let output = run_hook(home.path(), r#"{"toolName": "Task", "prompt": "VaLiDaTe the diff"}"#);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{}\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_state_file_triggers_any_task() {
    let home = TempDir::new().unwrap();
    write_file(
        home.path(),
        STATE_FILE,
        "---\niteration: 3\nmax_iterations: 10\ntemp_dir: /tmp/x\n---\nbody\n",
    );

    let output = run_hook(home.path(), r#"{"toolName": "Task", "prompt": "write docs"}"#);

    assert!(output.status.success());
    assert_eq!(
        injected_context(&output),
        "## Validation Loop State\n\nIteration: 3/10\n\nTemp Dir: /tmp/x\n"
    );
}

#[test]
fn test_injects_log_tail_and_diagnostic() {
    let home = TempDir::new().unwrap();
    let log: String = (1..=25).map(|i| format!("entry {i}\n")).collect();
    write_file(home.path(), LOG_FILE, &log);

    let output = run_hook(home.path(), r#"{"toolName": "Task", "prompt": "run validator"}"#);

    assert!(output.status.success());
    let context = injected_context(&output);
    let expected_tail: Vec<String> = (6..=25).map(|i| format!("entry {i}")).collect();
    assert_eq!(
        context,
        format!("\n## Recent Activity\n```\n{}\n```", expected_tail.join("\n"))
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        format!("[Validation Hook] Injected {} chars\n", context.chars().count())
    );
}

#[test]
fn test_oversized_context_is_truncated() {
    let home = TempDir::new().unwrap();
    write_file(home.path(), LOG_FILE, &"a".repeat(3000));

    let output = run_hook(home.path(), r#"{"toolName": "Task", "prompt": "validator"}"#);

    let context = injected_context(&output);
    assert_eq!(context.chars().count(), 2000 + TRUNCATION_SUFFIX.len());
    assert!(context.ends_with(TRUNCATION_SUFFIX));
}

#[test]
fn test_repeated_runs_are_identical() {
    let home = TempDir::new().unwrap();
    write_file(home.path(), STATE_FILE, "---\niteration: 2\n---\n");
    write_file(home.path(), LOG_FILE, "one\ntwo\n");
    let input = r#"{"toolName": "Task", "prompt": "validate"}"#;

    let first = run_hook(home.path(), input);
    let second = run_hook(home.path(), input);

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn test_malformed_input_fails_without_output() {
    let home = TempDir::new().unwrap();
    write_file(home.path(), LOG_FILE, "line\n");

    for input in ["this is not json", "", "[1, 2]"] {
        let output = run_hook(home.path(), input);
        assert!(!output.status.success(), "Expected '{input}' to fail");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_path_and_limit_overrides() {
    let home = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    let state = write_file(scratch.path(), "loop.md", "---\nmax_iterations: 4\n---\n");
    let log = write_file(scratch.path(), "run.log", "x\ny\nz\n");

    let output = run_hook_with_args(
        home.path(),
        r#"{"toolName": "Task", "prompt": "hello"}"#,
        &[
            "--state-file",
            state.to_str().unwrap(),
            "--log-file",
            log.to_str().unwrap(),
            "--tail-lines",
            "1",
        ],
    );

    assert!(output.status.success());
    assert_eq!(
        injected_context(&output),
        "## Validation Loop State\n\nIteration: ?/4\n\nTemp Dir: N/A\n\n\n## Recent Activity\n```\nz\n```"
    );
}

#[test]
fn test_zero_tail_lines_is_rejected() {
    let home = TempDir::new().unwrap();

    let output = run_hook_with_args(
        home.path(),
        r#"{"toolName": "Task", "prompt": "validate"}"#,
        &["--tail-lines", "0"],
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
