//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_taskdeck(store: &Path, args: &[&str], stdin: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_taskdeck");
    let mut child = Command::new(bin)
        .args(args)
        .env("TASKDECK_STORE", store.join("storage.json"))
        .env("TASKDECK_API_URL", "http://127.0.0.1:9/api")
        .env_remove("TASKDECK_CONFIG")
        .env_remove("TASKDECK_RECORD")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run taskdeck binary");
    // The child may exit without reading, e.g. for `--help`.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Adds a task and returns its id as printed by `add`.
fn add(store: &Path, title: &str, description: &str) -> String {
    let output = run_taskdeck(store, &["add", title, description], "");
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    let row = out.lines().nth(1).expect("add prints the new row");
    row.split_whitespace().next().unwrap().to_string()
}

#[test]
fn add_then_list_shows_task() {
    let store = tempfile::tempdir().unwrap();
    add(store.path(), "Buy milk", "2L");

    let output = run_taskdeck(store.path(), &["list"], "");
    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.contains("Buy milk"), "{out}");
    assert!(out.contains("1 task(s), 0 done."), "{out}");
}

#[test]
fn blank_add_fails_with_notice() {
    let store = tempfile::tempdir().unwrap();
    let output = run_taskdeck(store.path(), &["add", "  ", "2L"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Please fill in both fields"));
}

#[test]
fn complete_and_edit_persist() {
    let store = tempfile::tempdir().unwrap();
    let id = add(store.path(), "Old", "text");

    let output = run_taskdeck(store.path(), &["complete", &id], "");
    assert!(stdout(&output).contains("Task status updated"));
    let output = run_taskdeck(store.path(), &["edit", &id, "New", "Desc"], "");
    assert!(stdout(&output).contains("Task updated"));

    let out = stdout(&run_taskdeck(store.path(), &["list"], ""));
    assert!(out.contains("[x]"), "{out}");
    assert!(out.contains("New") && out.contains("Desc"), "{out}");
}

#[test]
fn delete_asks_before_removing() {
    let store = tempfile::tempdir().unwrap();
    let id = add(store.path(), "Keep?", "maybe");

    let output = run_taskdeck(store.path(), &["delete", &id], "n\n");
    assert!(stdout(&output).contains("Are you sure you want to delete this task?"));
    assert!(stdout(&output).contains("Delete cancelled."));
    assert!(stdout(&run_taskdeck(store.path(), &["list"], "")).contains("Keep?"));

    let output = run_taskdeck(store.path(), &["delete", &id], "y\n");
    assert!(stdout(&output).contains("Task deleted"));
    assert!(stdout(&run_taskdeck(store.path(), &["list"], "")).contains("No tasks yet."));
}

#[test]
fn unreachable_api_gives_generic_login_error() {
    let store = tempfile::tempdir().unwrap();
    let output = run_taskdeck(store.path(), &["login", "ada", "secret"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("An error occurred. Please try again."));
}

#[test]
fn login_reads_password_from_stdin() {
    let store = tempfile::tempdir().unwrap();
    let output = run_taskdeck(store.path(), &["login", "ada"], "secret\n");
    assert!(stdout(&output).starts_with("Password: "));
    assert!(stderr(&output).contains("An error occurred. Please try again."));
}

#[test]
fn login_without_password_or_input_fails() {
    let store = tempfile::tempdir().unwrap();
    let output = run_taskdeck(store.path(), &["login", "ada"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("No password given."));
}

#[test]
fn status_on_fresh_store() {
    let store = tempfile::tempdir().unwrap();
    let output = run_taskdeck(store.path(), &["status"], "");
    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.contains("Logged in:  no"), "{out}");
    assert!(out.contains("http://127.0.0.1:9/api"), "{out}");
}

#[test]
fn shell_runs_scripted_session() {
    let store = tempfile::tempdir().unwrap();
    let output = run_taskdeck(store.path(), &["shell"], "add Buy milk | 2L\nlist\nquit\n");
    let out = stdout(&output);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(out.contains("Task Added"), "{out}");
    assert!(out.contains("Buy milk"), "{out}");
}

#[test]
fn non_numeric_id_is_rejected() {
    let store = tempfile::tempdir().unwrap();
    let output = run_taskdeck(store.path(), &["complete", "abc"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid task id"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let store = tempfile::tempdir().unwrap();
    let output = run_taskdeck(store.path(), &["nonsense"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unrecognized subcommand"));
}

#[test]
fn help_lists_commands() {
    let store = tempfile::tempdir().unwrap();
    let output = run_taskdeck(store.path(), &["--help"], "");
    let out = stdout(&output);
    assert!(output.status.success());
    for command in ["login", "logout", "add", "list", "complete", "edit", "delete", "shell"] {
        assert!(out.contains(command), "missing {command}: {out}");
    }
}
