//! Runs the binary for flag handling that exits before the terminal is mounted.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn hello_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hello-stores"))
}

#[test]
fn test_help_lists_flags() {
    let output = hello_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--config",
        "--name",
        "--count-seed",
        "--no-count-seed",
        "--notify",
        "--edit-trigger",
    ] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn test_invalid_notify_value_is_usage_error() {
    let output = hello_cmd()
        .args(["--notify", "sometimes"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("on-change"));
}

#[test]
fn test_broken_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = \"fast\"\n").unwrap();

    let output = hello_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"));
}
