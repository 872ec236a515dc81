//! Shared helpers for end-to-end CLI tests.
#![allow(dead_code)] // Not every test file uses every helper

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the huewheel binary
pub fn huewheel_bin() -> &'static str {
    env!("CARGO_BIN_EXE_huewheel")
}

/// Creates a Command whose configuration lives in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(huewheel_bin());
    cmd.env("HUEWHEEL_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh, empty configuration directory.
pub fn run_isolated(args: &[&str]) -> (Output, TempDir) {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    let output = isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command");
    (output, config_dir)
}

/// Stdout as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}). stdout: {} stderr: {}",
            stdout(output),
            stderr(output)
        )
    })
}

/// Whether `s` is a 7-character lowercase hex color
pub fn is_lower_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
