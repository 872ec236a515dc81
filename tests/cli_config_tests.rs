//! End-to-end tests for `huewheel config` commands.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let (output, _dir) = run_isolated(&["config", "show"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Default Base: #6366f1"));
    assert!(text.contains("Harmony Size: verbose"));
    assert!(text.contains("Size: 200px"));
}

#[test]
fn test_config_show_json_schema() {
    let (output, dir) = run_isolated(&["config", "show", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);

    assert_eq!(json["palette"]["default_base"], "#6366f1");
    assert_eq!(json["palette"]["size"], "verbose");
    assert_eq!(json["palette"]["hex_case"], "lower");
    assert_eq!(json["wheel"]["size"], 200);
    assert_eq!(json["wheel"]["margin"], 10);
    assert_eq!(json["ui"]["theme"], "auto");
    assert!(json["ui"]["show_help_on_startup"].is_boolean());

    let config_file = json["config_file"].as_str().unwrap();
    assert!(config_file.starts_with(&*dir.path().to_string_lossy()));
    assert!(config_file.ends_with("config.toml"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists() {
    let dir = TempDir::new().unwrap();

    let output = isolated_command(
        &[
            "config", "set", "--base", "#ff8800", "--size", "compact", "--case", "upper",
            "--theme", "dark", "--wheel-size", "300",
        ],
        dir.path(),
    )
    .output()
    .unwrap();
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Configuration updated successfully."));

    let saved = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("compact"));

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["palette"]["default_base"], "#FF8800");
    assert_eq!(json["palette"]["size"], "compact");
    assert_eq!(json["palette"]["hex_case"], "upper");
    assert_eq!(json["ui"]["theme"], "dark");
    assert_eq!(json["wheel"]["size"], 300);
}

#[test]
fn test_config_drives_other_commands() {
    let dir = TempDir::new().unwrap();
    isolated_command(&["config", "set", "--size", "compact", "--case", "upper"], dir.path())
        .output()
        .unwrap();

    let output = isolated_command(&["harmonies", "#6366f1", "--json"], dir.path())
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["size"], "compact");
    assert_eq!(json["base"], "#6366F1");

    isolated_command(&["config", "set", "--wheel-size", "100", "--wheel-margin", "0"], dir.path())
        .output()
        .unwrap();
    let output = isolated_command(&["wheel", "locate", "#ff0000"], dir.path())
        .output()
        .unwrap();
    assert_eq!(stdout(&output).trim(), "100.00 50.00");
}

#[test]
fn test_config_set_requires_an_option() {
    let (output, _dir) = run_isolated(&["config", "set"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_rejects_invalid_values() {
    for args in [
        ["config", "set", "--base", "not-a-color"],
        ["config", "set", "--size", "huge"],
        ["config", "set", "--case", "mixed"],
        ["config", "set", "--theme", "sepia"],
        ["config", "set", "--wheel-size", "5"],
    ] {
        let dir = TempDir::new().unwrap();
        let output = isolated_command(&args, dir.path()).output().unwrap();

        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(
            !dir.path().join("config.toml").exists(),
            "{args:?} must not write a config file"
        );
    }
}

#[test]
fn test_config_partial_file_is_kept_by_set() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[palette]\ndefault_base = \"#ff0000\"\n\n[ui]\ntheme_mode = \"Dark\"\n",
    )
    .unwrap();

    let output = isolated_command(&["config", "set", "--case", "upper"], dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let output = isolated_command(&["config", "show", "--json"], dir.path())
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["palette"]["default_base"], "#FF0000");
    assert_eq!(json["palette"]["hex_case"], "upper");
    assert_eq!(json["ui"]["theme"], "dark");
}

#[test]
fn test_config_partial_wheel_table_drives_locate() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[wheel]\nsize = 400\n").unwrap();

    let output = isolated_command(&["wheel", "locate", "#ff0000"], dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "390.00 200.00");
}

#[test]
fn test_config_set_refuses_to_overwrite_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "palette = [[[").unwrap();

    let output = isolated_command(&["config", "set", "--case", "upper"], dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "palette = [[[");
}

#[test]
fn test_corrupt_file_warns_and_uses_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "palette = [[[").unwrap();

    let output = isolated_command(&["wheel", "locate", "#ff0000"], dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "190.00 100.00");
    assert!(stderr(&output).contains("using default configuration"));
}

#[test]
fn test_config_show_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "palette = [[[").unwrap();

    let output = isolated_command(&["config", "show"], dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
