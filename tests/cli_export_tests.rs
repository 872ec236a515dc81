//! End-to-end tests for `huewheel export`.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_export_markdown_to_file() {
    let config_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let path = out_dir.path().join("palette.md");
    let path_str = path.to_string_lossy().to_string();

    let output = isolated_command(&["export", "#6366f1", "-o", &path_str], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Exported palette to:"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Color Palette"));
    assert!(content.contains("`#6366f1`"));
    for name in ["Monochromatic", "Complementary", "Analogous", "Triadic", "Tetradic"] {
        assert!(content.contains(&format!("## {name}")), "missing {name}");
    }
}

#[test]
fn test_export_default_file_name() {
    let config_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();

    let output = isolated_command(&["export", "#ff0000", "--format", "css"], config_dir.path())
        .current_dir(work_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let files: Vec<String> = fs::read_dir(work_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("palette_ff0000_"), "{files:?}");
    assert!(files[0].ends_with(".css"));
}

#[test]
fn test_export_json_to_stdout() {
    let (output, _dir) = run_isolated(&["export", "#6366f1", "-f", "json", "-o", "-"]);

    assert_eq!(output.status.code(), Some(0));
    let json = stdout_json(&output);
    assert_eq!(json["base"], "#6366f1");
    assert_eq!(json["harmonies"].as_array().unwrap().len(), 5);
    assert_eq!(json["harmonies"][0]["colors"].as_array().unwrap().len(), 5);
}

#[test]
fn test_export_css_contains_theme_tokens() {
    let (output, _dir) = run_isolated(&["export", "#6366f1", "-f", "css", "-o", "-"]);
    let css = stdout(&output);

    assert!(css.starts_with(":root {"));
    assert!(css.contains("--palette-base: #6366f1;"));
    assert!(css.contains("--triadic-1:"));
    assert!(css.contains("--dynamic-primary:"));
    assert!(css.contains("--dynamic-primary-muted:"));
    assert!(css.contains("--dynamic-primary-dark:"));
}

#[test]
fn test_export_gpl_compact() {
    let (output, _dir) = run_isolated(&["export", "red", "-f", "gpl", "--compact", "-o", "-"]);
    let gpl = stdout(&output);

    assert!(gpl.starts_with("GIMP Palette\n"));
    assert!(gpl.contains("255   0   0\tBase"));
    // 3 + 2 + 3 + 3 + 4 harmony rows plus the base row
    let rows = gpl.lines().filter(|l| l.contains('\t')).count();
    assert_eq!(rows, 16);
}

#[test]
fn test_export_invalid_format() {
    let (output, _dir) = run_isolated(&["export", "#6366f1", "-f", "pdf", "-o", "-"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error:"));
}

#[test]
fn test_export_unwritable_path_is_io_error() {
    let out_dir = TempDir::new().unwrap();
    let path = out_dir.path().join("missing").join("palette.md");
    let path_str = path.to_string_lossy().to_string();

    let (output, _dir) = run_isolated(&["export", "#6366f1", "-o", &path_str]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to write output file"));
}
