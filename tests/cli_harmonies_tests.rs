//! End-to-end tests for `huewheel harmonies` and `huewheel random`.

mod fixtures;
use fixtures::*;

const NAMES: [&str; 5] = [
    "Monochromatic",
    "Complementary",
    "Analogous",
    "Triadic",
    "Tetradic",
];

// ============================================================================
// Harmonies Command Tests
// ============================================================================

#[test]
fn test_harmonies_json_structure() {
    let (output, _dir) = run_isolated(&["harmonies", "#6366f1", "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        stderr(&output)
    );

    let json = stdout_json(&output);
    assert_eq!(json["base"], "#6366f1");
    assert_eq!(json["fallback"], false);
    assert_eq!(json["size"], "verbose");

    let harmonies = json["harmonies"].as_array().expect("harmonies array");
    let names: Vec<&str> = harmonies
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, NAMES);

    for harmony in harmonies {
        let colors = harmony["colors"].as_array().unwrap();
        assert_eq!(colors.len(), 5, "{}", harmony["name"]);
        assert!(colors.iter().all(|c| is_lower_hex(c.as_str().unwrap())));
        assert!(harmony["description"].as_str().unwrap().contains("color"));
    }
}

#[test]
fn test_harmonies_place_base_at_fixed_positions() {
    let (output, _dir) = run_isolated(&["harmonies", "#6366F1", "--json"]);
    let json = stdout_json(&output);

    // Input case does not matter
    assert_eq!(json["base"], "#6366f1");
    assert_eq!(json["harmonies"][0]["colors"][2], "#6366f1");
    assert_eq!(json["harmonies"][1]["colors"][1], "#6366f1");
    assert_eq!(json["harmonies"][2]["colors"][2], "#6366f1");
    assert_eq!(json["harmonies"][3]["colors"][1], "#6366f1");
    assert_eq!(json["harmonies"][4]["colors"][0], "#6366f1");
}

#[test]
fn test_harmonies_invalid_color_falls_back() {
    let (output, _dir) = run_isolated(&["harmonies", "not-a-color", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Warning: 'not-a-color' is not a valid color"));

    let json = stdout_json(&output);
    assert_eq!(json["base"], "#6366f1");
    assert_eq!(json["fallback"], true);

    let (expected, _dir) = run_isolated(&["harmonies", "#6366f1", "--json"]);
    assert_eq!(
        json["harmonies"],
        stdout_json(&expected)["harmonies"],
        "fallback output must match the default base"
    );
}

#[test]
fn test_harmonies_compact_sizes() {
    let (output, _dir) = run_isolated(&["harmonies", "#ff0000", "--compact", "--json"]);
    let json = stdout_json(&output);

    assert_eq!(json["size"], "compact");
    let lengths: Vec<usize> = json["harmonies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["colors"].as_array().unwrap().len())
        .collect();
    assert_eq!(lengths, [3, 2, 3, 3, 4]);
}

#[test]
fn test_harmonies_text_output() {
    let (output, _dir) = run_isolated(&["harmonies", "#6366f1"]);
    let text = stdout(&output);

    assert!(text.starts_with("Base: #6366f1\n"));
    for name in NAMES {
        assert!(text.contains(&format!("\n{name} - ")), "missing {name}");
    }
}

#[test]
fn test_harmonies_uppercase() {
    let (output, _dir) = run_isolated(&["harmonies", "rgb(99, 102, 241)", "--uppercase", "--json"]);
    let json = stdout_json(&output);
    assert_eq!(json["base"], "#6366F1");
}

#[test]
fn test_harmonies_deterministic() {
    let (first, _a) = run_isolated(&["harmonies", "#4682b4", "--json"]);
    let (second, _b) = run_isolated(&["harmonies", "steelblue", "--json"]);
    assert_eq!(stdout(&first), stdout(&second));
}

// ============================================================================
// Random Command Tests
// ============================================================================

#[test]
fn test_random_prints_hex() {
    let (output, _dir) = run_isolated(&["random"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(is_lower_hex(stdout(&output).trim()));
}

#[test]
fn test_random_json_includes_harmonies() {
    let (output, _dir) = run_isolated(&["random", "--json"]);
    let json = stdout_json(&output);

    assert!(is_lower_hex(json["base"].as_str().unwrap()));
    assert_eq!(json["harmonies"].as_array().unwrap().len(), 5);
}
