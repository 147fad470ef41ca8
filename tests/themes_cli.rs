mod common;

use std::{fs, io::Write};

use common::CliHarness;

#[test]
fn themes_subcommand_lists_the_builtin_registry_in_order() {
    let harness = CliHarness::build();
    let output = harness.stdout(&["themes"]);

    let expected = [
        ("purple", "Purple Dream"),
        ("blue", "Ocean Blue"),
        ("green", "Forest Green"),
        ("red", "Crimson Fire"),
        ("orange", "Sunset Orange"),
    ];

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), expected.len(), "unexpected output: {output}");
    for (line, (key, name)) in lines.iter().zip(expected) {
        assert!(line.starts_with(key), "line {line:?} should start with {key}");
        assert!(line.contains(name), "line {line:?} should contain {name}");
    }
}

#[test]
fn themes_subcommand_includes_swatch_hexes() {
    let harness = CliHarness::build();
    let output = harness.stdout(&["themes"]);
    assert!(output.contains("#9333ea"), "purple primary missing: {output}");
    assert!(output.contains("#3b82f6"), "blue primary missing: {output}");
}

#[test]
fn themes_file_extends_the_listing() {
    let path = std::env::temp_dir().join("folio-tui-cli-themes.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(
        br##"{
        "themes": [{
            "key": "mint",
            "name": "Mint Breeze",
            "primary": "#00c896",
            "secondary": "#0066ff",
            "accent": "#ffd166",
            "background": "#101418",
            "surface": "#1a2026",
            "text": "#ffffff",
            "text_secondary": "#8a949e",
            "gradient": { "start": "#00c896", "end": "#0066ff" },
            "gradient_hover": { "start": "#00a87e", "end": "#0052cc" }
        }]
    }"##,
    )
    .unwrap();

    let harness = CliHarness::build();
    let output = harness.stdout(&["--themes-file", path.to_str().unwrap(), "themes"]);
    let last = output.lines().last().unwrap();
    assert!(last.starts_with("mint"));
    assert!(last.contains("Mint Breeze"));

    fs::remove_file(path).ok();
}

#[test]
fn malformed_themes_file_fails_with_a_theme_error() {
    let path = std::env::temp_dir().join("folio-tui-cli-badthemes.json");
    fs::write(&path, "{ not json").unwrap();

    let harness = CliHarness::build();
    let output = harness.run(&["--themes-file", path.to_str().unwrap(), "themes"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr was: {stderr}");

    fs::remove_file(path).ok();
}
