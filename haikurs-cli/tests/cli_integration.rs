//! Integration tests for the haikurs CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn haikurs() -> Command {
    Command::cargo_bin("haikurs").unwrap()
}

#[test]
fn test_find_text_output() {
    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pond.txt"));

    let expected = "An old silent pond\nsees a frog jump into it\nwith a splash of sound.\n";
    cmd.assert().success().stdout(expected);
}

#[test]
fn test_find_json_output() {
    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pond.txt"))
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("["))
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("\"sourceSentence\""))
        .stdout(predicate::str::contains("\"fingerprint\""));
}

#[test]
fn test_find_markdown_output() {
    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pond.txt"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("### 1. "))
        .stdout(predicate::str::contains("> An old silent pond"))
        .stdout(predicate::str::contains("*Total haiku: 1*"));
}

#[test]
fn test_sensitive_haiku_is_withheld() {
    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("murder.txt"));

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_explain_reports_rejections() {
    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("--explain")
        .arg("-i")
        .arg(fixture_path("murder.txt"))
        .arg("-i")
        .arg(fixture_path("looting.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("rejected (sensitive term)"))
        .stderr(predicate::str::contains(
            "skipped article (sensitive tag 'Looting')",
        ));
}

#[test]
fn test_no_moderation_prints_everything() {
    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("--no-moderation")
        .arg("-i")
        .arg(fixture_path("murder.txt"))
        .arg("-i")
        .arg(fixture_path("looting.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sees a frog murdered by it"))
        .stdout(predicate::str::contains("sees a frog jump into it"));
}

#[test]
fn test_glob_pattern_skips_sidecars() {
    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("-f")
        .arg("json")
        .arg("-t")
        .arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pond.txt"))
        .stdout(predicate::str::contains("looting.txt").not())
        .stdout(predicate::str::contains("murder.txt").not());
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("haiku.txt");

    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pond.txt"))
        .arg("-o")
        .arg(&output);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("An old silent pond\n"));
}

#[test]
fn test_config_file_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("haikurs.toml");
    fs::write(&config, "[output]\ndefault_format = \"markdown\"\n").unwrap();

    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pond.txt"))
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("*Total haiku: 1*"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("haikurs.toml");
    fs::write(&config, "[resources]\nmax_depth = 0\n").unwrap();

    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pond.txt"))
        .arg("--config")
        .arg(&config);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_lexicon_dir() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = haikurs();
    cmd.arg("find")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pond.txt"))
        .arg("--lexicons")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to initialize haiku pipeline",
        ));
}

#[test]
fn test_missing_input_file() {
    let mut cmd = haikurs();
    cmd.arg("find").arg("-q").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.txt"));
}

#[test]
fn test_terms_command() {
    let mut cmd = haikurs();
    cmd.arg("terms")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("plain.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  4-year-old\t3\n"))
        .stdout(predicate::str::contains("  1,435\t10\n"));
}

#[test]
fn test_overrides_command() {
    let temp_dir = TempDir::new().unwrap();
    let overrides = temp_dir.path().join("overrides.csv");
    fs::write(&overrides, "fire,1\ninspired,3\n").unwrap();

    let mut cmd = haikurs();
    cmd.arg("overrides").arg("--overrides").arg(&overrides);

    cmd.assert()
        .success()
        .stdout("fire,1\n")
        .stderr(predicate::str::contains("1 of 2 override(s) are redundant"));
}

#[test]
fn test_help_and_version() {
    haikurs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("terms"))
        .stdout(predicate::str::contains("overrides"));

    haikurs()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
