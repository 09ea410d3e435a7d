//! Integration tests for the lawmd CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lawmd"));
    cmd.env_remove("LAWMD_OUTPUT")
        .env_remove("LAWMD_TITLE")
        .env_remove("LAWMD_SOURCE");
    cmd
}

/// Three form-feed separated pages of statute text with page furniture.
fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("kodeks.txt");
    let text = "KSIĘGA PIERWSZA\nCZĘŚĆ OGÓLNA\n©Kancelaria Sejmu s. 1/3\n2023-10-11\n\
                \u{000C}TYTUŁ I\nPRZEPISY WSTĘPNE\nArt. 1. Kodeks niniejszy reguluje stosunki.\n\
                ©Kancelaria Sejmu s. 2/3\n\
                \u{000C}Art. 2.\n§ 1. Pierwszy.\n§ 2. Drugi.\n";
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("public").join("laws").join("kodeks.md");

    cli()
        .arg("convert")
        .arg(dir.path().join("missing.pdf"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input file does not exist"));

    assert!(!output.exists());
    assert!(!dir.path().join("public").exists());
}

#[test]
fn test_convert_creates_output_directories() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("public").join("laws").join("kodeks_cywilny.md");

    cli()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"))
        .stdout(predicate::str::contains("    article: 2"))
        .stdout(predicate::str::contains("    paragraph: 2"))
        .stdout(predicate::str::contains("division:").not());

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with(
        "---\ntitle: Kodeks Cywilny (Auto-generated)\nsource: ISAP (Kancelaria Sejmu)\n\
         type: law-document\n---\n\n"
    ));
    assert!(content.contains("\n# KSIĘGA PIERWSZA\n"));
    assert!(content.contains("\n## TYTUŁ I\n"));
    assert!(content.contains("**Art. 1.** Kodeks niniejszy reguluje stosunki."));
    assert!(content.contains("\n* § 2. Drugi."));
    assert!(!content.contains("Kancelaria Sejmu s."));
    assert!(!content.contains("2023-10-11"));
}

#[test]
fn test_positional_shorthand() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("out.md");

    cli().arg(&input).arg(&output).assert().success();

    assert!(fs::read_to_string(&output).unwrap().starts_with("---\n"));
}

#[test]
fn test_default_output_in_current_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());
    let work = dir.path().join("work");
    fs::create_dir(&work).unwrap();

    cli().current_dir(&work).arg(&input).assert().success();

    assert!(work.join("kodeks.md").exists());
}

#[test]
fn test_output_from_environment() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("env").join("kodeks.md");

    cli()
        .env("LAWMD_OUTPUT", &output)
        .arg("convert")
        .arg(&input)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn test_front_matter_flags_and_stats() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("kodeks.md");

    cli()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--title", "Kodeks", "--doc-type", "code", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"markers\""))
        .stdout(predicate::str::contains("\"article\": 2"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("---\ntitle: Kodeks\nsource: ISAP (Kancelaria Sejmu)\ntype: code\n---\n\n"));
}

#[test]
fn test_invalid_page_range() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());

    cli()
        .current_dir(dir.path())
        .arg("convert")
        .arg(&input)
        .args(["--pages", "5-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page range"));
}

#[test]
fn test_info() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path());

    cli()
        .arg("info")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pages"))
        .stdout(predicate::str::contains("3"));
}

#[test]
fn test_version() {
    cli()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
