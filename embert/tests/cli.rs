//! CLI Interface E2E Tests
//!
//! These tests run the embert binary against fixture files and temporary
//! projects, checking exit status and output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Get the path to the embert binary
fn embert_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_embert"))
}

/// Build a command isolated from any user configuration.
fn embert(home: &TempDir) -> Command {
    let mut cmd = Command::new(embert_bin());
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("EMBERT_CONFIG")
        .env_remove("EMBERT_VERBOSE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("lex"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("embert"));
}

#[test]
fn test_lex_text_output() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .arg("lex")
        .arg(fixture("hello.em"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1\tLet\t\"let\"\n"))
        .stdout(predicate::str::contains("1:11\tFunction\t\"function\""))
        .stdout(predicate::str::contains("5:1\tLineComment\t\" sum two numbers\""))
        .stdout(predicate::str::contains("6:20\tReal\t\"2.5\""))
        .stdout(predicate::str::contains("7:11\tGtEq\t\">=\""))
        .stdout(predicate::str::ends_with("10:0\tEof\t\"\"\n"));
}

#[test]
fn test_lex_reports_illegal_inline() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .arg("lex")
        .arg(fixture("illegal.em"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2:11\tIllegal\t\"#\""))
        .stdout(predicate::str::contains("2:13\tInt\t\"2\""));
}

#[test]
fn test_lex_deny_illegal_fails() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .args(["lex", "--deny-illegal"])
        .arg(fixture("illegal.em"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IllegalCharacter"));
}

#[test]
fn test_lex_json_output() {
    let home = TempDir::new().unwrap();
    let output = embert(&home)
        .args(["lex", "--format", "json"])
        .arg(fixture("illegal.em"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = value[0]["tokens"].as_array().unwrap();
    assert_eq!(tokens[0]["kind"], "let");
    assert_eq!(tokens[0]["line"], 1);
    assert!(tokens.iter().any(|t| t["kind"] == "illegal" && t["text"] == "#"));
    assert_eq!(tokens.last().unwrap()["kind"], "eof");
}

#[test]
fn test_lex_block_comment_markers_and_suppression() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .arg("lex")
        .arg(fixture("comments.em"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1:12\tBlockCommentStart\t\" note\""))
        .stdout(predicate::str::contains("2:13\tBlockCommentEnd\t\"*/\""));

    embert(&home)
        .args(["lex", "--suppress-block-comments"])
        .arg(fixture("comments.em"))
        .assert()
        .success()
        .stdout(predicate::str::contains("BlockComment").not())
        .stdout(predicate::str::contains("3:1\tLet\t\"let\""));
}

#[test]
fn test_config_file_sets_lexer_mode() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("custom.toml");
    std::fs::write(&config_path, "[lexer]\nblock_comments = \"suppress\"\n").unwrap();

    embert(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("lex")
        .arg(fixture("comments.em"))
        .assert()
        .success()
        .stdout(predicate::str::contains("BlockComment").not());
}

#[test]
fn test_config_in_current_dir_is_used() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("embert.toml"), "[output]\nformat = \"json\"\n").unwrap();

    embert(&home)
        .arg("lex")
        .arg(fixture("hello.em"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .args(["--config", "does-not-exist.toml", "lex"])
        .arg(fixture("hello.em"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_check_clean_file() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .args(["check", "--jobs", "2"])
        .arg(fixture("hello.em"))
        .arg(fixture("comments.em"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_reports_diagnostics() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .arg("check")
        .arg(fixture("hello.em"))
        .arg(fixture("illegal.em"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E1001]: unexpected character '#'"))
        .stderr(predicate::str::contains("illegal.em:2:11"))
        .stderr(predicate::str::contains("2 | let y = x # 2;"))
        .stderr(predicate::str::contains("1 file(s) failed"));
}

#[test]
fn test_check_json_report() {
    let home = TempDir::new().unwrap();
    let output = embert(&home)
        .args(["check", "--format", "json"])
        .arg(fixture("illegal.em"))
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let diagnostic = &value[0]["diagnostics"][0];
    assert_eq!(diagnostic["code"], "E1001");
    assert_eq!(diagnostic["level"], "error");
    assert_eq!(diagnostic["span"]["line"], 2);
    assert_eq!(diagnostic["span"]["column"], 11);
}

#[test]
fn test_check_missing_file() {
    let home = TempDir::new().unwrap();
    embert(&home)
        .args(["check", "nope.em"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_init_then_check() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("project");

    embert(&home)
        .args(["init", "--path"])
        .arg(&project)
        .assert()
        .success();
    assert!(project.join("embert.toml").exists());
    assert!(project.join("main.em").exists());

    embert(&home)
        .args(["init", "--path"])
        .arg(&project)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    embert(&home)
        .args(["init", "--force", "--path"])
        .arg(&project)
        .assert()
        .success();

    embert(&home)
        .arg("check")
        .arg(project.join("main.em"))
        .assert()
        .success();
}
