//! CLI integration tests using assert_cmd to exercise the actual binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from any project or user config on the host.
fn lexguard(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lexguard").unwrap();
    cmd.current_dir(home.path()).env("HOME", home.path());
    cmd
}

// ---------------------------------------------------------------------------
// Classify subcommand
// ---------------------------------------------------------------------------

#[test]
fn cli_classify_allow() {
    let tmp = TempDir::new().unwrap();
    lexguard(&tmp)
        .args(["classify", "have a nice day"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("allow"));
}

#[test]
fn cli_classify_mask_prints_masked_text() {
    let tmp = TempDir::new().unwrap();
    lexguard(&tmp)
        .args(["classify", "what an 1d10t"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mask"))
        .stdout(predicate::str::contains("matched: idiot"))
        .stdout(predicate::str::contains("masked: what an *****"));
}

#[test]
fn cli_classify_block_exits_2() {
    let tmp = TempDir::new().unwrap();
    lexguard(&tmp)
        .args(["classify", "k y s"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("block"));
}

#[test]
fn cli_classify_reads_stdin() {
    let tmp = TempDir::new().unwrap();
    lexguard(&tmp)
        .arg("classify")
        .write_stdin("moron\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("masked: *****"));
}

#[test]
fn cli_classify_json() {
    let tmp = TempDir::new().unwrap();
    let output = lexguard(&tmp)
        .args(["--json", "classify", "moron"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["decision"], "mask");
    assert_eq!(value["maskedText"], "*****");
}

// ---------------------------------------------------------------------------
// Detect / validate subcommands
// ---------------------------------------------------------------------------

#[test]
fn cli_detect_prints_code() {
    let tmp = TempDir::new().unwrap();
    lexguard(&tmp)
        .args(["detect", "Łódź"])
        .assert()
        .success()
        .stdout("pl\n");
}

#[test]
fn cli_validate_ok() {
    let tmp = TempDir::new().unwrap();
    lexguard(&tmp)
        .args(["validate", "민수_99"])
        .assert()
        .success()
        .stdout("ok ko\n");
}

#[test]
fn cli_validate_failure_exits_1() {
    let tmp = TempDir::new().unwrap();
    lexguard(&tmp)
        .args(["validate", "12345"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no_numeric_only"));
}

// ---------------------------------------------------------------------------
// Scan subcommand
// ---------------------------------------------------------------------------

#[test]
fn cli_scan_reports_flagged_lines() {
    let tmp = TempDir::new().unwrap();
    let docs = tmp.path().join("docs");
    std::fs::create_dir_all(&docs).unwrap();
    std::fs::write(docs.join("notes.txt"), "hello\nwhat a moron\nyou retard\n").unwrap();

    lexguard(&tmp)
        .args(["scan", "docs"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("notes.txt:2: mask"))
        .stdout(predicate::str::contains("notes.txt:3: block"))
        .stderr(predicate::str::contains("1 blocked line(s)"));
}

#[test]
fn cli_scan_clean_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("ok.txt"), "nothing to see here\n").unwrap();

    lexguard(&tmp)
        .args(["scan", "ok.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("scan clean"));
}

#[test]
fn cli_scan_missing_path() {
    let tmp = TempDir::new().unwrap();
    lexguard(&tmp)
        .args(["scan", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path not found"));
}

// ---------------------------------------------------------------------------
// Config and lexicon
// ---------------------------------------------------------------------------

#[test]
fn cli_project_config_adds_custom_words() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join(".lexguard");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.yml"), "lexicon:\n  custom_words: [broccoli]\n").unwrap();

    lexguard(&tmp)
        .args(["classify", "broccoli again"])
        .assert()
        .success()
        .stdout(predicate::str::contains("masked: ******** again"));
}

#[test]
fn cli_explicit_config_flag() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("custom.yml");
    std::fs::write(&path, "masking:\n  placeholder: \"#\"\n").unwrap();

    lexguard(&tmp)
        .args(["--config", path.to_str().unwrap(), "classify", "moron"])
        .assert()
        .success()
        .stdout(predicate::str::contains("masked: #####"));
}

#[test]
fn cli_malformed_config_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.yml");
    std::fs::write(&path, "lexicon: [unclosed\n").unwrap();

    lexguard(&tmp)
        .args(["--config", path.to_str().unwrap(), "lexicon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn cli_lexicon_prints_fingerprint() {
    let tmp = TempDir::new().unwrap();
    lexguard(&tmp)
        .arg("lexicon")
        .assert()
        .success()
        .stdout(predicate::str::contains("block terms:"))
        .stdout(predicate::str::contains("fingerprint:"));
}
