// maskform/tests/cli_integration_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn maskform() -> Command {
    Command::cargo_bin("maskform").expect("binary should build")
}

#[test]
fn no_arguments_prints_help_and_fails() {
    maskform().assert().failure();
}

#[test]
fn validate_accepts_a_leap_day() {
    maskform()
        .args(["validate", "--kind", "date", "2024-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("valid"));
}

#[test]
fn validate_rejects_a_calendar_impossibility() {
    maskform()
        .args(["validate", "--kind", "date", "20230230"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("invalid"));
}

#[test]
fn validate_emits_json_when_asked() {
    maskform()
        .args(["validate", "--kind", "cell-phone", "--json", "010-1234-5678"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\":true"));
}

#[test]
fn validate_streams_stdin_lines() {
    maskform()
        .args(["validate", "--kind", "email"])
        .write_stdin("test@example.com\nnot-an-email\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("valid\ttest@example.com"))
        .stdout(predicate::str::contains("invalid\tnot-an-email"));
}

#[test]
fn format_groups_thousands() {
    maskform()
        .args(["format", "--kind", "thousands", "1234567"])
        .assert()
        .success()
        .stdout("1,234,567\n");
}

#[test]
fn format_phone_live_handles_partial_input() {
    maskform()
        .args(["format", "--kind", "phone-live", "010123"])
        .assert()
        .success()
        .stdout("010-123\n");
}

#[test]
fn mask_phone_from_stdin() {
    maskform()
        .args(["mask", "--category", "phone"])
        .write_stdin("010-1234-5678\n")
        .assert()
        .success()
        .stdout("010-****-5678\n");
}

#[test]
fn mask_name_value_argument() {
    maskform()
        .args(["mask", "--category", "name", "갓댐희"])
        .assert()
        .success()
        .stdout("갓*희\n");
}

#[test]
fn mask_with_default_policy_redacts_json_records() {
    maskform()
        .args(["mask", "--policy", "default"])
        .write_stdin(r#"{"name":"갓댐희","email":"abcdefg12345@naver.com","age":29}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("갓*희"))
        .stdout(predicate::str::contains("ab**********@naver.com"))
        .stdout(predicate::str::contains("29"));
}

#[test]
fn mask_with_policy_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
name: custom
version: "1.0"
rules:
  - field: contact
    category: email_full
"#,
    )
    .unwrap();

    maskform()
        .args(["mask", "--policy-file"])
        .arg(file.path())
        .write_stdin(r#"{"contact":"abcdefg12345@naver.com"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("abcd********@******"));
}

#[test]
fn mask_policy_mode_rejects_non_json_input() {
    maskform()
        .args(["mask", "--policy", "default"])
        .write_stdin("plain text\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON record"));
}

#[test]
fn mask_requires_a_category_or_policy() {
    maskform()
        .args(["mask", "010-1234-5678"])
        .assert()
        .failure();
}

#[test]
fn quiet_flag_suppresses_diagnostics() {
    maskform()
        .args(["--quiet", "validate", "--kind", "date", ""])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
