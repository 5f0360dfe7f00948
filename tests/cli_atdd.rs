#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs inside an isolated directory so no user or project config leaks in.
fn cgpa_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cgpa").expect("binary should compile");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

const SHEET: &str = r#"
scale = "4.0"
target = "3.2"

[[courses]]
name = "Calculus I"
grade = "A"
credits = 3

[[courses]]
name = "World History"
grade = "B"
credits = 3

[[courses]]
name = "Seminar"
credits = 0
"#;

#[test]
fn calc_inline_courses_prints_weighted_average() {
    let dir = TempDir::new().expect("temp dir should be created");
    cgpa_in(&dir)
        .args(["calc", "-c", "Calculus I:A:3", "-c", "World History:B:3"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("## Current CGPA"))
        .stdout(predicate::str::contains("3.50 / 4.0 over 6 credits"));
}

#[test]
fn calc_without_credited_grades_returns_no_result() {
    let dir = TempDir::new().expect("temp dir should be created");
    cgpa_in(&dir)
        .args(["calc", "-c", "Lab::3", "-c", "Biology:A:0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("undefined"))
        .stderr(predicate::str::contains("average is undefined"));
}

#[test]
fn quiet_suppresses_warnings_but_keeps_exit_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    cgpa_in(&dir)
        .args(["-q", "calc", "-c", "Lab::3"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());

    cgpa_in(&dir)
        .args(["--quiet", "predict", "-c", "Calculus:A:3"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());

    cgpa_in(&dir)
        .args(["-q", "calc"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn calc_rejects_inline_course_with_non_numeric_credits() {
    let dir = TempDir::new().expect("temp dir should be created");
    cgpa_in(&dir)
        .args(["calc", "-c", "Intro: Calculus:A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credits must be a non-negative integer"));
}

#[test]
fn calc_reads_sheet_file_as_json() {
    let dir = TempDir::new().expect("temp dir should be created");
    let sheet = dir.path().join("sheet.toml");
    fs::write(&sheet, SHEET).expect("sheet should write");

    let output = cgpa_in(&dir)
        .arg("calc")
        .arg("--sheet")
        .arg(&sheet)
        .args(["--format", "json"])
        .output()
        .expect("command should run");
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["average"], 3.5);
    assert_eq!(value["total_credits"], 6);
    assert_eq!(value["courses"].as_array().map(Vec::len), Some(3));
}

#[test]
fn calc_scale_flag_keeps_entered_grades() {
    let dir = TempDir::new().expect("temp dir should be created");
    cgpa_in(&dir)
        .args(["calc", "-c", "Physics:A-:3", "-c", "Chemistry:B:3", "--scale", "5.0"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("| A- |"))
        .stdout(predicate::str::contains("4.00 / 5.0 over 3 credits"));
}

#[test]
fn calc_missing_sheet_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    cgpa_in(&dir)
        .args(["calc", "--sheet", "nope.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn predict_below_target_exits_with_risk_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    let sheet = dir.path().join("sheet.toml");
    fs::write(&sheet, SHEET).expect("sheet should write");

    cgpa_in(&dir)
        .arg("predict")
        .arg("--sheet")
        .arg(&sheet)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Predicted CGPA: 2.64"))
        .stdout(predicate::str::contains("may be challenging"))
        .stdout(predicate::str::contains(
            "Consider balancing difficult courses across semesters",
        ));
}

#[test]
fn predict_target_flag_overrides_sheet() {
    let dir = TempDir::new().expect("temp dir should be created");
    let sheet = dir.path().join("sheet.toml");
    fs::write(&sheet, SHEET).expect("sheet should write");

    cgpa_in(&dir)
        .arg("predict")
        .arg("--sheet")
        .arg(&sheet)
        .args(["--target", "2.0"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("appears achievable"))
        .stdout(predicate::str::contains("### Recommendations").not());
}

#[test]
fn predict_without_numeric_target_returns_no_result() {
    let dir = TempDir::new().expect("temp dir should be created");
    cgpa_in(&dir)
        .args(["predict", "-c", "Calculus:A:3", "--target", "soon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("prediction unavailable"));
}

#[test]
fn project_config_sets_default_scale_and_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("cgpa.toml"),
        r#"
[defaults]
scale = "7.0"

[output]
format = "json"
"#,
    )
    .expect("config should write");

    cgpa_in(&dir)
        .args(["calc", "-c", "Physics:O:4"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"scale\": \"7.0\""))
        .stdout(predicate::str::contains("\"average\": 7.0"));
}

#[test]
fn invalid_config_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("cgpa.toml"), "[defaults]\ncredits = 40\n")
        .expect("config should write");

    cgpa_in(&dir)
        .args(["calc", "-c", "Physics:A:3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn session_reads_commands_from_stdin() {
    let dir = TempDir::new().expect("temp dir should be created");
    cgpa_in(&dir)
        .arg("session")
        .write_stdin("name 1 Calculus I\ngrade 1 A\nadd\nname 2 History\ngrade 2 B\ncalc\nquit\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("current CGPA: 3.50"));
}
