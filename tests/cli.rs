//! End-to-end runs of the nested-settings binary.

use serde_json::Value;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nested-settings"))
        .args(args)
        .output()
        .expect("Failed to run nested-settings")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn prints_default_bundle() {
    let output = run(&["--n-dims", "4"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    assert_eq!(json["nDims"], 4);
    assert_eq!(json["nlive"], 100);
    assert_eq!(json["num_repeats"], 20);
    assert_eq!(json["base_dir"], "chains");
}

#[test]
fn set_pairs_override_file_values() {
    let dir = TempDir::new().unwrap();
    let overrides = dir.path().join("overrides.json");
    fs::write(&overrides, r#"{"nlive": 300, "file_root": "from_file"}"#).unwrap();

    let output = run(&[
        "--n-dims",
        "5",
        "--overrides",
        overrides.to_str().unwrap(),
        "--set",
        "nlive=500",
        "--set",
        "grade_dims=[3,2]",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    assert_eq!(json["nlive"], 500);
    assert_eq!(json["update_files"], 500);
    assert_eq!(json["file_root"], "from_file");
    assert_eq!(json["grade_frac"], serde_json::json!([1.0, 1.0]));
}

#[test]
fn writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("settings.json");

    let output = run(&[
        "--n-dims",
        "2",
        "--set",
        "base_dir=out",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["base_dir"], "out");
    assert!(json["cluster_dir"].as_str().unwrap().ends_with("clusters"));
}

#[test]
fn unknown_option_fails() {
    let output = run(&["--n-dims", "3", "--set", "foo=1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized option"), "{stderr}");
    assert!(stderr.contains("foo"), "{stderr}");
}

#[test]
fn bad_grade_sum_fails() {
    let output = run(&["--n-dims", "5", "--set", "grade_dims=[2,2]"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("do not sum"), "{stderr}");
}

#[test]
fn numeric_looking_file_root_stays_text() {
    let output = run(&["--n-dims", "2", "--set", "file_root=2024"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_json(&output)["file_root"], "2024");
}

#[test]
fn oversized_dimensionality_fails_cleanly() {
    let n_dims = (usize::MAX / 2).to_string();
    let output = run(&["--n-dims", &n_dims]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too large"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}
