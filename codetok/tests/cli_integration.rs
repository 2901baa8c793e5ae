//! Integration tests for codetok CLI

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_codetok(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "codetok", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn seed_project(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/main.py"), "# entry point\nprint('hi')\n\n").unwrap();
    fs::write(root.join("src/lib.rs"), "// module\nfn f() {}\n").unwrap();
    fs::write(root.join("README.md"), "# Project\n\nSome words.\n").unwrap();
    fs::write(root.join("settings.yaml"), "key: value\n").unwrap();
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_codetok(&["--help"]);

    assert!(success);
    assert!(stdout.contains("codetok"));
    assert!(stdout.contains("--path"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--json-only"));
    assert!(stdout.contains("--include-extensions"));
    assert!(stdout.contains("--exclude-patterns"));
    assert!(stdout.contains("--max-workers"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_codetok(&["--version"]);

    assert!(success);
    assert!(stdout.contains("codetok"));
}

#[test]
fn test_console_summary_and_report() {
    let dir = tempfile::tempdir().unwrap();
    seed_project(dir.path());
    let report_path = dir.path().join("report.json");

    let (stdout, _, success) = run_codetok(&[
        "--path",
        dir.path().to_str().unwrap(),
        "--output",
        report_path.to_str().unwrap(),
    ]);

    assert!(success);
    assert!(stdout.contains("TOKEN ANALYSIS REPORT"));
    assert!(stdout.contains("DETAILED CATEGORY ANALYSIS"));
    assert!(stdout.contains("Overall Summary"));
    assert!(stdout.contains("Total Files"));
    assert!(stdout.contains("Report saved to"));
    assert!(report_path.exists());
}

#[test]
fn test_json_only_suppresses_summary() {
    let dir = tempfile::tempdir().unwrap();
    seed_project(dir.path());
    let report_path = dir.path().join("report.json");

    let (stdout, _, success) = run_codetok(&[
        "--path",
        dir.path().to_str().unwrap(),
        "--output",
        report_path.to_str().unwrap(),
        "--json-only",
    ]);

    assert!(success);
    assert!(!stdout.contains("TOKEN ANALYSIS REPORT"));
    assert!(report_path.exists());
}

#[test]
fn test_report_structure() {
    let dir = tempfile::tempdir().unwrap();
    seed_project(dir.path());
    let report_path = dir.path().join("report.json");

    let (_, _, success) = run_codetok(&[
        "--path",
        dir.path().to_str().unwrap(),
        "--output",
        report_path.to_str().unwrap(),
        "--json-only",
    ]);
    assert!(success);

    let text = fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&text).expect("Invalid JSON report");

    assert_eq!(report["analysis_info"]["tokenizer"], "cl100k_base");
    assert_eq!(report["summary"]["total_files"], 4);
    for key in ["code", "documentation", "config", "other"] {
        assert!(report["categories"][key].is_object(), "missing {key}");
    }
    assert_eq!(report["categories"]["code"]["total_files"], 2);
    assert_eq!(report["categories"]["documentation"]["total_files"], 1);
    assert_eq!(report["categories"]["config"]["total_files"], 1);

    let breakdown = &report["categories"]["code"]["extension_breakdown"];
    assert_eq!(breakdown[".py"]["name"], "Python");
    assert_eq!(breakdown[".rs"]["files"], 1);
}

#[test]
fn test_include_extensions_filter() {
    let dir = tempfile::tempdir().unwrap();
    seed_project(dir.path());
    let report_path = dir.path().join("report.json");

    let (_, _, success) = run_codetok(&[
        "--path",
        dir.path().to_str().unwrap(),
        "--output",
        report_path.to_str().unwrap(),
        "--json-only",
        "--include-extensions",
        ".py",
    ]);
    assert!(success);

    let text = fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["summary"]["total_files"], 1);
    assert_eq!(report["categories"]["code"]["total_files"], 1);
}

#[test]
fn test_invalid_path() {
    let (_, stderr, success) = run_codetok(&["--path", "/nonexistent/path"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}
