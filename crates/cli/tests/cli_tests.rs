//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("glean")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_pdf_file() {
    cmd()
        .args(["pdf", &get_fixture_path("hello.pdf")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello"))
        .stdout(predicate::str::contains("Word Count:"))
        .stdout(predicate::str::contains("Interpretation:"));
}

#[test]
fn test_cli_pdf_stdin() {
    let pdf = std::fs::read(get_fixture_path("hello.pdf")).unwrap();
    cmd()
        .args(["pdf", "-"])
        .write_stdin(pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello"));
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["pdf", &get_fixture_path("hello.pdf"), "-f", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], "hello.pdf");
    assert!(json["analysis"]["word_count"].as_u64().unwrap() > 0);
    assert!(json["analysis"]["sentiment"]["polarity"].is_number());
}

#[test]
fn test_cli_content_only() {
    cmd()
        .args(["--content-only", "pdf", &get_fixture_path("hello.pdf")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello"))
        .stdout(predicate::str::contains("Content Analysis").not());
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.txt");

    cmd()
        .args(["pdf", &get_fixture_path("hello.pdf"), "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Output written to"));

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.contains("Sentiment:"));
}

#[test]
fn test_cli_corrupt_pdf_fails() {
    cmd()
        .args(["pdf", &get_fixture_path("corrupt.pdf")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to extract content from corrupt.pdf"));
}

#[test]
fn test_cli_corrupt_pdf_inline_errors() {
    cmd()
        .args(["--inline-errors", "pdf", &get_fixture_path("corrupt.pdf")])
        .assert()
        .success()
        .stdout(predicate::str::contains("cross-reference"))
        .stdout(predicate::str::contains("Failed to parse PDF").not())
        .stdout(predicate::str::contains("Word Count:"))
        .stderr(predicate::str::contains("Extraction failed"));
}

#[test]
fn test_cli_missing_file() {
    cmd()
        .args(["pdf", "nonexistent.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_invalid_url() {
    cmd()
        .args(["url", "not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}

#[test]
fn test_cli_invalid_url_inline_errors() {
    cmd()
        .args(["url", "not-a-url", "--inline-errors", "--headings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid URL"))
        .stdout(predicate::str::contains("Sentiment: Neutral"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "yaml", "pdf", &get_fixture_path("hello.pdf")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", "pdf", &get_fixture_path("hello.pdf")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Glean"))
        .stderr(predicate::str::contains("Reading PDF"));
}

#[test]
fn test_cli_requires_mode() {
    cmd().assert().failure();
}
