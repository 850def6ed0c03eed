//! Pipeline tests: context documents on disk through `generate_report`

use plan2html::utils::default_report_filename;
use plan2html::{generate_report, ReportOptions, Severity};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_context(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const CLEAN_CONTEXT: &str = r#"{
    // Produced by the comparison job
    "change-info": "Changes detected",
    "day-date": "2024-03-15",
    "lesson-pairs": [
        {
            "lesson-1": {
                "time": "10:00",
                "name": "History",
                "teacher": "Mr. Carr",
                "classroom": "204",
                "is-canceled": true
            },
            "lesson-2": {
                "time": "10:00",
                "name": "Biology",
                "teacher": "Ms. Novak",
                "classroom": "6"
            }
        }
    ]
}"#;

#[test]
fn pipeline_renders_a_document_from_disk() {
    let dir = TempDir::new().unwrap();
    let input = write_context(&dir, "context.json", CLEAN_CONTEXT);

    let outcome = generate_report(&input, ReportOptions::default()).unwrap();

    assert!(outcome.findings.is_empty());
    assert!(outcome
        .html
        .contains("Changes detected for Friday, March 15, 2024"));
    assert!(outcome.html.contains("Biology"));
    assert_eq!(outcome.html.matches("(canceled)").count(), 1);
    assert_eq!(
        default_report_filename(&outcome.context),
        "changes-detected-2024-03-15.html"
    );
}

#[test]
fn strict_mode_rejects_major_findings() {
    let dir = TempDir::new().unwrap();
    let input = write_context(
        &dir,
        "context.json",
        r#"{
            "change-info": "Changes detected",
            "day-date": "2024-03-15",
            "lesson-pairs": [
                { "lesson-1": { "time": "09:00", "name": "", "teacher": "Ms. Lee", "classroom": "101" } }
            ]
        }"#,
    );

    let err = generate_report(&input, ReportOptions { strict: true }).unwrap_err();
    assert!(err.to_string().contains("strict mode"));
}

#[test]
fn non_strict_mode_renders_and_reports_findings() {
    let dir = TempDir::new().unwrap();
    let input = write_context(
        &dir,
        "context.json",
        r#"{
            "change-info": "Changes detected",
            "day-date": "2024-03-15",
            "lesson-pairs": [
                { "lesson-2": { "time": "whenever", "name": "Math", "teacher": "Ms. Lee", "classroom": "101" } }
            ]
        }"#,
    );

    let outcome = generate_report(&input, ReportOptions::default()).unwrap();

    assert_eq!(outcome.findings.len(), 1);
    assert_eq!(outcome.findings[0].severity, Severity::Minor);
    assert!(outcome.html.contains("whenever"));
}

#[test]
fn missing_input_file_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let err = generate_report(
        &dir.path().join("does-not-exist.json"),
        ReportOptions::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("Failed to read context file"));
}

#[test]
fn malformed_date_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_context(
        &dir,
        "context.json",
        r#"{ "change-info": "Changes detected", "day-date": "Friday" }"#,
    );

    let err = generate_report(&input, ReportOptions::default()).unwrap_err();
    assert!(err.to_string().contains("malformed date: Friday"));
}
