//! Integration tests for CLI surface behavior.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_options() {
    project_report!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--exclude"));
}

#[test]
fn version_flag() {
    project_report!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("project-report"));
}

#[test]
fn unknown_format_is_usage_error() {
    let fixture = TestFixture::new();

    project_report!()
        .current_dir(fixture.path())
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn color_always_bolds_header_but_not_report_file() {
    let fixture = TestFixture::new();
    fixture.create_file("a.js", "");

    project_report!()
        .current_dir(fixture.path())
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1mTotal files processed: 1"));

    assert!(!fixture.report().contains('\x1b'));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let fixture = TestFixture::new();
    fixture.create_file("a.js", "");

    project_report!()
        .current_dir(fixture.path())
        .args(["-v", "--color", "never"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("scan finished"))
        .stdout(predicate::str::contains("scan finished").not());
}
