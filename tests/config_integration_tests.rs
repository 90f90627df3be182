//! Integration tests for configuration file handling.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn config_file_changes_extensions_and_output() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[scanner]
extensions = [".ts"]

[report]
output = "ts_report.txt"
"#,
    );
    fixture.create_file("a.ts", "import a from 'a';");
    fixture.create_file("b.js", "function b() {}");

    project_report!()
        .current_dir(fixture.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files processed: 1"));

    assert_eq!(
        fixture.read("ts_report.txt"),
        "a.ts - Lines: 1, Functions: 0, Imports: 1\n"
    );
}

#[test]
fn config_exclude_patterns() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nexclude = [\"dist/**\"]\n");
    fixture.create_file("dist/bundle.js", "function x() {}");
    fixture.create_file("src/main.js", "function y() {}");

    project_report!()
        .current_dir(fixture.path())
        .assert()
        .success();

    assert_eq!(
        fixture.report(),
        "src/main.js - Lines: 1, Functions: 1, Imports: 0\n"
    );
}

#[test]
fn config_gitignore_option() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\ngitignore = true\n");
    fixture.create_file(".gitignore", "build/\n");
    fixture.create_file("build/out.js", "");
    fixture.create_file("app.js", "");

    project_report!()
        .current_dir(fixture.path())
        .assert()
        .success();

    assert_eq!(
        fixture.report(),
        "app.js - Lines: 0, Functions: 0, Imports: 0\n"
    );
}

#[test]
fn no_config_flag_ignores_config_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nextensions = [\".ts\"]\n");
    fixture.create_file("a.js", "");

    project_report!()
        .current_dir(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files processed: 1"));
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_file("settings/report.toml", "[report]\nformat = \"json\"\n");
    fixture.create_file("a.css", "a {}");

    project_report!()
        .current_dir(fixture.path())
        .args(["--config", "settings/report.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\""));
}

#[test]
fn invalid_config_exits_with_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner\n");
    fixture.create_file("a.js", "");

    project_report!()
        .current_dir(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));

    assert!(!fixture.path().join(common::REPORT_FILE).exists());
}

#[test]
fn missing_explicit_config_is_error() {
    let fixture = TestFixture::new();

    project_report!()
        .current_dir(fixture.path())
        .args(["--config", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nope.toml"));
}
