#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the project-report binary.
#[macro_export]
macro_rules! project_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("project-report"))
    };
}

pub const REPORT_FILE: &str = "project_report.txt";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw byte content in the temp directory.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a project-report config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".project-report.toml", content);
    }

    /// Reads a file relative to the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Reads the default report file.
    pub fn report(&self) -> String {
        self.read(REPORT_FILE)
    }

    /// Creates the small web project used by most tests:
    /// `a.js` (2 lines, 1 function), `b.css` (5 lines) and an ignored `c.txt`.
    pub fn create_sample_project(&self) {
        self.create_file("a.js", "function a() {}\nconsole.log(a());");
        self.create_file("b.css", "html {}\nbody {}\nh1 {}\nh2 {}\np {}");
        self.create_file("c.txt", "function import");
    }
}
