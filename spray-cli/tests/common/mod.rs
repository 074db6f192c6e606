//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the caller's configuration
//! - Scenario fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak configuration into a test run.
const SPRAY_VARS: [&str; 10] = [
    "SPRAY_CONFIG",
    "SPRAY_LOG_MODE",
    "SPRAY_INPUT_ATTRIBUTE",
    "SPRAY_OUTPUT_ATTRIBUTES",
    "SPRAY_SEPARATOR",
    "SPRAY_FORCE_INDEX",
    "SPRAY_INDEX_PREFIX",
    "SPRAY_INDEX_SUFFIX",
    "SPRAY_ANCHOR",
    "SPRAY_OUTPUT_FORMAT",
];

/// A nested list: `ul > li * 3`, the first of which is unmounted.
#[allow(dead_code)]
pub const LIST_SCENARIO: &str = r"
body:
  - tag: ul
    name: list
    children:
      - {tag: li, name: a}
      - {tag: li, name: b}
      - {tag: li, name: c}
steps:
  - mount: a
  - mount: b
  - mount: c
  - mount: list
  - unmount: a
";

/// Two divs inside a div, mounted children first.
#[allow(dead_code)]
pub const NESTED_SCENARIO: &str = r"
body:
  - tag: div
    children:
      - {tag: div, name: first}
      - {tag: div, name: second}
";

/// Test environment with an isolated home and working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running `spray` inside the environment.
    ///
    /// The working directory and `HOME` point at the temporary directory and
    /// every `SPRAY_*` variable is cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("spray").expect("Failed to find spray binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in SPRAY_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file into the environment and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run `spray index` on a scenario with extra arguments and return stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn index(&self, scenario: &Path, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("index")
            .arg(scenario)
            .args(args)
            .output()
            .expect("Failed to run index command");

        assert!(
            output.status.success(),
            "Index failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
