use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands with temporary databases
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary database
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tick").expect("Failed to find tick binary");

        // Run inside the temp dir so no stray tick.toml is picked up
        cmd.current_dir(self.temp_dir.path());
        cmd.env("TICK_DATABASE_PATH", &self.db_path);
        cmd.env("TICK_TIMEZONE", "UTC");
        cmd.env_remove("TICK_LOG");

        cmd
    }

    /// Get the database path for this test instance
    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Runs `list` and returns the task titles in printed order.
    pub fn listed_titles(&self, args: &[&str], titles: &[&str]) -> Vec<String> {
        let output = self.command().arg("list").args(args).output().expect("Failed to run list");
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);

        let mut found: Vec<(usize, String)> = titles
            .iter()
            .filter_map(|t| stdout.find(t).map(|pos| (pos, t.to_string())))
            .collect();
        found.sort();
        found.into_iter().map(|(_, t)| t).collect()
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains task table headers
    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Title"))
            .and(predicate::str::contains("Done"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }

    /// Predicate to check that usage was printed
    pub fn has_usage() -> impl Predicate<str> {
        predicate::str::contains("Usage")
    }
}
