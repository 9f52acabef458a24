//! Common utilities for CLI tests.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// A CLI bound to its own throwaway data directory.
pub struct Cli {
    data_dir: TempDir,
}

impl Cli {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("create data dir"),
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }

    /// Invoke a CLI command and return (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_focusflow"))
            .args(args)
            .env("FOCUSFLOW_DATA_DIR", self.data_dir.path())
            .env_remove("FOCUSFLOW_LOG")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);

        (stdout, stderr, code)
    }

    /// Invoke a CLI command and expect success.
    pub fn success(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run(args);
        assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
        stdout
    }

    /// Invoke a CLI command and expect failure; returns stderr.
    pub fn failure(&self, args: &[&str]) -> String {
        let (_, stderr, code) = self.run(args);
        assert_ne!(code, 0, "CLI command unexpectedly succeeded: {args:?}");
        stderr
    }

    /// Invoke a CLI command that prints one JSON document.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.success(args);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("bad JSON from {args:?}: {e}\n{stdout}"))
    }

    /// Invoke a CLI command that prints a sequence of JSON documents.
    pub fn json_docs(&self, args: &[&str]) -> Vec<serde_json::Value> {
        let stdout = self.success(args);
        serde_json::Deserializer::from_str(&stdout)
            .into_iter::<serde_json::Value>()
            .collect::<Result<_, _>>()
            .unwrap_or_else(|e| panic!("bad JSON from {args:?}: {e}\n{stdout}"))
    }
}
