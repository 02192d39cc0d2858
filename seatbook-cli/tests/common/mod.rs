//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Access to the store file the CLI writes

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the host's settings into a test.
const SEATBOOK_ENV_VARS: [&str; 8] = [
    "SEATBOOK_DATA_DIR",
    "SEATBOOK_STORE",
    "SEATBOOK_CONFIG",
    "SEATBOOK_LOG_MODE",
    "SEATBOOK_TRANSPORT_NAME",
    "SEATBOOK_TOTAL_SEATS",
    "SEATBOOK_OUTPUT_FORMAT",
    "SEATBOOK_DISABLE_AUTO_CREATE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the seatbook data directory (not created until first write)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("seatbook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A command for the seatbook binary with a clean `SEATBOOK_*` environment
    /// and no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("seatbook").expect("Failed to find seatbook binary");
        for key in SEATBOOK_ENV_VARS {
            cmd.env_remove(key);
        }
        cmd.env("HOME", &self.temp_path);
        cmd
    }

    /// A command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the store file inside the data directory.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("reservations.json")
    }

    /// Writes raw contents to the store file.
    pub fn write_store(&self, contents: &str) {
        fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        fs::write(self.store_path(), contents).expect("Failed to write store");
    }

    /// Writes `config.yaml` in the data directory.
    pub fn write_config(&self, contents: &str) {
        fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        fs::write(self.data_dir.join("config.yaml"), contents).expect("Failed to write config");
    }

    /// Parses the store file.
    pub fn store_json(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.store_path()).expect("Failed to read store");
        serde_json::from_str(&contents).expect("Store is not valid JSON")
    }

    /// Books a seat and asserts success.
    pub fn book(&self, name: &str, seat: u32) {
        self.command()
            .args(["book", "--name", name, "--seat", &seat.to_string()])
            .assert()
            .success();
    }

    /// Runs `list --format json` and returns the parsed output.
    pub fn list_json(&self) -> serde_json::Value {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .output()
            .expect("Failed to run list");
        assert!(
            output.status.success(),
            "list failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("list output is not JSON")
    }
}
