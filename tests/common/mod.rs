//! Shared testing utilities for diego-installer-gen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated output location for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory handed to `--output-dir`. Not created up front.
    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("installer")
    }

    /// Absolute path of a YAML fixture under `tests/fixtures/`.
    pub fn fixture(&self, name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
    }

    /// Build a command for invoking the compiled binary with director credentials unset.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("diego-installer-gen").expect("Failed to locate binary");
        cmd.current_dir(self.root())
            .env_remove("BOSH_CLIENT")
            .env_remove("BOSH_CLIENT_SECRET")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `generate` against a fixture manifest with a fixed machine IP.
    pub fn generate_from_fixture(&self, fixture: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg("--manifest")
            .arg(self.fixture(fixture))
            .arg("--output-dir")
            .arg(self.output_dir())
            .args(["--machine-ip", "10.0.16.50"]);
        cmd
    }

    /// Read a generated file.
    pub fn read_output(&self, name: &str) -> String {
        let path = self.output_dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Names of all generated files, sorted.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.output_dir())
            .expect("Failed to list output directory")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
