//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working and configuration directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands
    pub temp_path: PathBuf,
    /// User configuration directory passed via `--config-dir`
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// A command with no configuration from the environment or the user's home.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathogen").expect("Failed to find pathogen binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("PATHOGEN_PLATFORM")
            .env_remove("PATHOGEN_DEFAULT_DRIVE")
            .env_remove("PATHOGEN_OUTPUT_FORMAT")
            .env_remove("PATHOGEN_LOG_MODE")
            .env("PATHOGEN_CONFIG_DIR", &self.config_dir);
        cmd
    }

    /// A command pinned to the generic grammar.
    pub fn generic(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--platform").arg("generic");
        cmd
    }

    /// A command pinned to the Windows grammar.
    pub fn windows(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--platform").arg("windows");
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the working directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write user config");
    }
}
