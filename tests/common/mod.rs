//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables that would leak host settings into a run.
const HOST_VARS: &[&str] = &[
    "DASHFMT_FORMAT",
    "DASHFMT_NO_COLOR",
    "DASHFMT_PRETTY",
    "DASHFMT_VERBOSE",
    "DASHFMT_STATE_FILE",
    "DASHFMT_LOG",
    "DASHFMT_LOG_FORMAT",
    "DASHFMT_LOG_FILE",
    "RUST_LOG",
];

/// Isolated dashfmt invocation: config and state live in a temp dir, colors off.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn config_file(&self) -> std::path::PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn state_file(&self) -> std::path::PathBuf {
        self.dir.path().join("sidebar-state.json")
    }

    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("dashfmt").expect("dashfmt binary");
        for var in HOST_VARS {
            cmd.env_remove(var);
        }
        cmd.env("DASHFMT_CONFIG", self.config_file())
            .env("DASHFMT_STATE_FILE", self.state_file())
            .env("NO_COLOR", "1");
        cmd
    }
}
