//! Shared test utilities for zen-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic launcher command factory that prevents dotenv loading.
//! - Write small shell-script servers for the launcher to run.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Variables the launcher manages are cleared so host values cannot leak in.

use assert_cmd::Command;
#[allow(unused_imports)]
use std::path::{Path, PathBuf};

/// Variables the launcher reads or writes.
pub const MANAGED_VARS: &[&str] = &[
    "ZEN_CONFIG_PATH",
    "ZEN_SERVER_BIN",
    "GEMINI_API_KEY",
    "OPENAI_API_KEY",
    "XAI_API_KEY",
    "OPENROUTER_API_KEY",
    "DEFAULT_MODEL",
    "DEFAULT_THINKING_MODE_THINKDEEP",
    "LOG_LEVEL",
];

/// Returns a hermetic `zen-mcp` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Launcher-managed env vars are cleared to ensure no leakage from the host.
#[allow(dead_code)]
pub fn zen_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("zen-mcp");

    cmd.env("DOTENV_DISABLED", "1");
    for var in MANAGED_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Writes an executable `/bin/sh` script named `name` into `dir`.
#[cfg(unix)]
#[allow(dead_code)]
pub fn write_server_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
