//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the documented default configuration file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations (see `loader::file`).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/zen-mcp-server/config.json`
/// - macOS: `~/Library/Application Support/zen-mcp-server/config.json`
/// - Windows: `%AppData%\zen-mcp-server\config\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
