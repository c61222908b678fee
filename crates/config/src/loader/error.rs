//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for reading and parsing the JSON configuration file.
//! - Define error variants for `.env` loading.
//!
//! Does NOT handle:
//! - Recovery; `load_config_file` degrades `ConfigFileError` to an empty mapping.
//!
//! Invariants:
//! - All error variants include context for debugging (paths, byte offsets).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Config file parse errors carry the serde position, never the file contents.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reading the JSON configuration file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config file at {path} must contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },
}

impl ConfigFileError {
    /// True if the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigFileError::Read { source, .. } if source.kind() == ErrorKind::NotFound
        )
    }
}

/// Errors raised while preparing the launcher environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
