//! JSON configuration file loading.
//!
//! Responsibilities:
//! - Read and parse the configuration file into a `ConfigMap`.
//! - Provide a lenient loader that never fails.
//!
//! Does NOT handle:
//! - Schema validation; unknown keys and sections are returned untouched.
//! - Writing values into the environment (see apply.rs).
//!
//! Invariants:
//! - `load_config_file` returns an empty map for missing, unreadable,
//!   malformed, or non-object files.
//! - Log output never includes file contents.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use super::error::ConfigFileError;

/// Parsed configuration file: a JSON object, keyed by section name.
pub type ConfigMap = serde_json::Map<String, Value>;

/// Reads and parses the config file, reporting why it could not be used.
pub fn read_config_file(path: &Path) -> Result<ConfigMap, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ConfigFileError::NotAnObject {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(ConfigFileError::Parse {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Loads the config file, degrading every failure to an empty mapping.
pub fn load_config_file(path: impl AsRef<Path>) -> ConfigMap {
    let path = path.as_ref();
    match read_config_file(path) {
        Ok(map) => {
            debug!(path = %path.display(), sections = map.len(), "Loaded config file");
            map
        }
        Err(e) if e.is_not_found() => {
            debug!(path = %path.display(), "No config file found");
            ConfigMap::new()
        }
        Err(e) => {
            warn!(error = %e, "Ignoring unusable config file");
            ConfigMap::new()
        }
    }
}
