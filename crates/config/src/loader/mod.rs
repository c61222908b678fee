//! Configuration loading for environment variables and files.
//!
//! Responsibilities:
//! - Load the optional JSON configuration file (`load_config_file`).
//! - Merge `api_keys` and `settings` into the environment (`apply_config`).
//! - Load `.env` files behind the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Launching the server (see the `zen-cli` crate).
//!
//! Invariants / Assumptions:
//! - Existing environment variables take precedence over config file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod apply;
mod dotenv;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use apply::{api_key_env_name, apply_config, apply_config_to_process, setting_env_name};
pub use dotenv::{dotenv_disabled, load_dotenv};
pub use env::{EnvStore, MemoryEnv, ProcessEnv, env_var_or_none};
pub use error::{ConfigError, ConfigFileError};
pub use file::{ConfigMap, load_config_file, read_config_file};
