//! Configuration loading for the zen MCP server launcher.
//!
//! This crate reads the optional JSON configuration file and merges its
//! `api_keys` and `settings` sections into environment variables, never
//! replacing values that are already set.

pub mod constants;
mod loader;
pub mod paths;

pub use loader::{
    ConfigError, ConfigFileError, ConfigMap, EnvStore, MemoryEnv, ProcessEnv, api_key_env_name,
    apply_config, apply_config_to_process, dotenv_disabled, env_var_or_none, load_config_file,
    load_dotenv, read_config_file, setting_env_name,
};
pub use paths::default_config_path;

