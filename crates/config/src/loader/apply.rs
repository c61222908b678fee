//! Merging configuration values into the environment.
//!
//! Responsibilities:
//! - Map `api_keys` entries to `<PROVIDER>_API_KEY` variables.
//! - Map `settings` entries to uppercased variables.
//! - Write through an `EnvStore` without replacing existing variables.
//!
//! Does NOT handle:
//! - Reading the config file (see file.rs).
//! - Validating provider names or setting values.
//!
//! Invariants:
//! - A variable that is already present is never overwritten.
//! - Null values never produce a variable.
//! - Missing, empty, or malformed sections are skipped without error.
//! - API key values are never logged.

use serde_json::Value;
use tracing::{debug, warn};

use super::env::{EnvStore, ProcessEnv};
use super::file::ConfigMap;
use crate::constants::{API_KEY_SUFFIX, API_KEYS_SECTION, KNOWN_PROVIDERS, SETTINGS_SECTION};

/// Environment variable name for a provider's API key (`gemini` -> `GEMINI_API_KEY`).
pub fn api_key_env_name(provider: &str) -> String {
    format!("{}{}", provider.to_uppercase(), API_KEY_SUFFIX)
}

/// Environment variable name for a setting (`default_model` -> `DEFAULT_MODEL`).
pub fn setting_env_name(key: &str) -> String {
    key.to_uppercase()
}

/// Apply `api_keys` and `settings` from `config` to `env`.
///
/// Values already present in `env` always win.
pub fn apply_config(config: &ConfigMap, env: &mut impl EnvStore) {
    for (provider, value) in section(config, API_KEYS_SECTION) {
        if !KNOWN_PROVIDERS.contains(&provider.as_str()) {
            debug!(provider = %provider, "Applying API key for unrecognized provider");
        }
        if let Some(key) = env_value(API_KEYS_SECTION, provider, value) {
            set_if_absent(env, &api_key_env_name(provider), &key);
        }
    }

    for (name, value) in section(config, SETTINGS_SECTION) {
        if let Some(value) = env_value(SETTINGS_SECTION, name, value) {
            set_if_absent(env, &setting_env_name(name), &value);
        }
    }
}

/// Apply `config` to the real process environment.
///
/// Must run before any other thread is started.
pub fn apply_config_to_process(config: &ConfigMap) {
    apply_config(config, &mut ProcessEnv);
}

fn section<'a>(config: &'a ConfigMap, name: &str) -> impl Iterator<Item = (&'a String, &'a Value)> {
    let entries = match config.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            warn!(section = name, "Ignoring config section that is not an object");
            None
        }
    };
    entries.into_iter().flatten()
}

/// Render a JSON value as an environment variable value.
fn env_value(section: &str, key: &str, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => {
            warn!(section, key, "Ignoring config value with no environment representation");
            None
        }
    }
}

/// Names and values the platform can store without panicking.
fn is_storable(var: &str, value: &str) -> bool {
    !var.is_empty() && !var.contains(['=', '\0']) && !value.contains('\0')
}

fn set_if_absent(env: &mut impl EnvStore, var: &str, value: &str) {
    if !is_storable(var, value) {
        warn!(var, "Ignoring config entry that cannot be stored in the environment");
        return;
    }
    if env.contains(var) {
        debug!(var, "Keeping existing environment value");
        return;
    }
    env.set(var, value);
    debug!(var, "Set environment variable from config");
}
