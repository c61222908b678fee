//! Environment variable access for configuration.
//!
//! Responsibilities:
//! - Define the `EnvStore` seam the config applier writes through.
//! - Provide the process-backed store and an in-memory store.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Deciding which variables to write (see apply.rs).
//! - .env file loading (see dotenv.rs).
//!
//! Invariants:
//! - A variable is "present" when it is defined, even if its value is empty.
//! - `ProcessEnv` writes happen before any runtime or worker thread exists.

use std::collections::BTreeMap;

/// Key-value store holding environment variables.
pub trait EnvStore {
    /// Current value of `key`, if defined and valid Unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// True if `key` is defined, regardless of its value.
    fn contains(&self, key: &str) -> bool;

    /// Define `key` as `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: the launcher applies configuration from a synchronous `main`
        // before the tokio runtime (and any other thread) is created.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// In-memory environment, for tests and for previewing a merge.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of defined variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}
