//! Logging setup for the launcher.
//!
//! Responsibilities:
//! - Build the `EnvFilter` from `LOG_LEVEL`.
//! - Install the global stderr subscriber, and a scoped one for the
//!   configuration phase that runs before `LOG_LEVEL` is final.
//!
//! Invariants:
//! - Logs go to stderr; stdout belongs to the server protocol.
//! - A normal run at the default level writes nothing.
//! - ANSI colors are used only when stderr is a terminal.
//! - An unset or unparsable `LOG_LEVEL` falls back to `info`.

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};
use zen_config::constants::{DEFAULT_LOG_LEVEL, LOG_LEVEL_VAR};
use zen_config::env_var_or_none;

/// Translate conventional level names (`WARNING`, `CRITICAL`) into filter syntax.
fn normalize_level(level: &str) -> String {
    match level.trim().to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        other => other.to_string(),
    }
}

fn env_filter() -> EnvFilter {
    env_var_or_none(LOG_LEVEL_VAR)
        .and_then(|level| EnvFilter::try_new(normalize_level(&level)).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn stderr_subscriber() -> impl tracing::Subscriber + Send + Sync {
    Registry::default()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
}

/// Run `f` with a temporary stderr subscriber built from the current `LOG_LEVEL`.
pub fn with_startup_logging<T>(f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(stderr_subscriber(), f)
}

/// Install the process-wide subscriber.
pub fn init() {
    if tracing::subscriber::set_global_default(stderr_subscriber()).is_err() {
        eprintln!("Failed to initialize logging: a global subscriber is already set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("DEBUG"), "debug");
        assert_eq!(normalize_level(" Info "), "info");
        assert_eq!(normalize_level("WARNING"), "warn");
        assert_eq!(normalize_level("CRITICAL"), "error");
        assert_eq!(normalize_level("zen_cli=trace"), "zen_cli=trace");
    }

    #[test]
    #[serial]
    fn test_env_filter_uses_log_level() {
        temp_env::with_var("LOG_LEVEL", Some("DEBUG"), || {
            assert_eq!(env_filter().to_string(), "debug");
        });
    }

    #[test]
    #[serial]
    fn test_env_filter_falls_back_to_default() {
        temp_env::with_var_unset("LOG_LEVEL", || {
            assert_eq!(env_filter().to_string(), DEFAULT_LOG_LEVEL);
        });
        temp_env::with_var("LOG_LEVEL", Some("not a [valid filter"), || {
            assert_eq!(env_filter().to_string(), DEFAULT_LOG_LEVEL);
        });
    }
}
