//! Centralized constants for the zen-mcp workspace.
//!
//! Environment variable names and configuration keys shared by the loader
//! and the launcher binary.

// =============================================================================
// Configuration File Layout
// =============================================================================

/// Top-level section mapping provider names to API keys.
pub const API_KEYS_SECTION: &str = "api_keys";

/// Top-level section mapping setting names to values.
pub const SETTINGS_SECTION: &str = "settings";

/// Suffix appended to an uppercased provider name to form its variable name.
pub const API_KEY_SUFFIX: &str = "_API_KEY";

/// Providers the server knows how to talk to.
///
/// Other provider names are still applied; this list only drives diagnostics.
pub const KNOWN_PROVIDERS: &[&str] = &["gemini", "openai", "xai", "openrouter"];

// =============================================================================
// Launcher Environment
// =============================================================================

/// Set to `1` or `true` to skip `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Overrides the configuration file location.
pub const CONFIG_PATH_VAR: &str = "ZEN_CONFIG_PATH";

/// Overrides the server program the launcher forwards to.
pub const SERVER_BIN_VAR: &str = "ZEN_SERVER_BIN";

/// Log filter consumed by the launcher and the server.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Log filter used when `LOG_LEVEL` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Paths
// =============================================================================

/// Application name used for the platform config directory.
pub const APP_DIR_NAME: &str = "zen-mcp-server";

/// Configuration file name inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Server program resolved when none is configured.
pub const DEFAULT_SERVER_PROGRAM: &str = "zen-mcp-server";
