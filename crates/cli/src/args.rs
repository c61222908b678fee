//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve which configuration file, if any, should be loaded.
//!
//! Non-responsibilities:
//! - Does not read the configuration file (see `zen_config::load_config_file`).
//! - Does not locate the server program (see `locate` module).

use clap::Parser;
use std::path::PathBuf;
use zen_config::constants::{CONFIG_PATH_VAR, DEFAULT_SERVER_PROGRAM, SERVER_BIN_VAR};
use zen_config::default_config_path;

#[derive(Parser, Debug)]
#[command(name = "zen-mcp")]
#[command(about = "Zen MCP server launcher - apply config file settings and run the server", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  zen-mcp\n  zen-mcp --config ./zen.json\n  zen-mcp --server /opt/zen/bin/zen-mcp-server -- --transport stdio\n"
)]
pub struct Cli {
    /// Path to the JSON configuration file (overrides default location).
    ///
    /// Can also be set via ZEN_CONFIG_PATH environment variable.
    #[arg(long, env = CONFIG_PATH_VAR, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not read any configuration file.
    #[arg(long)]
    pub no_config: bool,

    /// Server program to run: a path, or a name searched next to this
    /// executable and then on PATH.
    #[arg(
        long,
        env = SERVER_BIN_VAR,
        value_name = "PROGRAM",
        default_value = DEFAULT_SERVER_PROGRAM
    )]
    pub server: String,

    /// Arguments passed through to the server program.
    #[arg(last = true, value_name = "SERVER_ARGS")]
    pub server_args: Vec<String>,
}

impl Cli {
    /// Configuration file to load, if any.
    ///
    /// Blank `--config` values fall back to the platform default location.
    pub fn config_path(&self) -> Option<PathBuf> {
        if self.no_config {
            return None;
        }
        match &self.config {
            Some(path) if !path.to_string_lossy().trim().is_empty() => Some(path.clone()),
            _ => default_config_path().ok(),
        }
    }
}
