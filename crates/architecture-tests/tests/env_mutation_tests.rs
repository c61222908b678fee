//! Architecture tests for process-environment mutation and stdout use.
//!
//! Purpose: Keep every environment write behind `zen_config::ProcessEnv`, and keep
//! stdout free for the server protocol.
//!
//! What This Tests:
//! - Only `crates/config/src/loader/env.rs` calls `std::env::set_var` or `remove_var`
//!   outside of test code.
//! - Library code in `crates/config/src` never prints to stdout.
//!
//! What This Does NOT Do:
//! - Does NOT inspect test modules; everything after `#[cfg(test)]` is ignored.

use std::fs;
use std::path::{Path, PathBuf};

const ENV_WRITER: &str = "crates/config/src/loader/env.rs";

const ENV_WRITE_PATTERNS: &[&str] = &["set_var(", "remove_var("];

const STDOUT_PATTERNS: &[&str] = &[" println!(", " print!(", "io::stdout()"];

fn find_workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mut dir = manifest_dir.as_path();

    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && fs::read_to_string(&cargo_toml)
                .map(|content| content.contains("[workspace]"))
                .unwrap_or(false)
        {
            return dir.to_path_buf();
        }

        dir = dir
            .parent()
            .expect("Could not find workspace root (no Cargo.toml with [workspace] found)");
    }
}

/// Non-test source files under `dir`, as (workspace-relative path, code before `#[cfg(test)]`).
fn production_sources(root: &Path, dir: &str) -> Vec<(String, String)> {
    walkdir::WalkDir::new(root.join(dir))
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter(|e| !e.path().components().any(|c| c.as_os_str() == "tests"))
        .map(|e| {
            let relative = e
                .path()
                .strip_prefix(root)
                .unwrap_or(e.path())
                .to_string_lossy()
                .replace('\\', "/");
            let content = fs::read_to_string(e.path()).unwrap_or_default();
            let code = match content.find("#[cfg(test)]") {
                Some(idx) => content[..idx].to_string(),
                None => content,
            };
            (relative, code)
        })
        .collect()
}

fn violations(sources: &[(String, String)], patterns: &[&str], allowed: &[&str]) -> Vec<String> {
    sources
        .iter()
        .filter(|(path, _)| !allowed.contains(&path.as_str()))
        .flat_map(|(path, code)| {
            code.lines().enumerate().filter_map(move |(i, line)| {
                let trimmed = line.trim_start();
                if trimmed.starts_with("//") {
                    return None;
                }
                // Leading space so `println!(` does not match inside `eprintln!(`.
                let padded = format!(" {trimmed}");
                patterns
                    .iter()
                    .any(|p| padded.contains(p))
                    .then(|| format!("{}:{}: {}", path, i + 1, trimmed))
            })
        })
        .collect()
}

#[test]
fn test_only_process_env_writes_environment() {
    let root = find_workspace_root();
    let sources = production_sources(&root, "crates");

    assert!(
        sources.iter().any(|(path, _)| path == ENV_WRITER),
        "{} not found; update ENV_WRITER if it moved",
        ENV_WRITER
    );

    let found = violations(&sources, ENV_WRITE_PATTERNS, &[ENV_WRITER]);
    assert!(
        found.is_empty(),
        "Environment writes outside {}:\n{}",
        ENV_WRITER,
        found.join("\n")
    );
}

#[test]
fn test_config_crate_never_writes_stdout() {
    let root = find_workspace_root();
    let sources = production_sources(&root, "crates/config/src");

    let found = violations(&sources, STDOUT_PATTERNS, &[]);
    assert!(
        found.is_empty(),
        "stdout use in zen-config library code:\n{}",
        found.join("\n")
    );
}
