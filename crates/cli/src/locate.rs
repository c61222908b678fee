//! Server program resolution.
//!
//! Responsibilities:
//! - Build the search path: the launcher's own directory, then `PATH`.
//! - Resolve the configured server program to an executable file.
//! - Render startup diagnostics when resolution or spawning fails.
//!
//! Does NOT handle:
//! - Running the server (see `runner` module).
//!
//! Invariants:
//! - A program containing a path separator is never searched for.
//! - The launcher directory is added to the front only if not already present.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::runner::StartError;

/// Failure to find a runnable server program.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("server program not found at {0}")]
    NotFound(PathBuf),

    #[error("server program at {0} is not executable")]
    NotExecutable(PathBuf),

    #[error("server program '{0}' not found on the search path")]
    NotOnSearchPath(String),
}

/// Ordered list of directories searched for the server program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Directory of the running executable followed by the `PATH` entries.
    pub fn from_env() -> Self {
        let path_dirs = std::env::var_os("PATH")
            .map(|paths| std::env::split_paths(&paths).collect())
            .unwrap_or_default();
        let search = Self::new(path_dirs);

        match std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            Some(dir) => search.with_front(dir),
            None => search,
        }
    }

    /// Put `dir` first unless it is already part of the search path.
    pub fn with_front(mut self, dir: PathBuf) -> Self {
        if !self.dirs.contains(&dir) {
            self.dirs.insert(0, dir);
        }
        self
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Resolve `program` to an executable path.
    pub fn resolve(&self, program: &str) -> Result<PathBuf, ResolveError> {
        let as_path = Path::new(program);
        if as_path.components().count() > 1 || as_path.is_absolute() {
            return check_explicit(as_path);
        }

        self.dirs
            .iter()
            .flat_map(|dir| candidates(dir, program))
            .find(|candidate| is_executable(candidate))
            .ok_or_else(|| ResolveError::NotOnSearchPath(program.to_string()))
    }
}

fn check_explicit(path: &Path) -> Result<PathBuf, ResolveError> {
    if !path.is_file() {
        return Err(ResolveError::NotFound(path.to_path_buf()));
    }
    if !is_executable(path) {
        return Err(ResolveError::NotExecutable(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    if Path::new(program).extension().is_some() {
        vec![dir.join(program)]
    } else {
        vec![dir.join(program), dir.join(format!("{program}.exe"))]
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Write the diagnostics shown when the server cannot be located.
pub fn write_resolve_diagnostics(
    out: &mut impl Write,
    error: &ResolveError,
    search_path: &SearchPath,
    cwd: Option<&Path>,
) -> io::Result<()> {
    writeln!(out, "Error locating server program: {error}")?;
    writeln!(
        out,
        "This might indicate a packaging issue or a missing installation."
    )?;
    write_context(out, search_path, cwd)
}

/// Write the diagnostics shown when the located server cannot be started.
pub fn write_start_diagnostics(
    out: &mut impl Write,
    error: &StartError,
    search_path: &SearchPath,
    cwd: Option<&Path>,
) -> io::Result<()> {
    writeln!(out, "Error starting server program: {error}")?;
    writeln!(
        out,
        "This might indicate a missing interpreter or dependency of the server."
    )?;
    write_context(out, search_path, cwd)
}

fn write_context(
    out: &mut impl Write,
    search_path: &SearchPath,
    cwd: Option<&Path>,
) -> io::Result<()> {
    let dirs: Vec<String> = search_path
        .dirs()
        .iter()
        .map(|dir| dir.display().to_string())
        .collect();
    writeln!(out, "Search path: [{}]", dirs.join(", "))?;
    match cwd {
        Some(cwd) => writeln!(out, "Current working directory: {}", cwd.display()),
        None => writeln!(out, "Current working directory: <unavailable>"),
    }
}
