//! `.env` file loading.
//!
//! Responsibilities:
//! - Load `.env` from the working directory unless `DOTENV_DISABLED` is set.
//! - Map dotenvy failures to `ConfigError` without exposing file contents.
//!
//! Invariants:
//! - A missing `.env` is not an error.
//! - Variables already present in the process environment are not overridden.

use super::error::ConfigError;
use crate::constants::DOTENV_DISABLED_VAR;

/// True if `DOTENV_DISABLED` is `1` or `true`.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from `.env` if present.
///
/// Must run before any other thread is started.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => {
            Err(ConfigError::DotenvParse { error_index: idx })
        }
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
