//! Launcher exit codes.
//!
//! Responsibilities:
//! - Define the exit codes the launcher itself produces.
//! - Map the server's exit status onto the launcher's exit code.
//!
//! Invariants:
//! - Interruption is a normal shutdown and exits with `Success`.
//! - A server that exits normally passes its own code through unchanged.

use std::process::ExitStatus;

/// Exit codes produced by the launcher itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Server finished successfully, or the launcher was interrupted.
    Success = 0,

    /// The server program could not be located, the environment could not
    /// be prepared, or the server could not be started.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Exit code to report for a finished server.
    ///
    /// Servers killed by a signal have no code and report `GeneralError`.
    pub fn for_server_status(status: ExitStatus) -> i32 {
        status.code().unwrap_or(ExitCode::GeneralError.as_i32())
    }
}
