//! Running the server main to completion.
//!
//! Responsibilities:
//! - Spawn the resolved server program with the merged environment.
//! - Race the server against an interruption signal.
//! - Stop the server quietly when interrupted.
//!
//! Does NOT handle:
//! - Locating the server program (see `locate` module).
//! - Building the runtime; callers run this on a current-thread runtime.
//!
//! Invariants:
//! - Interruption never produces output and always yields `ExitCode::Success`.
//! - The interrupt listener is installed before the server is spawned.
//! - The server inherits stdin, stdout and stderr from the launcher.

use anyhow::{Context, Result};
use std::future::Future;
use std::path::PathBuf;
use std::pin::{Pin, pin};
use std::process::Stdio;
use std::task::Poll;
use std::time::Duration;
use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::error::ExitCode;

/// Time a server gets to exit on its own after an interruption before it is killed.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// The resolved server program exists but the OS refused to run it,
/// e.g. a script whose interpreter is missing.
#[derive(Error, Debug)]
#[error("could not start {}: {error}", .program.display())]
pub struct StartError {
    pub program: PathBuf,
    pub error: std::io::Error,
}

/// How a supervised future finished.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The server future completed with this output.
    Completed(T),
    /// The interruption future fired first.
    Interrupted,
}

/// Drive `server` until it completes or `interrupt` fires.
pub async fn run_until_interrupted<S, I>(server: S, interrupt: I) -> Outcome<S::Output>
where
    S: Future,
    I: Future<Output = ()>,
{
    tokio::select! {
        output = server => Outcome::Completed(output),
        () = interrupt => Outcome::Interrupted,
    }
}

/// Poll `future` exactly once, returning whether it completed.
async fn poll_once<F: Future<Output = ()>>(mut future: Pin<&mut F>) -> bool {
    std::future::poll_fn(|cx| Poll::Ready(future.as_mut().poll(cx).is_ready())).await
}

/// Resolves when the user presses Ctrl+C (SIGINT).
///
/// The handler is installed on first poll.
///
/// If the handler cannot be installed, this never resolves.
pub async fn interrupt_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

/// The external server main, as a program plus arguments.
#[derive(Debug, Clone)]
pub struct ServerProcess {
    program: PathBuf,
    args: Vec<String>,
}

impl ServerProcess {
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self { program, args }
    }

    fn spawn(&self) -> Result<Child, StartError> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|error| StartError {
                program: self.program.clone(),
                error,
            })
    }

    /// Run the server until it exits or `interrupt` fires, returning the
    /// launcher's exit code.
    ///
    /// A spawn failure is returned as a [`StartError`] inside the `anyhow::Error`.
    pub async fn run(self, interrupt: impl Future<Output = ()>) -> Result<i32> {
        let mut interrupt = pin!(interrupt);
        if poll_once(interrupt.as_mut()).await {
            debug!("Interrupted before the server started");
            return Ok(ExitCode::Success.as_i32());
        }

        let mut child = self.spawn()?;
        debug!(program = %self.program.display(), pid = ?child.id(), "Server started");

        match run_until_interrupted(child.wait(), interrupt).await {
            Outcome::Completed(status) => {
                let status = status.context("Failed to wait for server program")?;
                debug!(%status, "Server exited");
                Ok(ExitCode::for_server_status(status))
            }
            Outcome::Interrupted => {
                debug!("Interrupted; stopping server");
                stop(&mut child).await;
                Ok(ExitCode::Success.as_i32())
            }
        }
    }
}

async fn stop(child: &mut Child) {
    // A foreground server usually received the same Ctrl+C.
    if let Ok(Ok(status)) = tokio::time::timeout(SHUTDOWN_GRACE, child.wait()).await {
        debug!(%status, "Server stopped after interruption");
        return;
    }
    if let Err(e) = child.kill().await {
        debug!(error = %e, "Failed to kill server after interruption");
    }
}
