//! zen-mcp - launcher for the Zen MCP server.
//!
//! Responsibilities:
//! - Merge `.env` and the JSON configuration file into the process environment.
//! - Locate the server program and run it on a single-threaded runtime.
//! - Turn Ctrl+C into a quiet, successful shutdown.
//!
//! Does NOT handle:
//! - Anything the server itself does; it is an external program.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - All environment writes finish before the tokio runtime is built.
//! - Resolution and spawn failures are reported on stdout and exit with code 1.

mod args;
mod error;
mod locate;
mod logging;
mod runner;

use args::Cli;
use clap::Parser;
use error::ExitCode;
use locate::{SearchPath, write_resolve_diagnostics, write_start_diagnostics};
use runner::{ServerProcess, StartError, interrupt_signal};
use std::io::{self, StdoutLock, Write};
use std::path::Path;
use zen_config::{apply_config_to_process, load_config_file};

/// Write startup diagnostics to stdout.
fn print_diagnostics(write: impl FnOnce(&mut StdoutLock<'static>, Option<&Path>) -> io::Result<()>) {
    let cwd = std::env::current_dir().ok();
    let mut stdout = io::stdout().lock();
    if let Err(io_err) = write(&mut stdout, cwd.as_deref()) {
        eprintln!("Failed to write diagnostics: {}", io_err);
    }
    let _ = stdout.flush();
}

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = zen_config::load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    if let Some(path) = cli.config_path() {
        let config = logging::with_startup_logging(|| load_config_file(&path));
        apply_config_to_process(&config);
    }

    // LOG_LEVEL may have just come from the config file.
    logging::init();

    let search_path = SearchPath::from_env();
    let program = match search_path.resolve(&cli.server) {
        Ok(program) => program,
        Err(e) => {
            print_diagnostics(|out, cwd| write_resolve_diagnostics(out, &e, &search_path, cwd));
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };
    tracing::debug!(program = %program.display(), "Resolved server program");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let server = ServerProcess::new(program, cli.server_args);
    let result = runtime.block_on(server.run(interrupt_signal()));
    drop(runtime);

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<StartError>() {
                Some(start) => print_diagnostics(|out, cwd| {
                    write_start_diagnostics(out, start, &search_path, cwd)
                }),
                None => eprintln!("{:#}", e),
            }
            ExitCode::GeneralError.as_i32()
        }
    };

    std::process::exit(exit_code);
}
