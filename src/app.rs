//! Application startup and utilities.
//!
//! Exit codes and tracing setup supporting the main entry point.

use chat_notify::command::OutError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Request/configuration error (exit code 1) - malformed envelope,
    /// missing message inputs, unreadable files.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - delivery could not produce an outcome.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Maps a command failure to the process exit code.
pub fn exit_code_for(error: &OutError) -> std::process::ExitCode {
    if error.is_config() {
        exit_code::CONFIG_ERROR
    } else {
        exit_code::runtime_error()
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr: stdout is reserved for the JSON response consumed
/// by the CI system.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
