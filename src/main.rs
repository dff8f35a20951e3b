//! chat-notify: Google Chat notification resource
//!
//! Entry point for the out step. Reads the request envelope from stdin
//! (or a file), delivers the message, and writes the response envelope
//! to stdout.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use chat_notify::command::OutHandler;
use chat_notify::payload::OutRequest;
use chat_notify::webhook::{ChatWebhook, ReqwestClient};

mod app;

use app::{exit_code, exit_code_for, setup_tracing};

/// Sends a notification message to a Google Chat webhook.
///
/// The request envelope is read from stdin; file paths in its parameters
/// are resolved against the working directory argument.
#[derive(Debug, Parser)]
#[command(name = "chat-notify")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Build working directory for resolving relative file paths
    working_dir: PathBuf,

    /// Read the request envelope from a file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let request = match read_request(cli.input.as_deref()) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Invalid request: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    run_out(&request, &cli.working_dir)
}

/// Reads and parses the request envelope.
fn read_request(input: Option<&Path>) -> Result<OutRequest, Box<dyn std::error::Error>> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Runs the out command and writes the response to stdout.
fn run_out(request: &OutRequest, working_dir: &Path) -> ExitCode {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    let handler = OutHandler::new(ChatWebhook::new(ReqwestClient::new()));

    match runtime.block_on(handler.handle(request, working_dir)) {
        Ok(response) => match serde_json::to_string(&response) {
            Ok(json) => {
                println!("{json}");
                exit_code::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to serialize response: {e}");
                exit_code::runtime_error()
            }
        },
        Err(e) => {
            tracing::error!("Error: {e}");
            exit_code_for(&e)
        }
    }
}
