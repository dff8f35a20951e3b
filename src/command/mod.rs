//! The out command: compose a message and deliver it to the webhook.
//!
//! This module provides:
//! - The orchestrating handler ([`OutHandler`])
//! - The message builder ([`build_message`], [`BuiltMessage`])
//! - The command error taxonomy ([`OutError`])

mod build;
mod error;
mod out;


pub use build::{BuiltMessage, build_message};
pub use error::OutError;
pub use out::{OutHandler, TEXT_FILE_CONTENT};
