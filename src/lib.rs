//! chat-notify: Google Chat notification resource
//!
//! A library implementing the "out" step of a Concourse-style CI resource:
//! it composes a notification message from request parameters and local
//! files, delivers it to a chat webhook endpoint, and reports the outcome.

pub mod command;
pub mod env;
pub mod payload;
pub mod time;
pub mod webhook;
