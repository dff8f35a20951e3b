//! Request and response payloads for the out step.
//!
//! This module provides the value types exchanged with the CI system:
//! - The incoming request envelope ([`OutRequest`], [`Source`], [`Params`])
//! - The outgoing response envelope ([`OutResponse`], [`Metadata`])
//! - The generated build identifier ([`Version`])
//!
//! All types use the wire names of the resource protocol (`card_file`,
//! `text_file`, `build_number`) and are constructed once per invocation.

mod error;
mod request;
mod response;
mod version;


pub use error::PayloadError;
pub use request::{OutRequest, Params, Source};
pub use response::{Metadata, OutResponse};
pub use version::Version;
