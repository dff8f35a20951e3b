//! Builds the outbound message from request parameters.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::payload::Params;
use crate::webhook::WebhookMessage;

use super::OutError;

/// Result of building: the message body plus text-file content to publish
/// into the environment, when the file rode along with other inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltMessage {
    /// The message body to deliver.
    pub message: WebhookMessage,
    /// Text-file content to expose as `${TEXT_FILE_CONTENT}`, if any.
    pub text_file_content: Option<String>,
}

/// Builds the webhook message for validated parameters.
///
/// Precedence:
/// 1. `text` becomes the message `text` entry verbatim.
/// 2. `card_file` is parsed as a JSON array of objects and becomes `cardsV2`.
/// 3. With neither of the above, `text_file` content becomes the message
///    `text` entry directly.
/// 4. Otherwise a present `text_file` is only published for placeholder
///    substitution, not inserted into the body.
///
/// # Errors
///
/// Returns [`OutError`] when a referenced file cannot be read or the card
/// file is not valid JSON. The caller must have checked that at least one
/// parameter is present.
pub fn build_message(params: &Params, working_dir: &Path) -> Result<BuiltMessage, OutError> {
    let mut message = WebhookMessage::new();

    if let Some(text) = &params.text {
        message.put("text", text.clone());
    }
    if let Some(card_file) = &params.card_file {
        message.put("cardsV2", read_card_file(working_dir, card_file)?);
    }

    let mut text_file_content = None;
    if params.text.is_none() && params.card_file.is_none() {
        // Validation guarantees text_file is present on this branch.
        let text_file = params
            .text_file
            .as_ref()
            .ok_or(OutError::MissingMessageParams)?;
        message.put("text", read_file(working_dir, text_file)?);
    } else if let Some(text_file) = &params.text_file {
        text_file_content = Some(read_file(working_dir, text_file)?);
    }

    Ok(BuiltMessage {
        message,
        text_file_content,
    })
}

fn read_card_file(working_dir: &Path, file_name: &str) -> Result<Value, OutError> {
    let content = read_file(working_dir, file_name)?;
    let cards: Vec<Map<String, Value>> =
        serde_json::from_str(&content).map_err(|source| OutError::CardParse {
            path: PathBuf::from(file_name),
            source,
        })?;
    Ok(Value::Array(cards.into_iter().map(Value::Object).collect()))
}

fn read_file(working_dir: &Path, file_name: &str) -> Result<String, OutError> {
    fs::read_to_string(working_dir.join(file_name)).map_err(|source| OutError::FileRead {
        path: PathBuf::from(file_name),
        source,
    })
}
