//! Incoming HTTP response: a `Message` plus status code and reason phrase.

use crate::error::HttpError;
use crate::header::HeaderMap;
use crate::message::{HttpMessage, Message, DEFAULT_PROTOCOL_VERSION};
use crate::registry::{status_text, HTTP_STATUS_CODES};

/// Reason phrase for a registered code that has no catalogued text.
pub const UNKNOWN_STATUS: &str = "unknown status";

/// An immutable HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status_code: u16,
    reason_phrase: String,
    message: Message,
}

impl Response {
    /// Build a response. The status code must be registered; the reason
    /// phrase is the catalogued one for that code.
    pub fn new(
        body: Option<String>,
        status_code: u16,
        headers: HeaderMap,
        protocol_version: &str,
    ) -> Result<Self, HttpError> {
        validate_status_code(status_code)?;
        Ok(Self {
            status_code,
            reason_phrase: default_reason(status_code).to_string(),
            message: Message::new(protocol_version, headers, body),
        })
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    /// Replace the status. An absent or empty `reason_phrase` falls back to
    /// the catalogued phrase.
    pub fn with_status(&self, code: u16, reason_phrase: Option<&str>) -> Result<Self, HttpError> {
        validate_status_code(code)?;
        let reason_phrase = match reason_phrase {
            Some(reason) if !reason.is_empty() => reason.to_string(),
            _ => default_reason(code).to_string(),
        };
        Ok(Self {
            status_code: code,
            reason_phrase,
            message: self.message.clone(),
        })
    }
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status_code: 200,
            reason_phrase: default_reason(200).to_string(),
            message: Message::new(DEFAULT_PROTOCOL_VERSION, HeaderMap::new(), Some(String::new())),
        }
    }
}

impl HttpMessage for Response {
    fn message(&self) -> &Message {
        &self.message
    }

    fn with_message(&self, message: Message) -> Self {
        Self {
            status_code: self.status_code,
            reason_phrase: self.reason_phrase.clone(),
            message,
        }
    }
}

fn default_reason(code: u16) -> &'static str {
    status_text(code).unwrap_or(UNKNOWN_STATUS)
}

fn validate_status_code(code: u16) -> Result<(), HttpError> {
    if !HTTP_STATUS_CODES.is_valid_value(code) {
        return Err(HttpError::InvalidStatusCode(code));
    }
    Ok(())
}
