//! Error types for message construction and the client boundary.
//!
//! # Design
//! Validation failures (`HttpError`) are raised at the point of construction
//! or mutation and carry the offending value; the value object is never
//! created. Transport failures surface separately through `ClientError` so
//! callers can tell "the request was malformed" apart from "the network
//! call failed".

use thiserror::Error;

/// Validation errors raised by `Uri`, `Request` and `Response`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The method is not one of the registered HTTP methods.
    #[error("The HTTP method \"{0}\" is not valid.")]
    InvalidMethod(String),

    /// The status code is not a registered HTTP status code.
    #[error("The HTTP status code \"{0}\" is not valid.")]
    InvalidStatusCode(u16),

    /// The scheme is not one of the registered URI schemes.
    #[error("The scheme \"{0}\" is not valid.")]
    InvalidScheme(String),

    /// The port is outside 1-65535 or is not a number.
    #[error("The port \"{0}\" is not valid.")]
    InvalidPort(String),
}

/// Errors a transport reports when the network round-trip fails.
///
/// `code` follows curl's numbering so callers that already key off those
/// values keep working regardless of the transport behind the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport error {code}: {message}")]
pub struct TransportError {
    pub code: i32,
    pub message: String,
}

impl TransportError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Errors returned by `Client::send_request` and the verb helpers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport failed before a reply was available.
    #[error("transport error {code}: {message}")]
    Transport { code: i32, message: String },

    /// The transport returned a reply whose header block could not be read.
    #[error("malformed reply: {0}")]
    MalformedReply(String),

    /// The reply parsed, but does not form a valid `Response`
    /// (e.g. an unregistered status code).
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<TransportError> for ClientError {
    fn from(e: TransportError) -> Self {
        ClientError::Transport {
            code: e.code,
            message: e.message,
        }
    }
}
