//! The immutable envelope shared by requests and responses.
//!
//! # Design
//! `Message` holds the protocol version, headers and body. `Request` and
//! `Response` embed one and implement `HttpMessage`, whose provided `with_*`
//! methods build a new envelope and hand it back through `with_message`.
//! The receiver is never modified: every change goes through a fresh value
//! built from the prior fields plus the one being replaced.

use crate::header::{HeaderMap, HeaderValue};

pub const DEFAULT_PROTOCOL_VERSION: &str = "1.1";

/// Protocol version, headers and a fully materialized body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    protocol_version: String,
    headers: HeaderMap,
    body: Option<String>,
}

impl Message {
    pub fn new(protocol_version: &str, headers: HeaderMap, body: Option<String>) -> Self {
        Self {
            protocol_version: protocol_version.to_string(),
            headers,
            body,
        }
    }

    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn with_headers(&self, headers: HeaderMap) -> Self {
        Self {
            protocol_version: self.protocol_version.clone(),
            headers,
            body: self.body.clone(),
        }
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new(DEFAULT_PROTOCOL_VERSION, HeaderMap::new(), None)
    }
}

/// Read access and non-destructive updates common to every HTTP message.
pub trait HttpMessage: Sized {
    fn message(&self) -> &Message;

    /// A copy of `self` with its envelope replaced.
    fn with_message(&self, message: Message) -> Self;

    fn protocol_version(&self) -> &str {
        self.message().protocol_version()
    }

    fn headers(&self) -> &HeaderMap {
        self.message().headers()
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers().contains(name)
    }

    fn header(&self, name: &str) -> &[String] {
        self.headers().get(name)
    }

    fn header_line(&self, name: &str) -> String {
        self.headers().get_line(name)
    }

    fn body(&self) -> Option<&str> {
        self.message().body()
    }

    fn with_protocol_version(&self, version: &str) -> Self {
        let message = self.message();
        self.with_message(Message::new(
            version,
            message.headers.clone(),
            message.body.clone(),
        ))
    }

    /// Replace every value of `name`. A matching header keeps its display
    /// name; otherwise `name` becomes the display name.
    fn with_header(&self, name: &str, value: impl Into<HeaderValue>) -> Self {
        let value: HeaderValue = value.into();
        let mut headers = self.headers().clone();
        headers.set(name.to_string(), value.into_values());
        self.with_message(self.message().with_headers(headers))
    }

    /// Append to the values of `name`, or add it when absent.
    fn with_added_header(&self, name: &str, value: impl Into<HeaderValue>) -> Self {
        let value: HeaderValue = value.into();
        let mut headers = self.headers().clone();
        headers.append(name.to_string(), value.into_values());
        self.with_message(self.message().with_headers(headers))
    }

    fn without_header(&self, name: &str) -> Self {
        let mut headers = self.headers().clone();
        headers.remove(name);
        self.with_message(self.message().with_headers(headers))
    }

    fn with_body(&self, body: impl Into<String>) -> Self {
        let message = self.message();
        self.with_message(Message::new(
            &message.protocol_version,
            message.headers.clone(),
            Some(body.into()),
        ))
    }
}
