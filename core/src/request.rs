//! Outgoing HTTP request: a `Message` plus method and target URI.

use crate::error::HttpError;
use crate::header::HeaderMap;
use crate::message::{HttpMessage, Message, DEFAULT_PROTOCOL_VERSION};
use crate::registry::{default_port, HTTP_METHODS};
use crate::uri::{IntoUri, Uri};

/// An immutable HTTP request.
///
/// The method is validated against the registered method set at
/// construction and on every `with_method`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    uri: Uri,
    request_target: Option<String>,
    message: Message,
}

impl Request {
    pub fn new(
        method: &str,
        uri: impl IntoUri,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<Self, HttpError> {
        validate_method(method)?;
        Ok(Self {
            method: method.to_string(),
            uri: uri.into_uri()?,
            request_target: None,
            message: Message::new(DEFAULT_PROTOCOL_VERSION, headers, body),
        })
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The explicit target if one was set, else the URI's string form, or
    /// `"/"` when that is empty.
    pub fn request_target(&self) -> String {
        if let Some(target) = &self.request_target {
            return target.clone();
        }
        let uri = self.uri.to_string();
        if uri.is_empty() {
            return "/".to_string();
        }
        uri
    }

    pub fn with_request_target(&self, target: &str) -> Self {
        Self {
            request_target: Some(target.to_string()),
            ..self.clone()
        }
    }

    pub fn with_method(&self, method: &str) -> Result<Self, HttpError> {
        validate_method(method)?;
        Ok(Self {
            method: method.to_string(),
            ..self.clone()
        })
    }

    /// Replace the URI.
    ///
    /// Unless `preserve_host` is set, a URI carrying a host rewrites the
    /// `Host` header. With `preserve_host`, `Host` is only filled in when it
    /// is missing or empty.
    pub fn with_uri(&self, uri: Uri, preserve_host: bool) -> Self {
        let request = Self {
            uri,
            ..self.clone()
        };
        if request.uri.host().is_empty() {
            return request;
        }
        if preserve_host && !request.header_line("Host").is_empty() {
            return request;
        }
        request.with_header("Host", host_header(&request.uri))
    }
}

impl HttpMessage for Request {
    fn message(&self) -> &Message {
        &self.message
    }

    fn with_message(&self, message: Message) -> Self {
        Self {
            method: self.method.clone(),
            uri: self.uri.clone(),
            request_target: self.request_target.clone(),
            message,
        }
    }
}

fn host_header(uri: &Uri) -> String {
    match uri.port() {
        Some(port) if default_port(uri.scheme()) != Some(port) => {
            format!("{}:{port}", uri.host())
        }
        _ => uri.host().to_string(),
    }
}

fn validate_method(method: &str) -> Result<(), HttpError> {
    if !HTTP_METHODS.is_valid_value(method) {
        return Err(HttpError::InvalidMethod(method.to_string()));
    }
    Ok(())
}
