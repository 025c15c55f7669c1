//! Thin synchronous client over a pluggable `Transport`.
//!
//! # Design
//! Each round-trip is split into `build_options`, which turns a `Request`
//! into `TransportOptions`, and `parse_reply`, which turns the transport's
//! `RawReply` into a `Response`. `send_request` glues the two around a
//! single `Transport::execute` call. Retries, redirects and TLS are the
//! transport's business.
//!
//! A `Client` holds one transport handle and runs one request at a time
//! (`&mut self`). Cloning a client duplicates the transport, so the clone
//! gets its own handle.

use log::debug;

use crate::error::ClientError;
use crate::header::HeaderMap;
use crate::http::{parse_header_block, RawReply, RequestMode, Transport, TransportOptions};
use crate::message::HttpMessage;
use crate::request::Request;
use crate::response::Response;
use crate::uri::IntoUri;

#[derive(Debug)]
pub struct Client<T: Transport> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute `request` and parse the reply.
    ///
    /// Transport failures come back as `ClientError::Transport` carrying the
    /// transport's code and message; they are not retried.
    pub fn send_request(&mut self, request: &Request) -> Result<Response, ClientError> {
        let options = self.build_options(request);
        debug!("{} {}", options.mode.verb(), options.url);
        let reply = self.transport.execute(&options)?;
        self.parse_reply(reply)
    }

    /// Translate a request into transport options.
    ///
    /// GET carries no payload, HEAD suppresses the reply body, POST sends the
    /// body (empty if absent) and every other verb goes out as a custom
    /// method with the body attached when present.
    pub fn build_options(&self, request: &Request) -> TransportOptions {
        let headers = request
            .headers()
            .iter()
            .map(|(name, values)| format!("{name}: {}", values.join(", ")))
            .collect();

        let (mode, payload) = match request.method() {
            "GET" => (RequestMode::Get, None),
            "HEAD" => (RequestMode::Head, None),
            "POST" => (
                RequestMode::Post,
                Some(request.body().unwrap_or_default().to_string()),
            ),
            other => (
                RequestMode::Custom(other.to_string()),
                request.body().map(str::to_string),
            ),
        };

        TransportOptions {
            url: request.uri().to_string(),
            headers,
            mode,
            payload,
        }
    }

    /// Turn a raw transport reply into a `Response`.
    ///
    /// The wire reason phrase is kept when present; otherwise the catalogued
    /// phrase for the code applies.
    pub fn parse_reply(&self, reply: RawReply) -> Result<Response, ClientError> {
        let block = parse_header_block(&reply.header_block).ok_or_else(|| {
            ClientError::MalformedReply("header block is not valid UTF-8".to_string())
        })?;
        let status = block
            .status
            .ok_or_else(|| ClientError::MalformedReply("missing status line".to_string()))?;
        debug!("HTTP/{} {} {}", status.version, status.code, status.reason);

        let headers = HeaderMap::from_pairs(block.headers);
        let response = Response::new(Some(reply.body), status.code, headers, &status.version)?;
        Ok(response.with_status(status.code, Some(&status.reason))?)
    }

    pub fn get(&mut self, uri: impl IntoUri, headers: HeaderMap) -> Result<Response, ClientError> {
        let request = Request::new("GET", uri, headers, None)?;
        self.send_request(&request)
    }

    pub fn head(&mut self, uri: impl IntoUri, headers: HeaderMap) -> Result<Response, ClientError> {
        let request = Request::new("HEAD", uri, headers, None)?;
        self.send_request(&request)
    }

    pub fn post(
        &mut self,
        uri: impl IntoUri,
        body: impl Into<String>,
        headers: HeaderMap,
    ) -> Result<Response, ClientError> {
        self.send_with_body("POST", uri, body.into(), headers)
    }

    pub fn put(
        &mut self,
        uri: impl IntoUri,
        body: impl Into<String>,
        headers: HeaderMap,
    ) -> Result<Response, ClientError> {
        self.send_with_body("PUT", uri, body.into(), headers)
    }

    pub fn patch(
        &mut self,
        uri: impl IntoUri,
        body: impl Into<String>,
        headers: HeaderMap,
    ) -> Result<Response, ClientError> {
        self.send_with_body("PATCH", uri, body.into(), headers)
    }

    pub fn delete(
        &mut self,
        uri: impl IntoUri,
        body: impl Into<String>,
        headers: HeaderMap,
    ) -> Result<Response, ClientError> {
        self.send_with_body("DELETE", uri, body.into(), headers)
    }

    fn send_with_body(
        &mut self,
        method: &str,
        uri: impl IntoUri,
        body: String,
        headers: HeaderMap,
    ) -> Result<Response, ClientError> {
        let request = Request::new(method, uri, headers, Some(body))?;
        self.send_request(&request)
    }
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.duplicate(),
        }
    }
}

#[cfg(feature = "ureq")]
impl Default for Client<crate::transport::UreqTransport> {
    fn default() -> Self {
        Self::new(crate::transport::UreqTransport::new())
    }
}
