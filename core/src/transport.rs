//! `Transport` implementation backed by a `ureq` agent.
//!
//! The agent is built with status-as-error disabled, so 4xx/5xx replies come
//! back as data and the client interprets them. Failures are mapped onto
//! curl's error numbering.
//!
//! ureq does not expose the reason phrase it read off the wire, so the
//! rebuilt status line carries the canonical reason for the code. A server's
//! custom phrase (or a non-standard code's phrase) is lost at this layer.

use std::fmt;
use std::io;
use std::time::Duration;

use ureq::http::Response as WireResponse;
use ureq::{Agent, Body};

use crate::error::TransportError;
use crate::http::{RawReply, RequestMode, Transport, TransportOptions};

/// A blocking transport owning one `ureq::Agent` (and its connection pool).
pub struct UreqTransport {
    agent: Agent,
    timeout: Option<Duration>,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// A transport whose requests fail with code 28 once `timeout` elapses.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn send(&self, options: &TransportOptions) -> Result<WireResponse<Body>, ureq::Error> {
        let url = options.url.as_str();
        let payload = options.payload.as_deref().unwrap_or_default().as_bytes();

        macro_rules! with_headers {
            ($builder:expr) => {{
                let mut builder = $builder;
                for (name, value) in options.header_pairs() {
                    builder = builder.header(name, value);
                }
                builder
            }};
        }

        match &options.mode {
            RequestMode::Get => with_headers!(self.agent.get(url)).call(),
            RequestMode::Head => with_headers!(self.agent.head(url)).call(),
            RequestMode::Post => with_headers!(self.agent.post(url)).send(payload),
            RequestMode::Custom(verb) => match verb.as_str() {
                "PUT" => with_headers!(self.agent.put(url)).send(payload),
                "PATCH" => with_headers!(self.agent.patch(url)).send(payload),
                "DELETE" if options.payload.is_some() => {
                    with_headers!(self.agent.delete(url))
                        .force_send_body()
                        .send(payload)
                }
                "DELETE" => with_headers!(self.agent.delete(url)).call(),
                "OPTIONS" => with_headers!(self.agent.options(url)).call(),
                "TRACE" => with_headers!(self.agent.trace(url)).call(),
                "CONNECT" => with_headers!(self.agent.connect(url)).call(),
                other => Err(ureq::Error::BadUri(format!("unsupported method {other}"))),
            },
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, options: &TransportOptions) -> Result<RawReply, TransportError> {
        let mut response = self.send(options).map_err(map_error)?;
        let header_block = header_block(&response);
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(map_error)?;
        Ok(RawReply { header_block, body })
    }

    fn duplicate(&self) -> Self {
        Self::build(self.timeout)
    }
}

/// Re-serialize the status line and headers as a CRLF-delimited block.
fn header_block(response: &WireResponse<Body>) -> Vec<u8> {
    let status = response.status();
    let mut block = format!(
        "{:?} {} {}\r\n",
        response.version(),
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
    .into_bytes();
    for (name, value) in response.headers() {
        block.extend_from_slice(name.as_str().as_bytes());
        block.extend_from_slice(b": ");
        block.extend_from_slice(value.as_bytes());
        block.extend_from_slice(b"\r\n");
    }
    block.extend_from_slice(b"\r\n");
    block
}

fn map_error(e: ureq::Error) -> TransportError {
    let code = match &e {
        ureq::Error::BadUri(_) => 3,
        ureq::Error::HostNotFound => 6,
        ureq::Error::ConnectionFailed => 7,
        ureq::Error::Io(err) if err.kind() == io::ErrorKind::ConnectionRefused => 7,
        ureq::Error::Timeout(_) => 28,
        ureq::Error::Tls(_) => 35,
        ureq::Error::TooManyRedirects => 47,
        ureq::Error::Io(_) => 56,
        _ => 0,
    };
    TransportError::new(code, e.to_string())
}
