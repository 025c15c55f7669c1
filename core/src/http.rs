//! Transport boundary types and the wire-level header block parser.
//!
//! # Design
//! The client never touches the network itself. It turns a `Request` into
//! `TransportOptions`, hands them to a `Transport`, and parses the
//! `RawReply` that comes back. A transport only has to move bytes: set the
//! URL, the header lines, the verb and an optional payload, then return the
//! raw header block and body.
//!
//! The header block is CRLF-delimited text whose first line is
//! `HTTP/<version> <code> <reason>`. Transports that followed redirects or
//! saw interim `1xx` replies may hand back several blocks; the last status
//! line wins.

use log::trace;

use crate::error::TransportError;

/// How the transport should issue the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMode {
    /// Plain GET, no payload.
    Get,
    /// HEAD: the reply body is suppressed.
    Head,
    /// POST with the payload as the request body.
    Post,
    /// Any other verb, sent as a custom method.
    Custom(String),
}

impl RequestMode {
    pub fn verb(&self) -> &str {
        match self {
            RequestMode::Get => "GET",
            RequestMode::Head => "HEAD",
            RequestMode::Post => "POST",
            RequestMode::Custom(verb) => verb,
        }
    }
}

/// Everything a transport needs to execute one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    pub url: String,
    /// Header lines formatted as `Name: v1, v2`.
    pub headers: Vec<String>,
    pub mode: RequestMode,
    pub payload: Option<String>,
}

impl TransportOptions {
    /// Header lines split back into `(name, value)` pairs.
    pub fn header_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().filter_map(|line| {
            line.split_once(':')
                .map(|(name, value)| (name.trim(), value.trim()))
        })
    }
}

/// What a transport hands back after a completed round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReply {
    pub header_block: Vec<u8>,
    pub body: String,
}

/// An HTTP transport the `Client` drives.
///
/// Implementations own a reusable handle (connection pool, socket, ...).
/// A transport runs one request at a time; `duplicate` must acquire a fresh
/// handle rather than share the existing one.
pub trait Transport {
    fn execute(&mut self, options: &TransportOptions) -> Result<RawReply, TransportError>;

    fn duplicate(&self) -> Self
    where
        Self: Sized;
}

/// `HTTP/<version> <code> <reason>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub version: String,
    pub code: u16,
    pub reason: String,
}

/// A parsed header block: the last status line and the headers after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    pub status: Option<StatusLine>,
    pub headers: Vec<(String, String)>,
}

/// Parse a raw header block.
///
/// Returns `None` when `raw` is not valid UTF-8, which is distinct from an
/// empty block (`Some` with no status and no headers). Lines without a colon
/// are skipped.
pub fn parse_header_block(raw: &[u8]) -> Option<HeaderBlock> {
    let text = std::str::from_utf8(raw).ok()?;
    let mut block = HeaderBlock::default();

    for line in text.split('\n') {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            block.status = parse_status_line(line);
            block.headers.clear();
            continue;
        }
        match line.split_once(':') {
            Some((name, value)) => block
                .headers
                .push((name.trim().to_string(), value.trim().to_string())),
            None => trace!("skipping malformed header line: {line:?}"),
        }
    }

    Some(block)
}

/// Parse `HTTP/<version> <3-digit code> [reason]`.
pub fn parse_status_line(line: &str) -> Option<StatusLine> {
    let rest = line.strip_prefix("HTTP/")?;
    let (version, rest) = rest.split_once(' ')?;
    let rest = rest.trim_start();
    let (code, reason) = match rest.split_once(' ') {
        Some((code, reason)) => (code, reason.trim()),
        None => (rest.trim_end(), ""),
    };
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(StatusLine {
        version: version.to_string(),
        code: code.parse().ok()?,
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line() {
        let status = parse_status_line("HTTP/1.1 404 Not Found").unwrap();
        assert_eq!(status.version, "1.1");
        assert_eq!(status.code, 404);
        assert_eq!(status.reason, "Not Found");

        let status = parse_status_line("HTTP/2 204").unwrap();
        assert_eq!(status.version, "2");
        assert_eq!(status.code, 204);
        assert_eq!(status.reason, "");

        assert!(parse_status_line("HTTP/1.1 20 OK").is_none());
        assert!(parse_status_line("HTTP/1.1 abc OK").is_none());
        assert!(parse_status_line("ICY 200 OK").is_none());
    }

    #[test]
    fn empty_block_is_not_a_failure() {
        assert_eq!(parse_header_block(b""), Some(HeaderBlock::default()));
    }

    #[test]
    fn undecodable_block_is_the_failure_sentinel() {
        assert_eq!(parse_header_block(&[0xff, 0xfe, b'\r', b'\n']), None);
    }

    #[test]
    fn headers_split_on_first_colon() {
        let raw = b"HTTP/1.1 200 OK\r\nLocation: http://x:8080/\r\nX-Empty:\r\n\r\n";
        let block = parse_header_block(raw).unwrap();
        assert_eq!(block.status.unwrap().code, 200);
        assert_eq!(
            block.headers,
            vec![
                ("Location".to_string(), "http://x:8080/".to_string()),
                ("X-Empty".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn last_block_wins() {
        let raw = b"HTTP/1.1 100 Continue\r\n\r\nHTTP/1.1 201 Created\r\nETag: \"abc\"\r\n\r\n";
        let block = parse_header_block(raw).unwrap();
        let status = block.status.unwrap();
        assert_eq!(status.code, 201);
        assert_eq!(status.reason, "Created");
        assert_eq!(block.headers, vec![("ETag".to_string(), "\"abc\"".to_string())]);
    }

    #[test]
    fn lines_without_colon_are_skipped() {
        let block = parse_header_block(b"HTTP/1.0 200 OK\nbogus line\nA: b\n").unwrap();
        assert_eq!(block.headers, vec![("A".to_string(), "b".to_string())]);
    }

    #[test]
    fn header_pairs_round_trip_lines() {
        let options = TransportOptions {
            url: "http://example.com/".to_string(),
            headers: vec!["Accept: a, b".to_string(), "X-Url: http://y/".to_string()],
            mode: RequestMode::Get,
            payload: None,
        };
        let pairs: Vec<_> = options.header_pairs().collect();
        assert_eq!(pairs, vec![("Accept", "a, b"), ("X-Url", "http://y/")]);
        assert_eq!(options.mode.verb(), "GET");
        assert_eq!(RequestMode::Custom("PUT".to_string()).verb(), "PUT");
    }
}
