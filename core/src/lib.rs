//! Immutable HTTP message and URI value objects with a thin client.
//!
//! # Overview
//! `Uri`, `Request` and `Response` are plain values: every `with_*` call
//! returns a new instance and leaves the receiver untouched, so they can be
//! shared across threads freely. Headers match names case-insensitively but
//! keep the spelling they were first supplied with.
//!
//! # Design
//! - Methods, status codes and schemes are validated against static
//!   catalogs (`registry`) at construction and on every mutation.
//! - `Client` never does I/O itself. It builds `TransportOptions` from a
//!   `Request`, delegates the round-trip to a `Transport`, and parses the
//!   raw header block and body into a `Response`.
//! - `UreqTransport` (feature `ureq`, on by default) is the bundled
//!   blocking transport.

pub mod client;
pub mod error;
pub mod header;
pub mod http;
pub mod message;
pub mod registry;
pub mod request;
pub mod response;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod uri;

pub use client::Client;
pub use error::{ClientError, HttpError, TransportError};
pub use header::{HeaderMap, HeaderValue};
pub use http::{
    parse_header_block, HeaderBlock, RawReply, RequestMode, StatusLine, Transport,
    TransportOptions,
};
pub use message::{HttpMessage, Message};
pub use registry::{EnumSet, HTTP_METHODS, HTTP_STATUS_CODES, SCHEMES};
pub use request::Request;
pub use response::Response;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use uri::{IntoUri, Uri, UriParts};
