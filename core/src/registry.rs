//! Closed name → value catalogs for HTTP methods, status codes and schemes.
//!
//! # Design
//! Each catalog is a static table built at compile time. Lookups are linear
//! scans; the tables are small enough that a hash index would not pay off.
//! Reason phrases live in a separate code → text table because not every
//! registered code has a catalogued phrase (306 is reserved).

/// A fixed mapping from symbolic name to value.
///
/// Names are unique case-sensitively. Values may repeat (425 is registered
/// under two names).
#[derive(Debug)]
pub struct EnumSet<V: 'static> {
    entries: &'static [(&'static str, V)],
}

impl<V: Copy + PartialEq> EnumSet<V> {
    pub const fn new(entries: &'static [(&'static str, V)]) -> Self {
        Self { entries }
    }

    /// Whether `name` is registered. `strict` compares case-sensitively;
    /// otherwise both sides are lowercased.
    pub fn is_valid_name(&self, name: &str, strict: bool) -> bool {
        if strict {
            return self.entries.iter().any(|(n, _)| *n == name);
        }
        let name = name.to_lowercase();
        self.entries.iter().any(|(n, _)| n.to_lowercase() == name)
    }

    /// Exact match against the registered values.
    pub fn is_valid_value<Q>(&self, value: Q) -> bool
    where
        V: PartialEq<Q>,
    {
        self.entries.iter().any(|(_, v)| *v == value)
    }

    /// Look `name` up after uppercasing it. Never fails: unknown names
    /// yield `None`.
    pub fn get_by_name(&self, name: &str) -> Option<V> {
        let name = name.to_uppercase();
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn values(&self) -> impl Iterator<Item = V> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }
}

pub static HTTP_METHODS: EnumSet<&'static str> = EnumSet::new(&[
    ("GET", "GET"),
    ("HEAD", "HEAD"),
    ("POST", "POST"),
    ("PUT", "PUT"),
    ("DELETE", "DELETE"),
    ("PATCH", "PATCH"),
    ("CONNECT", "CONNECT"),
    ("OPTIONS", "OPTIONS"),
    ("TRACE", "TRACE"),
]);

pub static SCHEMES: EnumSet<&'static str> = EnumSet::new(&[
    ("HTTP", "http"),
    ("HTTPS", "https"),
    ("FTP", "ftp"),
]);

static DEFAULT_PORTS: &[(&str, u16)] = &[("http", 80), ("https", 443), ("ftp", 21)];

/// The well-known port for a registered scheme.
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(s, _)| *s == scheme)
        .map(|(_, p)| *p)
}

#[rustfmt::skip]
pub static HTTP_STATUS_CODES: EnumSet<u16> = EnumSet::new(&[
    ("HTTP_CONTINUE", 100),
    ("HTTP_SWITCHING_PROTOCOLS", 101),
    ("HTTP_PROCESSING", 102),
    ("HTTP_EARLY_HINTS", 103),
    ("HTTP_OK", 200),
    ("HTTP_CREATED", 201),
    ("HTTP_ACCEPTED", 202),
    ("HTTP_NON_AUTHORITATIVE_INFORMATION", 203),
    ("HTTP_NO_CONTENT", 204),
    ("HTTP_RESET_CONTENT", 205),
    ("HTTP_PARTIAL_CONTENT", 206),
    ("HTTP_MULTI_STATUS", 207),
    ("HTTP_ALREADY_REPORTED", 208),
    ("HTTP_IM_USED", 226),
    ("HTTP_MULTIPLE_CHOICES", 300),
    ("HTTP_MOVED_PERMANENTLY", 301),
    ("HTTP_FOUND", 302),
    ("HTTP_SEE_OTHER", 303),
    ("HTTP_NOT_MODIFIED", 304),
    ("HTTP_USE_PROXY", 305),
    ("HTTP_RESERVED", 306),
    ("HTTP_TEMPORARY_REDIRECT", 307),
    ("HTTP_PERMANENTLY_REDIRECT", 308),
    ("HTTP_BAD_REQUEST", 400),
    ("HTTP_UNAUTHORIZED", 401),
    ("HTTP_PAYMENT_REQUIRED", 402),
    ("HTTP_FORBIDDEN", 403),
    ("HTTP_NOT_FOUND", 404),
    ("HTTP_METHOD_NOT_ALLOWED", 405),
    ("HTTP_NOT_ACCEPTABLE", 406),
    ("HTTP_PROXY_AUTHENTICATION_REQUIRED", 407),
    ("HTTP_REQUEST_TIMEOUT", 408),
    ("HTTP_CONFLICT", 409),
    ("HTTP_GONE", 410),
    ("HTTP_LENGTH_REQUIRED", 411),
    ("HTTP_PRECONDITION_FAILED", 412),
    ("HTTP_REQUEST_ENTITY_TOO_LARGE", 413),
    ("HTTP_REQUEST_URI_TOO_LONG", 414),
    ("HTTP_UNSUPPORTED_MEDIA_TYPE", 415),
    ("HTTP_REQUESTED_RANGE_NOT_SATISFIABLE", 416),
    ("HTTP_EXPECTATION_FAILED", 417),
    ("HTTP_I_AM_A_TEAPOT", 418),
    ("HTTP_MISDIRECTED_REQUEST", 421),
    ("HTTP_UNPROCESSABLE_ENTITY", 422),
    ("HTTP_LOCKED", 423),
    ("HTTP_FAILED_DEPENDENCY", 424),
    ("HTTP_RESERVED_FOR_WEBDAV_ADVANCED_COLLECTIONS_EXPIRED_PROPOSAL", 425),
    ("HTTP_TOO_EARLY", 425),
    ("HTTP_UPGRADE_REQUIRED", 426),
    ("HTTP_PRECONDITION_REQUIRED", 428),
    ("HTTP_TOO_MANY_REQUESTS", 429),
    ("HTTP_REQUEST_HEADER_FIELDS_TOO_LARGE", 431),
    ("HTTP_UNAVAILABLE_FOR_LEGAL_REASONS", 451),
    ("HTTP_INTERNAL_SERVER_ERROR", 500),
    ("HTTP_NOT_IMPLEMENTED", 501),
    ("HTTP_BAD_GATEWAY", 502),
    ("HTTP_SERVICE_UNAVAILABLE", 503),
    ("HTTP_GATEWAY_TIMEOUT", 504),
    ("HTTP_VERSION_NOT_SUPPORTED", 505),
    ("HTTP_VARIANT_ALSO_NEGOTIATES_EXPERIMENTAL", 506),
    ("HTTP_INSUFFICIENT_STORAGE", 507),
    ("HTTP_LOOP_DETECTED", 508),
    ("HTTP_NOT_EXTENDED", 510),
    ("HTTP_NETWORK_AUTHENTICATION_REQUIRED", 511),
]);

#[rustfmt::skip]
static STATUS_TEXTS: &[(u16, &str)] = &[
    (100, "Continue"),
    (101, "Switching Protocols"),
    (102, "Processing"),
    (103, "Early Hints"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (207, "Multi-Status"),
    (208, "Already Reported"),
    (226, "IM Used"),
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Payload Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a teapot"),
    (421, "Misdirected Request"),
    (422, "Unprocessable Entity"),
    (423, "Locked"),
    (424, "Failed Dependency"),
    (425, "Too Early"),
    (426, "Upgrade Required"),
    (428, "Precondition Required"),
    (429, "Too Many Requests"),
    (431, "Request Header Fields Too Large"),
    (451, "Unavailable For Legal Reasons"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (506, "Variant Also Negotiates"),
    (507, "Insufficient Storage"),
    (508, "Loop Detected"),
    (510, "Not Extended"),
    (511, "Network Authentication Required"),
];

/// Canonical reason phrase for a status code, if one is catalogued.
pub fn status_text(code: u16) -> Option<&'static str> {
    STATUS_TEXTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, text)| *text)
}
