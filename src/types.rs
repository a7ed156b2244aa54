use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, TranslateError};
use crate::urls::{is_valid_host, split_host_port};

// ---------------------------------------------------------------------------
// PreScheme
// ---------------------------------------------------------------------------

/// An explicit `http://` / `https://` literal embedded in the request-target.
///
/// Present only when the request line carried a full `scheme://host/path`
/// target instead of a bare path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PreScheme {
    /// The request-target was a bare path.
    #[default]
    None,
    /// The target embedded `http://`.
    Http,
    /// The target embedded `https://`.
    Https,
}

impl PreScheme {
    /// Return the scheme literal, or the empty string when absent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Http => "http://",
            Self::Https => "https://",
        }
    }

    /// `true` when the target embedded a scheme.
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for PreScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PreScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ParsedRequest
// ---------------------------------------------------------------------------

/// The normalized request record every script emitter consumes.
///
/// Immutable once produced: the parser builds it, the translator attaches
/// the body via [`ParsedRequest::with_data`], and emitters only read it.
///
/// `protocol` and `version` are stored verbatim and never validated; a
/// devtools paste with `HTTP//1.b` round-trips unharmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRequest {
    /// First whitespace-delimited token of the request line.
    pub method: String,
    /// Scheme literal embedded in the request-target, if any.
    pub pre_scheme: PreScheme,
    /// Trimmed value of the last Host header line (may carry a port or be
    /// a bracketed IPv6 literal; passed through unexamined).
    pub host: String,
    /// Request-target with any `scheme://authority` prefix removed.
    /// Query, fragment, and parameter characters are preserved verbatim.
    pub path: String,
    /// `"HTTP"` when the request line ended in a token starting with that
    /// literal, else empty.
    pub protocol: String,
    /// Version fragment following the protocol token, possibly malformed.
    pub version: String,
    /// Request body text; empty unless supplied by the orchestrator.
    pub data: String,
}

impl ParsedRequest {
    /// Assemble a record from the parser's raw pieces.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingMethod`] when the method token is empty.
    pub fn new(
        method: impl Into<String>,
        pre_scheme: PreScheme,
        host: impl Into<String>,
        path: impl Into<String>,
        protocol: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, ParseError> {
        let method = method.into();
        if method.is_empty() {
            return Err(ParseError::MissingMethod);
        }
        Ok(Self {
            method,
            pre_scheme,
            host: host.into(),
            path: path.into(),
            protocol: protocol.into(),
            version: version.into(),
            data: String::new(),
        })
    }

    /// Attach body data, consuming the record.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// `true` for methods whose data rides in the URL instead of a body
    /// (`GET`, `HEAD`, `OPTIONS`).
    pub fn encodes_data_in_url(&self) -> bool {
        matches!(self.method.trim(), "GET" | "HEAD" | "OPTIONS")
    }

    /// `true` when the method is POST.
    pub fn is_post(&self) -> bool {
        self.method.trim() == "POST"
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Supported script target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    Bash,
    Php,
    Python,
    Ruby,
}

impl Language {
    /// Return the language name as used on the command line and as the
    /// JSON output key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Php => "php",
            Self::Python => "python",
            Self::Ruby => "ruby",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bash" => Ok(Self::Bash),
            "php" => Ok(Self::Php),
            "python" => Ok(Self::Python),
            "ruby" => Ok(Self::Ruby),
            other => Err(TranslateError::UnknownLanguage(other.to_string())),
        }
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Proxy
// ---------------------------------------------------------------------------

/// A validated proxy endpoint: `[scheme://]host[:port]`.
///
/// [`Proxy::from_str`] is the validator: the optional scheme prefix is
/// stripped, the host must be a plausible hostname / IPv4 / bracketed
/// IPv6 literal, and the port, when present, must be all digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proxy {
    host: String,
    port: Option<String>,
}

impl Proxy {
    /// Proxy host without scheme or port (brackets kept for IPv6).
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Proxy port digits, when one was given.
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// `host` or `host:port`, as the generated scripts consume it.
    pub fn address(&self) -> String {
        match &self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }
}

impl FromStr for Proxy {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || TranslateError::InvalidProxy(s.to_string());

        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .unwrap_or(trimmed);
        if rest.is_empty() {
            return Err(invalid());
        }

        let (host, port) = split_host_port(rest).ok_or_else(invalid)?;
        if !is_valid_host(host) {
            return Err(invalid());
        }
        if let Some(port) = port {
            if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
        }

        Ok(Self {
            host: host.to_string(),
            port: port.map(str::to_string),
        })
    }
}

impl fmt::Display for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}
