use std::fmt;

/// Errors produced while splitting a raw request into its structured parts.
///
/// Every variant is fatal for the parse call that raised it; the parser
/// tolerates malformed *values* (bogus versions, odd paths) but not a
/// request it cannot shape at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The request line contains no method token (empty or blank input).
    MissingMethod,
    /// The request line has a method but no request-target token at all.
    ///
    /// An *empty* path is valid (`GET  HTTP/1.1`); a missing target is not.
    MissingTarget,
    /// A line in the header block has no `:` separator.
    MalformedHeader(String),
    /// The header block contains no Host header in any casing.
    MissingHostHeader,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMethod => write!(f, "request line has no method token"),
            Self::MissingTarget => write!(f, "request line has no path or target token"),
            Self::MalformedHeader(line) => {
                write!(f, "header line without ':' separator: '{line}'")
            }
            Self::MissingHostHeader => write!(f, "no Host header found in request"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors produced while orchestrating a translation run.
///
/// [`TranslateError::is_validation`] partitions these into argument
/// validation failures (bad invocation, conventionally exit code `-1`)
/// and errors propagated from the request text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The raw request failed to parse.
    Malformed(ParseError),
    /// The composed URL is not syntactically usable.
    InvalidUrl(String),
    /// The proxy string is not `[scheme://]host[:port]` with a usable host.
    InvalidProxy(String),
    /// The requested target language is not supported.
    UnknownLanguage(String),
    /// The request method is POST but no body data was supplied.
    MissingPostBody,
    /// No request source was given (literal, file, or interactive).
    MissingRequest,
}

impl TranslateError {
    /// `true` for failures of the invocation itself rather than of the
    /// request text: missing request source, POST without body, unknown
    /// language, invalid proxy.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidProxy(_)
                | Self::UnknownLanguage(_)
                | Self::MissingPostBody
                | Self::MissingRequest
        )
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "malformed request: {e}"),
            Self::InvalidUrl(url) => write!(f, "invalid URL: '{url}'"),
            Self::InvalidProxy(proxy) => write!(f, "invalid proxy: '{proxy}'"),
            Self::UnknownLanguage(lang) => write!(f, "unknown target language: '{lang}'"),
            Self::MissingPostBody => write!(f, "POST request requires body data"),
            Self::MissingRequest => write!(f, "no HTTP request provided"),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for TranslateError {
    fn from(e: ParseError) -> Self {
        Self::Malformed(e)
    }
}
