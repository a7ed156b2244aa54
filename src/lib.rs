//! # reqscribe
//!
//! A **tolerant raw-HTTP-request parser and script generator**, usable as
//! a Rust library and as a CLI tool.
//!
//! reqscribe takes an unstructured HTTP request (pasted from browser
//! devtools, a proxy log, or typed by hand), normalizes it into a
//! structured record, and renders that record as an executable script in
//! one or more target languages (bash, PHP, Python, Ruby), each issuing
//! the same request through its native HTTP client.
//!
//! The parser is deliberately **not** a conformant HTTP/1.x message
//! parser: real-world pastes come with missing protocol tokens, duplicate
//! and case-varying Host headers, embedded `scheme://host:port` targets,
//! IPv6 literals, and query/fragment characters in odd places. All of
//! those pass through; only requests with no recoverable shape are
//! rejected.
//!
//! ## Quick start — parse a pasted request
//!
//! ```rust
//! use reqscribe::parse_raw_request;
//!
//! let raw = "GET /robots.txt HTTP/1.1\nHost: example.com";
//! let (host_lines, request) = parse_raw_request(raw).expect("valid request");
//! assert_eq!(request.method, "GET");
//! assert_eq!(request.path, "/robots.txt");
//! assert_eq!(request.version, "1.1");
//! assert_eq!(request.host, "example.com");
//! assert_eq!(host_lines, vec!["Host: example.com"]);
//! ```
//!
//! ## Quick start — generate scripts
//!
//! ```rust
//! use reqscribe::{translate, Language, TranslateOptions};
//!
//! let raw = "GET / HTTP/1.1\nHost: example.com";
//! let scripts = translate(raw, TranslateOptions::default()).expect("should translate");
//! assert!(scripts[&Language::Bash].contains("'http://example.com/'"));
//! ```

mod error;
mod output;
mod parser;
mod script;
mod translator;
mod types;
mod urls;

// Re-export public API.
pub use error::{ParseError, TranslateError};
pub use output::format_scripts;
pub use parser::parse_raw_request;
pub use script::generate_script;
pub use translator::{TranslateOptions, Translator};
pub use types::{Language, ParsedRequest, PreScheme, Proxy};
pub use urls::{compose_url, is_valid_url};

use std::collections::BTreeMap;

/// Parse a raw request and render every selected target in one call.
///
/// This is a convenience wrapper around [`Translator`]. For access to the
/// parsed record or the preserved Host header lines, create a
/// `Translator` directly.
///
/// # Errors
///
/// Returns [`TranslateError`] on parse failure, failed option
/// validation, or an unusable composed URL.
pub fn translate(
    raw_request: &str,
    options: TranslateOptions,
) -> Result<BTreeMap<Language, String>, TranslateError> {
    Translator::new(raw_request, options)?.generate_scripts()
}
