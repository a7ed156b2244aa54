//! Script emitters.
//!
//! Each target language supplies a [`Fragments`] implementation, a small
//! set of composable text blocks; one shared [`render`] routine decides
//! which blocks appear, keyed on the request method and on proxy/search
//! presence. The four emitters stay structurally identical; only the
//! text differs.

mod bash;
mod php;
mod python;
mod ruby;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::TranslateError;
use crate::types::{Language, ParsedRequest, Proxy};
use crate::urls::{compose_url, is_valid_url};

/// Bytes left bare when request data is folded into a URL: the
/// unreserved set, everything else percent-encoded.
const URL_DATA: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

// ---------------------------------------------------------------------------
// Render plan
// ---------------------------------------------------------------------------

/// One request header ready for emission.
pub(crate) struct HeaderField {
    pub(crate) name: String,
    pub(crate) value: String,
}

/// Everything a fragment set may consult while rendering one script.
pub(crate) struct RenderPlan<'a> {
    pub(crate) url: &'a str,
    pub(crate) https: bool,
    pub(crate) method: &'a str,
    pub(crate) headers: &'a [HeaderField],
    pub(crate) body: Option<&'a str>,
    pub(crate) proxy: Option<&'a Proxy>,
    pub(crate) search: Option<&'a str>,
}

/// Per-language text blocks. Implementations only produce text; block
/// selection lives in [`render`].
pub(crate) trait Fragments {
    /// Opening lines: interpreter line / imports, URL, request setup.
    fn prelude(&self, plan: &RenderPlan) -> String;
    /// One header-setting line.
    fn header_line(&self, name: &str, value: &str) -> String;
    /// Body attachment (POST only).
    fn body_block(&self, body: &str) -> String;
    /// Connection setup without a proxy.
    fn connection_block(&self, plan: &RenderPlan) -> String;
    /// Connection setup through a proxy.
    fn proxy_block(&self, plan: &RenderPlan, proxy: &Proxy) -> String;
    /// TLS enablement for https URLs.
    fn tls_block(&self, plan: &RenderPlan) -> String;
    /// Issue the request and print the response.
    fn response_block(&self, plan: &RenderPlan) -> String;
    /// Issue the request and print the response with matches highlighted.
    fn search_block(&self, plan: &RenderPlan, pattern: &str) -> String;
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Render one target language's script for a parsed request.
///
/// The script is fully assembled before being returned; a failure leaves
/// nothing half-emitted.
///
/// # Errors
///
/// Returns [`TranslateError::InvalidUrl`] when the composed URL does not
/// survive syntactic validation.
pub fn generate_script(
    language: Language,
    header_lines: &[String],
    parsed: &ParsedRequest,
    proxy: Option<&Proxy>,
    search: Option<&str>,
) -> Result<String, TranslateError> {
    let mut url = compose_url(&parsed.host, parsed.pre_scheme);
    url.push_str(&parsed.path);
    if parsed.encodes_data_in_url() && !parsed.data.is_empty() {
        url.push_str(&utf8_percent_encode(&parsed.data, URL_DATA).to_string());
    }
    if !is_valid_url(&url) {
        return Err(TranslateError::InvalidUrl(url));
    }

    let headers = header_fields(header_lines);
    let plan = RenderPlan {
        https: url.starts_with("https://"),
        url: &url,
        method: parsed.method.trim(),
        headers: &headers,
        body: if parsed.is_post() && !parsed.data.is_empty() {
            Some(parsed.data.as_str())
        } else {
            None
        },
        proxy,
        search,
    };

    let fragments: &dyn Fragments = match language {
        Language::Bash => &bash::Bash,
        Language::Php => &php::Php,
        Language::Python => &python::Python,
        Language::Ruby => &ruby::Ruby,
    };
    Ok(render(fragments, &plan))
}

/// Stitch the selected blocks into a complete script.
fn render(f: &dyn Fragments, plan: &RenderPlan) -> String {
    let mut out = f.prelude(plan);
    for header in plan.headers {
        out.push_str(&f.header_line(&header.name, &header.value));
    }
    if let Some(body) = plan.body {
        out.push_str(&f.body_block(body));
    }
    match plan.proxy {
        Some(proxy) => out.push_str(&f.proxy_block(plan, proxy)),
        None => out.push_str(&f.connection_block(plan)),
    }
    if plan.https {
        out.push_str(&f.tls_block(plan));
    }
    match plan.search {
        Some(pattern) => out.push_str(&f.search_block(plan, pattern)),
        None => out.push_str(&f.response_block(plan)),
    }
    out
}

/// Re-split preserved header lines into name/value pairs for emission.
fn header_fields(header_lines: &[String]) -> Vec<HeaderField> {
    header_lines
        .iter()
        .map(|line| match line.split_once(':') {
            Some((name, value)) => HeaderField {
                name: name.trim().to_string(),
                value: value.trim().to_string(),
            },
            // Unreachable for parser-produced lines; keep the line intact.
            None => HeaderField {
                name: line.trim().to_string(),
                value: String::new(),
            },
        })
        .collect()
}
