use crate::error::ParseError;
use crate::types::{ParsedRequest, PreScheme};

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Split a raw, possibly malformed HTTP request into the original Host
/// header lines and a normalized [`ParsedRequest`].
///
/// The input is what a human pastes from a devtools panel or proxy log:
/// newline-separated, UTF-8, frequently missing pieces a conformant
/// parser would insist on. Accordingly this routine only fails when the
/// request cannot be shaped at all:
///
/// * no method token on the request line,
/// * no request-target token (an *empty* path is still fine),
/// * a header line without a `:` separator,
/// * no Host header in any casing.
///
/// Everything else (absent or garbled `HTTP/x.y` tokens, query/fragment
/// characters in the path, ports and IPv6 brackets in the Host value)
/// passes through verbatim.
///
/// Duplicate Host headers are all collected (original lines, input
/// order) into the returned vector; the **last** one wins as the
/// effective host. Text after the first blank line is body territory and
/// is not examined here; the orchestrator supplies body data separately.
///
/// # Errors
///
/// Returns [`ParseError`] as described above.
pub fn parse_raw_request(raw: &str) -> Result<(Vec<String>, ParsedRequest), ParseError> {
    let mut lines = raw.lines();

    let request_line = loop {
        match lines.next() {
            Some(line) if !line.trim().is_empty() => break line,
            Some(_) => continue,
            None => return Err(ParseError::MissingMethod),
        }
    };
    let (method, target, protocol, version) = parse_request_line(request_line)?;

    let mut host_lines = Vec::new();
    let mut host: Option<String> = None;
    for line in lines {
        if line.trim().is_empty() {
            break;
        }
        let (key, value) = split_header_line(line)?;
        if key.eq_ignore_ascii_case("host") {
            host = Some(value.trim().to_string());
            host_lines.push(line.to_string());
        }
    }
    let host = host.ok_or(ParseError::MissingHostHeader)?;

    let (pre_scheme, path) = split_pre_scheme(target);
    let parsed = ParsedRequest::new(method, pre_scheme, host, path, protocol, version)?;
    Ok((host_lines, parsed))
}

// ---------------------------------------------------------------------------
// Request line
// ---------------------------------------------------------------------------

/// Break a request line into `(method, target, protocol, version)`.
///
/// The trailing whitespace-delimited token is treated as the protocol
/// token when it starts with the literal `HTTP`; the version grammar is
/// never enforced, so `HTTP//1.b` yields version `/1.b` unharmed. With
/// no protocol token the whole remainder is the target.
fn parse_request_line(line: &str) -> Result<(&str, &str, &str, &str), ParseError> {
    let line = line.trim();

    let (method, rest) = match line.split_once(char::is_whitespace) {
        Some((method, rest)) => (method, rest.trim()),
        None if line.is_empty() => return Err(ParseError::MissingMethod),
        None => return Err(ParseError::MissingTarget),
    };
    if rest.is_empty() {
        return Err(ParseError::MissingTarget);
    }

    let (target, protocol, version) = match rest.rsplit_once(char::is_whitespace) {
        Some((before, last)) if last.starts_with("HTTP") => {
            (before.trim_end(), "HTTP", version_of(last))
        }
        None if rest.starts_with("HTTP") => ("", "HTTP", version_of(rest)),
        _ => (rest, "", ""),
    };

    Ok((method, target, protocol, version))
}

/// Version fragment of a protocol token: everything after `HTTP`, minus
/// at most one separating `/`. `HTTP/1.1` → `1.1`, `HTTP//1.b` → `/1.b`,
/// bare `HTTP` → ``.
fn version_of(token: &str) -> &str {
    let v = &token["HTTP".len()..];
    v.strip_prefix('/').unwrap_or(v)
}

/// Detach an embedded `http://` / `https://` prefix from a request-target.
///
/// The authority after the scheme (up to the next `/`, `?`, or
/// whitespace) is discarded: the effective host always comes from the
/// Host header, keeping a single source of truth even when the two
/// disagree. Returns the scheme and the remaining path, which may be
/// empty.
fn split_pre_scheme(target: &str) -> (PreScheme, &str) {
    for (scheme, literal) in [(PreScheme::Https, "https://"), (PreScheme::Http, "http://")] {
        if let Some(idx) = target.find(literal) {
            let after = &target[idx + literal.len()..];
            let path = match after.find(|c: char| c == '/' || c == '?' || c.is_whitespace()) {
                Some(pos) => &after[pos..],
                None => "",
            };
            return (scheme, path);
        }
    }
    (PreScheme::None, target)
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Split a header line on the first `:`.
///
/// The key loses leading whitespace; the value loses leading whitespace
/// only, since trailing whitespace belongs to whoever re-emits the line.
fn split_header_line(line: &str) -> Result<(&str, &str), ParseError> {
    match line.split_once(':') {
        Some((key, value)) => Ok((key.trim_start(), value.trim_start())),
        None => Err(ParseError::MalformedHeader(line.trim().to_string())),
    }
}

// ---------------------------------------------------------------------------
// Tests (unit)
// ---------------------------------------------------------------------------
