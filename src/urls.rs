use url::Url;

use crate::types::PreScheme;

/// Build an absolute URL prefix from a Host value and an optional
/// embedded scheme. Defaults to `http://` when the request-target carried
/// no scheme of its own.
pub fn compose_url(host: &str, pre_scheme: PreScheme) -> String {
    if pre_scheme.is_some() {
        format!("{}{}", pre_scheme.as_str(), host)
    } else {
        format!("http://{host}")
    }
}

/// Syntactic check that a composed URL is usable by the generated scripts.
///
/// No resolution happens here. The URL must parse as WHATWG `http(s)`,
/// contain no whitespace, and carry an authority that is plausible as
/// written: a registered name, `localhost`, a dotted-quad IPv4, or a
/// bracketed IPv6 literal, with an all-digit port when one is present.
/// The literal-authority pass exists because WHATWG normalization quietly
/// accepts hosts such as `127.0.0.` that must be rejected.
pub fn is_valid_url(url: &str) -> bool {
    if url.chars().any(char::is_whitespace) {
        return false;
    }

    let rest = match url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
    {
        Some(rest) => rest,
        None => return false,
    };

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let (host, port) = match split_host_port(authority) {
        Some(pair) => pair,
        None => return false,
    };
    if !is_valid_host(host) {
        return false;
    }
    if let Some(port) = port {
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }

    Url::parse(url).is_ok()
}

/// Split an authority into host and optional port.
///
/// Bracketed IPv6 literals keep their brackets in the host part. Returns
/// `None` when a bracket form is unclosed or followed by anything other
/// than `:port`.
pub(crate) fn split_host_port(authority: &str) -> Option<(&str, Option<&str>)> {
    if let Some(inner) = authority.strip_prefix('[') {
        let close = inner.find(']')?;
        let host = &authority[..close + 2];
        let rest = &inner[close + 1..];
        return match rest.strip_prefix(':') {
            Some(port) => Some((host, Some(port))),
            None if rest.is_empty() => Some((host, None)),
            None => None,
        };
    }

    match authority.rsplit_once(':') {
        Some((host, port)) => Some((host, Some(port))),
        None => Some((authority, None)),
    }
}

/// Plausibility check for a host as written, port excluded.
pub(crate) fn is_valid_host(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    if let Some(inner) = host.strip_prefix('[') {
        let Some(inner) = inner.strip_suffix(']') else {
            return false;
        };
        return !inner.is_empty()
            && inner.contains(':')
            && inner
                .chars()
                .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.');
    }
    if host.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        // Dotted-quad only; anything else numeric falls through and fails
        // the registered-name check below.
        let octets: Vec<&str> = host.split('.').collect();
        return octets.len() == 4
            && octets
                .iter()
                .all(|o| !o.is_empty() && o.len() <= 3 && o.bytes().all(|b| b.is_ascii_digit()));
    }

    // Registered name: dot-separated labels, last label alphabetic-bearing.
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let well_formed = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    });
    let tld = labels[labels.len() - 1];
    well_formed && tld.len() >= 2 && tld.bytes().any(|b| b.is_ascii_alphabetic())
}

// ---------------------------------------------------------------------------
// Tests (unit)
// ---------------------------------------------------------------------------
