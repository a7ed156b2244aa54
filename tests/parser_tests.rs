use reqscribe::{ParseError, PreScheme, compose_url, is_valid_url, parse_raw_request};

// =========================================================================
// Request-line parsing
// =========================================================================

#[test]
fn http_version_grid() {
    for i in 0..10 {
        for j in 0..10 {
            let raw = format!("GET /robots.txt HTTP/{i}.{j}\nHost: foo.bar");
            let (host_lines, req) =
                parse_raw_request(&raw).unwrap_or_else(|e| panic!("HTTP/{i}.{j}: {e}"));
            assert_eq!(host_lines, vec!["Host: foo.bar"]);
            assert_eq!(req.method, "GET");
            assert_eq!(req.pre_scheme, PreScheme::None);
            assert_eq!(req.host, "foo.bar");
            assert_eq!(req.path, "/robots.txt");
            assert_eq!(req.protocol, "HTTP");
            assert_eq!(req.version, format!("{i}.{j}"));
            assert_eq!(req.data, "");
        }
    }
}

#[test]
fn missing_protocol_token_is_not_an_error() {
    let raw = "GET /\nHost: foo.bar";
    let (host_lines, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(host_lines, vec!["Host: foo.bar"]);
    assert_eq!(req.method, "GET");
    assert_eq!(req.protocol, "");
    assert_eq!(req.version, "");
    assert_eq!(req.path, "/");
}

#[test]
fn malformed_version_token_passes_through() {
    let raw = "GET / HTTP//1.b\nHost: foo.bar";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.protocol, "HTTP");
    assert_eq!(req.version, "/1.b");
    assert_eq!(req.path, "/");
}

#[test]
fn protocol_token_without_version() {
    let raw = "GET / HTTP\nHost: foo.bar";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.protocol, "HTTP");
    assert_eq!(req.version, "");
}

#[test]
fn empty_path_with_protocol_token_is_valid() {
    // Double space: the target slot is empty but present.
    let raw = "GET  HTTP/1.1\nHost: google.com\nCache-Control: no-cache";
    let (host_lines, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "");
    assert_eq!(req.protocol, "HTTP");
    assert_eq!(req.version, "1.1");
    // Non-Host headers are validated but not preserved.
    assert_eq!(host_lines, vec!["Host: google.com"]);
}

// =========================================================================
// Path preservation
// =========================================================================

#[test]
fn query_string_preserved_in_path() {
    let raw = "GET /?foo=bar HTTP/1.1\nHost: foo.bar";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.path, "/?foo=bar");
}

#[test]
fn fragment_preserved_in_path() {
    let raw = "GET /#foo=bar HTTP/1.1\nHost: foo.bar";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.path, "/#foo=bar");
}

#[test]
fn parameter_segment_preserved_in_path() {
    let raw = "GET /;foo=bar HTTP/1.1\nHost: foo.bar";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.path, "/;foo=bar");
}

// =========================================================================
// Embedded scheme targets
// =========================================================================

#[test]
fn https_target_domain_no_port() {
    let raw = "GET https://google.com/robots.txt HTTP/1.1\nHost: google.com";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.pre_scheme, PreScheme::Https);
    assert_eq!(req.path, "/robots.txt");
    assert_eq!(req.host, "google.com");
}

#[test]
fn https_target_domain_with_port() {
    let raw = "GET https://google.com:31337/robots.txt HTTP/1.1\nHost: google.com:31337";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.pre_scheme, PreScheme::Https);
    assert_eq!(req.path, "/robots.txt");
    assert_eq!(req.host, "google.com:31337");
}

#[test]
fn http_target_yields_http_pre_scheme() {
    let raw = "GET http://google.com/robots.txt HTTP/1.1\nHost: google.com";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.pre_scheme, PreScheme::Http);
    assert_eq!(req.path, "/robots.txt");
}

#[test]
fn https_target_ipv4_with_port() {
    let raw = "GET https://127.0.0.1:31337/robots.txt HTTP/1.1\nHost: 127.0.0.1:31337";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.pre_scheme, PreScheme::Https);
    assert_eq!(req.path, "/robots.txt");
    assert_eq!(req.host, "127.0.0.1:31337");
}

#[test]
fn https_target_ipv6_literal() {
    let raw = "GET https://[::1]/robots.txt HTTP/1.1\nHost: [::1]";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.pre_scheme, PreScheme::Https);
    assert_eq!(req.path, "/robots.txt");
    // Bracket syntax intact, no port split at this layer.
    assert_eq!(req.host, "[::1]");
}

#[test]
fn https_target_ipv6_literal_with_port() {
    let raw = "GET https://[::1]:31337/robots.txt HTTP/1.1\nHost: [::1]:31337";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.pre_scheme, PreScheme::Https);
    assert_eq!(req.path, "/robots.txt");
    assert_eq!(req.host, "[::1]:31337");
}

#[test]
fn scheme_target_with_no_path_yields_empty_path() {
    let raw = "GET https://foo.bar HTTP/1.1\nHost: foo.bar";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.pre_scheme, PreScheme::Https);
    assert_eq!(req.path, "");
}

#[test]
fn scheme_target_query_without_slash() {
    let raw = "GET https://foo.bar?x=1 HTTP/1.1\nHost: foo.bar";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.pre_scheme, PreScheme::Https);
    assert_eq!(req.path, "?x=1");
}

// =========================================================================
// Host header collection
// =========================================================================

#[test]
fn multiple_host_headers_all_preserved_last_wins() {
    let raw = "GET https://foo.bar HTTP/1.1\n\
               Host: foo.bar\n\
               HoSt: foo.baz\n\
               HOST: foo.bar \n\
               host: foo.qux\n\
               host:     foo.bar\n";
    let (host_lines, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(
        host_lines,
        vec![
            "Host: foo.bar",
            "HoSt: foo.baz",
            "HOST: foo.bar ",
            "host: foo.qux",
            "host:     foo.bar",
        ]
    );
    assert_eq!(req.host, "foo.bar");
}

#[test]
fn host_value_trimmed_but_line_kept_verbatim() {
    let raw = "GET / HTTP/1.1\nHOST:   foo.bar  ";
    let (host_lines, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(host_lines, vec!["HOST:   foo.bar  "]);
    assert_eq!(req.host, "foo.bar");
}

#[test]
fn crlf_line_endings_behave_like_lf() {
    let raw = "GET /robots.txt HTTP/1.1\r\nHost: foo.bar\r\n";
    let (host_lines, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(host_lines, vec!["Host: foo.bar"]);
    assert_eq!(req.path, "/robots.txt");
    assert_eq!(req.host, "foo.bar");
}

#[test]
fn leading_blank_lines_skipped() {
    let raw = "\n\nGET / HTTP/1.1\nHost: foo.bar";
    let (_, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(req.method, "GET");
}

#[test]
fn text_after_blank_line_is_ignored() {
    // Body text need not look like headers.
    let raw = "GET / HTTP/1.1\nHost: foo.bar\n\nthis is body text with no colon";
    let (host_lines, req) = parse_raw_request(raw).expect("should parse");
    assert_eq!(host_lines, vec!["Host: foo.bar"]);
    // Body arrives separately from the orchestrator, never scraped here.
    assert_eq!(req.data, "");
}

// =========================================================================
// Error conditions
// =========================================================================

#[test]
fn error_header_line_without_colon() {
    let raw = "GET https://foo.bar HTTP/1.1\nHost";
    assert_eq!(
        parse_raw_request(raw),
        Err(ParseError::MalformedHeader("Host".to_string()))
    );
}

#[test]
fn error_method_without_target() {
    let raw = "GET\nHost: foo.bar";
    assert_eq!(parse_raw_request(raw), Err(ParseError::MissingTarget));
}

#[test]
fn error_empty_input() {
    assert_eq!(parse_raw_request(""), Err(ParseError::MissingMethod));
    assert_eq!(parse_raw_request("\n  \n"), Err(ParseError::MissingMethod));
}

#[test]
fn error_missing_host_header() {
    let raw = "GET /robots.txt HTTP/1.1\nAccept: */*";
    assert_eq!(parse_raw_request(raw), Err(ParseError::MissingHostHeader));
}

#[test]
fn error_missing_host_header_no_headers_at_all() {
    let raw = "GET /robots.txt HTTP/1.1";
    assert_eq!(parse_raw_request(raw), Err(ParseError::MissingHostHeader));
}

// =========================================================================
// URL composer
// =========================================================================

#[test]
fn compose_defaults_to_http() {
    assert_eq!(compose_url("foo.bar", PreScheme::None), "http://foo.bar");
}

#[test]
fn compose_keeps_embedded_scheme() {
    assert_eq!(compose_url("foo.bar", PreScheme::Https), "https://foo.bar");
    assert_eq!(
        compose_url("google.com:31337", PreScheme::Https),
        "https://google.com:31337"
    );
}

#[test]
fn composed_urls_validate() {
    for (host, pre_scheme, path) in [
        ("foo.bar", PreScheme::None, "/robots.txt"),
        ("google.com:31337", PreScheme::Https, "/robots.txt"),
        ("127.0.0.1", PreScheme::Http, "/"),
        ("[::1]:31337", PreScheme::Https, "/x?q=1"),
        ("localhost", PreScheme::None, ""),
    ] {
        let url = compose_url(host, pre_scheme) + path;
        assert!(is_valid_url(&url), "expected valid URL: {url}");
    }
}

#[test]
fn bad_authorities_fail_validation() {
    for url in [
        "http://127.0.0.",
        "http://127.0.0./x",
        "http://foo",
        "http://foo bar/",
        "http://foo.bar:12ab/",
        "http://",
    ] {
        assert!(!is_valid_url(url), "expected invalid URL: {url}");
    }
}
