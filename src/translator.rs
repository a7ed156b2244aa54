use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::TranslateError;
use crate::parser::parse_raw_request;
use crate::script::generate_script;
use crate::types::{Language, ParsedRequest, Proxy};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Caller-supplied knobs for one translation run, as collected by the CLI.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Target language names; empty means the bash default.
    pub languages: Vec<String>,
    /// Proxy endpoint, `[scheme://]host[:port]`.
    pub proxy: Option<String>,
    /// Pattern the generated script highlights in the response body.
    pub search_string: Option<String>,
    /// Request body data.
    pub data: Option<String>,
}

// ---------------------------------------------------------------------------
// Translator
// ---------------------------------------------------------------------------

/// A validated translation run: parsed request plus resolved targets.
///
/// Construction performs every validation the run needs (parse, POST
/// body presence, language names, proxy syntax), so
/// [`Translator::generate_scripts`] can only fail on URL composition.
#[derive(Debug)]
pub struct Translator {
    languages: Vec<Language>,
    proxy: Option<Proxy>,
    search_string: Option<String>,
    header_lines: Vec<String>,
    request: ParsedRequest,
}

impl Translator {
    /// Parse the raw request and validate the options against it.
    ///
    /// # Errors
    ///
    /// * [`TranslateError::Malformed`]: the request text failed to parse.
    /// * [`TranslateError::MissingPostBody`]: POST with no body data.
    /// * [`TranslateError::UnknownLanguage`]: unrecognized target name.
    /// * [`TranslateError::InvalidProxy`]: unusable proxy string.
    pub fn new(raw_request: &str, options: TranslateOptions) -> Result<Self, TranslateError> {
        let (header_lines, parsed) = parse_raw_request(raw_request)?;
        let request = parsed.with_data(options.data.unwrap_or_default());

        if request.is_post() && request.data.is_empty() {
            return Err(TranslateError::MissingPostBody);
        }

        let languages = if options.languages.is_empty() {
            vec![Language::Bash]
        } else {
            options
                .languages
                .iter()
                .map(|name| Language::from_str(name))
                .collect::<Result<Vec<_>, _>>()?
        };

        let proxy = options
            .proxy
            .as_deref()
            .map(Proxy::from_str)
            .transpose()?;

        Ok(Self {
            languages,
            proxy,
            search_string: options.search_string,
            header_lines,
            request,
        })
    }

    /// The normalized request record.
    pub fn request(&self) -> &ParsedRequest {
        &self.request
    }

    /// The preserved Host header lines, in input order.
    pub fn header_lines(&self) -> &[String] {
        &self.header_lines
    }

    /// Resolved target languages, in output order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Render a script per selected language, keyed for JSON output.
    ///
    /// Each script is fully assembled before insertion; the first failing
    /// target fails the whole call.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidUrl`] when the composed URL is
    /// not syntactically usable.
    pub fn generate_scripts(&self) -> Result<BTreeMap<Language, String>, TranslateError> {
        let mut scripts = BTreeMap::new();
        for &language in &self.languages {
            let script = generate_script(
                language,
                &self.header_lines,
                &self.request,
                self.proxy.as_ref(),
                self.search_string.as_deref(),
            )?;
            scripts.insert(language, script);
        }
        Ok(scripts)
    }
}
