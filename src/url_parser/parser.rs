use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};
use url::Url;

use super::component::{UrlComponent, UrlPartType};
use super::identifier::ensure_unique_ids;
use super::url_validator::normalize_input;

/// The only failure the parser surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The URL parser rejected the (possibly scheme-prefixed) input
    InvalidUrlFormat,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidUrlFormat => f.write_str("Invalid URL format"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Outcome of one parser call as handed to the presentation layer
///
/// On failure `parts` is empty and `error` carries the message; on success
/// `error` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub parts: Vec<UrlComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<Result<Vec<UrlComponent>, ParseError>> for ParseResult {
    fn from(result: Result<Vec<UrlComponent>, ParseError>) -> Self {
        match result {
            Ok(parts) => ParseResult { parts, error: None },
            Err(e) => ParseResult {
                parts: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Parses user input into a list of toggleable URL components
///
/// Never fails past its boundary: malformed input produces an empty list
/// together with the fixed `Invalid URL format` message.
///
/// # Arguments
/// * `input` - Raw text as typed or pasted by the user
///
/// # Returns
/// * `ParseResult` - The components in display order, or the error
pub fn parse_url(input: &str) -> ParseResult {
    decompose(input).into()
}

/// Same as [`parse_url`] but as a plain `Result`
pub fn decompose(input: &str) -> Result<Vec<UrlComponent>, ParseError> {
    let candidate = normalize_input(input);
    trace!("Parsing candidate URL: {}", candidate);

    let parsed = Url::parse(&candidate).map_err(|e| {
        warn!("Rejected input '{}': {}", candidate, e);
        ParseError::InvalidUrlFormat
    })?;

    let mut parts = components_from_url(&parsed);
    ensure_unique_ids(&mut parts);

    debug!("Decomposed '{}' into {} components", candidate, parts.len());
    Ok(parts)
}

/// Emits components for every non-empty piece of an already parsed URL
pub fn components_from_url(url: &Url) -> Vec<UrlComponent> {
    let mut parts = Vec::new();

    parts.push(UrlComponent::new(
        UrlPartType::Protocol,
        format!("{}:", url.scheme()),
    ));

    if !url.username().is_empty() {
        parts.push(UrlComponent::new(UrlPartType::Username, url.username()));
    }

    if let Some(password) = url.password().filter(|p| !p.is_empty()) {
        parts.push(UrlComponent::new(UrlPartType::Password, password));
    }

    if let Some(host) = url.host_str().filter(|h| !h.is_empty()) {
        parts.push(UrlComponent::new(UrlPartType::Hostname, host));
    }

    // `port()` is None when the port equals the scheme default
    if let Some(port) = url.port() {
        parts.push(UrlComponent::new(UrlPartType::Port, port.to_string()));
    }

    match url.path() {
        "" => {}
        "/" => parts.push(UrlComponent::new(UrlPartType::Pathname, "/").with_description("Root path")),
        path => parts.push(UrlComponent::new(UrlPartType::Pathname, path)),
    }

    for (key, value) in url.query_pairs() {
        trace!("Query parameter: {}={}", key, value);
        parts.push(UrlComponent::search(key, value));
    }

    if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
        parts.push(UrlComponent::new(UrlPartType::Hash, format!("#{}", fragment)));
    }

    parts
}
