use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Scheme assumed for bare domains such as `example.com/path`
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

// One or more letters followed by "://"
static SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+://").unwrap());

/// Returns true when the string starts with a `scheme://` prefix
pub fn has_scheme(url: &str) -> bool {
    SCHEME_RE.is_match(url)
}

/// Returns true when a scheme-less string looks like a pasted domain
///
/// The check is deliberately loose: any dot, as long as the input is not an
/// absolute path.
pub fn looks_like_domain(url: &str) -> bool {
    url.contains('.') && !url.starts_with('/')
}

/// Strips surrounding whitespace, including a leading or trailing BOM
///
/// `str::trim` leaves U+FEFF in place, which would otherwise end up inside
/// the parsed scheme.
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Prepares raw user input for the URL parser
///
/// Trims surrounding whitespace and prepends `https://` to inputs that have
/// no scheme but look like a domain. Anything else is passed through as-is
/// and left for the parser to accept or reject.
pub fn normalize_input(input: &str) -> String {
    let trimmed = trim_input(input);

    if !has_scheme(trimmed) && looks_like_domain(trimmed) {
        debug!("No scheme on '{}', assuming {}", trimmed, DEFAULT_SCHEME_PREFIX);
        return format!("{}{}", DEFAULT_SCHEME_PREFIX, trimmed);
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_detection() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("FTP://files.example.com"));
        assert!(!has_scheme("example.com"));
        assert!(!has_scheme("mailto:someone@example.com"));
        // Digits and '+' are not part of the prefix pattern
        assert!(!has_scheme("svn+ssh://host/repo"));
    }

    #[test]
    fn test_bare_domain_gets_https() {
        assert_eq!(normalize_input("example.com/foo"), "https://example.com/foo");
        assert_eq!(normalize_input("  www.rust-lang.org  "), "https://www.rust-lang.org");
    }

    #[test]
    fn test_input_with_scheme_is_only_trimmed() {
        assert_eq!(normalize_input("\thttp://example.com/\n"), "http://example.com/");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(trim_input("\u{feff} https://a.com \u{feff}"), "https://a.com");
        assert_eq!(normalize_input("\u{feff}https://a.com"), "https://a.com");
        assert_eq!(normalize_input("\u{feff}a.com/x"), "https://a.com/x");
    }

    #[test]
    fn test_non_domain_input_passes_through() {
        assert_eq!(normalize_input("/just/a/path.html"), "/just/a/path.html");
        assert_eq!(normalize_input("not a url, just text"), "not a url, just text");
        assert_eq!(normalize_input("localhost:3000"), "localhost:3000");
    }
}
