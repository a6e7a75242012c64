//! Link URL normalization

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left untouched when encoding an href, matching `encodeURI`
const HREF_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Normalize a user-entered link URL
///
/// Input not starting with `http://` or `https://` (any case) gets `http://`
/// prepended. The result must parse as a URL; `None` means it did not.
///
/// # Example
/// ```
/// use linkshelf::shelf::url::format_url;
///
/// assert_eq!(format_url("example.com").as_deref(), Some("http://example.com"));
/// ```
pub fn format_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    let formatted = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    // Keep the user's spelling; Url::to_string would add a trailing slash
    match Url::parse(&formatted) {
        Ok(_) => Some(formatted),
        Err(e) => {
            tracing::warn!(url = raw, error = %e, "Invalid URL");
            None
        }
    }
}

/// Percent-encode a stored URL for display as an href
pub fn encode_href(url: &str) -> String {
    utf8_percent_encode(url, HREF_ENCODE_SET).to_string()
}

/// Whether `s` starts with `http://` or `https://`, ignoring case
fn has_http_scheme(s: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        s.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain() {
        assert_eq!(
            format_url("example.com").as_deref(),
            Some("http://example.com")
        );
    }

    #[test]
    fn test_keeps_existing_scheme() {
        assert_eq!(
            format_url("https://example.com/a?b=c").as_deref(),
            Some("https://example.com/a?b=c")
        );
        assert_eq!(
            format_url("HTTPS://Example.com").as_deref(),
            Some("HTTPS://Example.com")
        );
    }

    #[test]
    fn test_other_schemes_get_http_prefix() {
        assert_eq!(
            format_url("ftp://files.example.com").as_deref(),
            Some("http://ftp://files.example.com")
        );
        assert_eq!(
            format_url("javascript://%0aalert(1)").as_deref(),
            Some("http://javascript://%0aalert(1)")
        );
        assert_eq!(
            format_url("file:///etc/passwd").as_deref(),
            Some("http://file:///etc/passwd")
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            format_url("  example.com/docs  ").as_deref(),
            Some("http://example.com/docs")
        );
    }

    #[test]
    fn test_invalid() {
        assert!(format_url("not a valid host").is_none());
        assert!(format_url("http://").is_none());
        assert!(format_url("example.com:notaport").is_none());
    }

    #[test]
    fn test_has_http_scheme() {
        assert!(has_http_scheme("http://x"));
        assert!(has_http_scheme("HtTpS://x"));
        assert!(!has_http_scheme("git+ssh://x"));
        assert!(!has_http_scheme("javascript://x"));
        assert!(!has_http_scheme("example.com"));
        assert!(!has_http_scheme("http:/x"));
        assert!(!has_http_scheme("caf\u{e9}://x"));
        assert!(!has_http_scheme("example.com/redirect?to=http://x"));
    }

    #[test]
    fn test_encode_href() {
        assert_eq!(
            encode_href("http://example.com/a b?q=1&r=2#top"),
            "http://example.com/a%20b?q=1&r=2#top"
        );
        assert_eq!(
            encode_href("http://example.com/caf\u{e9}"),
            "http://example.com/caf%C3%A9"
        );
        assert_eq!(encode_href("http://x/100%"), "http://x/100%25");
    }
}
