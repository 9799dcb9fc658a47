/// Treat an empty attribute value the same as a missing one.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Drop placeholder URLs: blank, a bare `#`, or a `javascript:` pseudo-URL.
/// Anything else is returned untouched (no trimming, no normalization).
pub fn sanitize_url(url: Option<&str>) -> Option<&str> {
    let url = url?;
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed == "#" || starts_with_ignore_ascii_case(trimmed, "javascript:")
    {
        return None;
    }
    Some(url)
}

fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Strip the surrounding double quotes of a structured header value
/// (`Sec-CH-UA-Platform: "Android"`).
pub(crate) fn unquote(value: &str) -> &str {
    let v = value.trim();
    v.strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_dropped() {
        for url in ["", "   ", "#", " # ", "JavaScript:void(0)", "javascript:"] {
            assert_eq!(sanitize_url(Some(url)), None, "{url:?}");
        }
        assert_eq!(sanitize_url(None), None);
    }

    #[test]
    fn real_urls_pass_through_unmodified() {
        for url in ["https://example.com", " https://x.test/a ", "/relative", "#anchor"] {
            assert_eq!(sanitize_url(Some(url)), Some(url));
        }
    }

    #[test]
    fn short_input_is_not_javascript() {
        assert_eq!(sanitize_url(Some("java")), Some("java"));
    }

    #[test]
    fn unquote_header() {
        assert_eq!(unquote("\"Android\""), "Android");
        assert_eq!(unquote(" macOS "), "macOS");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn empty_counts_as_absent() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("x")), Some("x"));
    }
}
