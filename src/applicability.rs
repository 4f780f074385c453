//! Applicability check for article URLs.
//!
//! Decides whether a page address looks like a news-article page at all.
//! The check gates the whole pipeline: callers should not run extraction on
//! pages that fail it. It is pure and idempotent, so the host may call it as
//! often as it likes.

/// Marker substrings that identify article URLs across common news CMSes.
///
/// Matching is plain substring containment, so a marker appearing anywhere
/// in the URL (path or query string) counts.
pub const DEFAULT_URL_MARKERS: &[&str] = &[
    "/article/",
    "/news/",
    "/view/",
    "/read/",
    "/story/",
    "/media/",
    "/contents/",
    "/section/",
    "/articles/",
    "/reports/",
    "/breaking/",
];

/// Returns true iff the URL contains at least one marker substring.
///
/// Matching is case-sensitive and unanchored. An empty marker set always
/// returns false: ambiguous pages must not activate the engine.
///
/// # Example
///
/// ```rust
/// use newsbrief::applicability::{is_supported_article_url, DEFAULT_URL_MARKERS};
///
/// assert!(is_supported_article_url(
///     "https://site.example/news/123",
///     DEFAULT_URL_MARKERS,
/// ));
/// assert!(!is_supported_article_url(
///     "https://site.example/shop/1",
///     DEFAULT_URL_MARKERS,
/// ));
/// ```
#[must_use]
pub fn is_supported_article_url<S: AsRef<str>>(url: &str, markers: &[S]) -> bool {
    markers.iter().any(|marker| url.contains(marker.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_in_path_matches() {
        assert!(is_supported_article_url(
            "https://news.example.com/article/20250114",
            DEFAULT_URL_MARKERS,
        ));
        assert!(is_supported_article_url(
            "https://portal.example.com/view/economy/993",
            DEFAULT_URL_MARKERS,
        ));
    }

    #[test]
    fn marker_in_query_string_matches() {
        // Unanchored containment: query strings count too
        assert!(is_supported_article_url(
            "https://portal.example.com/redirect?target=/news/482",
            DEFAULT_URL_MARKERS,
        ));
    }

    #[test]
    fn non_article_urls_do_not_match() {
        assert!(!is_supported_article_url(
            "https://site.example/shop/1",
            DEFAULT_URL_MARKERS,
        ));
        assert!(!is_supported_article_url("", DEFAULT_URL_MARKERS));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!is_supported_article_url(
            "https://site.example/NEWS/123",
            DEFAULT_URL_MARKERS,
        ));
    }

    #[test]
    fn empty_marker_set_fails_closed() {
        let markers: &[&str] = &[];
        assert!(!is_supported_article_url(
            "https://site.example/news/123",
            markers,
        ));
    }
}
