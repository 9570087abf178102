//! URL normalization.
//!
//! Turns a (base, href) pair into a single canonical absolute URL:
//! relative references are resolved per RFC 3986, fragments are stripped,
//! and query strings are preserved (they are policy-relevant, not noise).

use url::Url;

use crate::error::{Error, Result};

/// Schemes that anchor tags carry but that can never be fetched.
const NON_FETCHABLE_SCHEMES: [&str; 4] = ["javascript:", "mailto:", "tel:", "data:"];

/// A canonical absolute URL produced by [`normalize`].
///
/// Invariants: always fragment-free, scheme lowercased (the `url` crate
/// normalizes schemes on parse). Immutable once produced; consumed by a
/// single accept/reject decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlUrl {
    inner: Url,
}

impl CrawlUrl {
    /// Parse an absolute URL string into a `CrawlUrl`, stripping any fragment.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut url = Url::parse(s).map_err(|_| Error::MalformedHref(s.to_string()))?;
        url.set_fragment(None);
        Ok(Self { inner: url })
    }

    /// The full URL as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// The lowercase scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.inner.scheme()
    }

    /// The host, if any.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.inner.host_str()
    }

    /// The URL path.
    #[must_use]
    pub fn path(&self) -> &str {
        self.inner.path()
    }

    /// The query string, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.inner.query()
    }

    /// Host and path concatenated, used by the carve-out scope rule.
    #[must_use]
    pub fn host_and_path(&self) -> String {
        format!("{}{}", self.host().unwrap_or_default(), self.path())
    }

    /// Borrow the parsed form, for use as a resolution base.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.inner
    }

    /// Consume into the owned URL string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner.into()
    }
}

/// Resolve a raw href against a base URL into a canonical absolute URL.
///
/// Empty hrefs, fragment-only hrefs, and non-fetchable schemes
/// (`javascript:`, `mailto:`, `tel:`, `data:`) resolve to
/// [`Error::MalformedHref`]; callers drop those silently rather than
/// treating them as crawl errors. Pure function, idempotent on its own
/// output.
pub fn normalize(base: &Url, href: &str) -> Result<CrawlUrl> {
    let href = href.trim();

    if href.is_empty() || href.chars().all(|c| c == '#') {
        return Err(Error::MalformedHref(href.to_string()));
    }

    let lower = href.to_ascii_lowercase();
    if NON_FETCHABLE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return Err(Error::MalformedHref(href.to_string()));
    }

    let mut resolved = base
        .join(href)
        .map_err(|_| Error::MalformedHref(href.to_string()))?;
    resolved.set_fragment(None);

    Ok(CrawlUrl { inner: resolved })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn base() -> Url {
        Url::parse("https://www.ics.uci.edu/research/index.html").unwrap()
    }

    #[test]
    fn resolves_relative_references() {
        let url = normalize(&base(), "page.html").unwrap();
        assert_eq!(url.as_str(), "https://www.ics.uci.edu/research/page.html");

        let url = normalize(&base(), "/grad/").unwrap();
        assert_eq!(url.as_str(), "https://www.ics.uci.edu/grad/");

        let url = normalize(&base(), "../about/").unwrap();
        assert_eq!(url.as_str(), "https://www.ics.uci.edu/about/");
    }

    #[test]
    fn strips_fragments() {
        let url = normalize(&base(), "page.html#section2").unwrap();
        assert!(!url.as_str().contains('#'));
        assert_eq!(url.as_str(), "https://www.ics.uci.edu/research/page.html");
    }

    #[test]
    fn preserves_query_strings() {
        let url = normalize(&base(), "search?q=grad&page=2").unwrap();
        assert_eq!(url.query(), Some("q=grad&page=2"));
    }

    #[test]
    fn idempotent_on_normalized_output() {
        let first = normalize(&base(), "page.html?x=1#frag").unwrap();
        let second = normalize(&base(), first.as_str()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_empty_and_fragment_only() {
        assert!(normalize(&base(), "").is_err());
        assert!(normalize(&base(), "   ").is_err());
        assert!(normalize(&base(), "#").is_err());
    }

    #[test]
    fn same_page_anchor_resolves_to_base_without_fragment() {
        let url = normalize(&base(), "#top").unwrap();
        assert_eq!(url.as_str(), "https://www.ics.uci.edu/research/index.html");
    }

    #[test]
    fn rejects_non_fetchable_schemes() {
        assert!(normalize(&base(), "javascript:void(0)").is_err());
        assert!(normalize(&base(), "mailto:chair@ics.uci.edu").is_err());
        assert!(normalize(&base(), "tel:+19498245011").is_err());
        assert!(normalize(&base(), "data:text/plain,hi").is_err());
        assert!(normalize(&base(), "MAILTO:chair@ics.uci.edu").is_err());
    }

    #[test]
    fn absolute_href_replaces_base() {
        let url = normalize(&base(), "http://cs.uci.edu/news/").unwrap();
        assert_eq!(url.as_str(), "http://cs.uci.edu/news/");
    }

    #[test]
    fn parse_rejects_relative_strings() {
        assert!(CrawlUrl::parse("/relative/path").is_err());
        assert!(CrawlUrl::parse("").is_err());
    }
}
