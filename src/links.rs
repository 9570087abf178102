//! Anchor extraction from raw page markup.

use dom_query::{Document, Selection};
use url::Url;

use crate::error::Result;
use crate::normalize::{normalize, CrawlUrl};

/// Collect candidate links from a page, in appearance order.
///
/// Every `a[href]` is resolved against the page URL and defragmented;
/// hrefs that cannot be resolved (empty, fragment-only, `javascript:`,
/// `mailto:`) are dropped silently. Duplicates within one page are kept —
/// deduplication against previously queued URLs belongs to the frontier.
///
/// The underlying parser is error-recovering, so broken markup degrades to
/// fewer links; `Err` is reserved for markup the parser cannot represent as
/// a document at all.
pub fn extract_links(page_url: &Url, html: &str) -> Result<Vec<CrawlUrl>> {
    let doc = Document::from(html);

    let mut links = Vec::new();
    for node in doc.select("a[href]").nodes() {
        let anchor = Selection::from(*node);
        let Some(href) = anchor.attr("href") else {
            continue;
        };
        if let Ok(url) = normalize(page_url, &href) {
            links.push(url);
        }
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn base() -> Url {
        Url::parse("https://www.ics.uci.edu/grad/index.html").unwrap()
    }

    fn link_strings(html: &str) -> Vec<String> {
        extract_links(&base(), html)
            .unwrap()
            .into_iter()
            .map(CrawlUrl::into_string)
            .collect()
    }

    #[test]
    fn appearance_order_and_resolution() {
        let html = r#"<html><body>
            <a href="admissions.html">Admissions</a>
            <a href="/research/">Research</a>
            <a href="http://cs.uci.edu/">CS</a>
            </body></html>"#;
        assert_eq!(
            link_strings(html),
            vec![
                "https://www.ics.uci.edu/grad/admissions.html",
                "https://www.ics.uci.edu/research/",
                "http://cs.uci.edu/",
            ]
        );
    }

    #[test]
    fn malformed_hrefs_dropped_silently() {
        let html = r##"<html><body>
            <a href="">empty</a>
            <a href="#">hash</a>
            <a href="javascript:void(0)">js</a>
            <a href="mailto:chair@ics.uci.edu">mail</a>
            <a href="contact.html">real</a>
            </body></html>"##;
        assert_eq!(
            link_strings(html),
            vec!["https://www.ics.uci.edu/grad/contact.html"]
        );
    }

    #[test]
    fn duplicates_within_page_are_kept() {
        let html = r#"<a href="a.html">one</a><a href="a.html">two</a>"#;
        assert_eq!(link_strings(html).len(), 2);
    }

    #[test]
    fn fragments_stripped_from_links() {
        let html = r#"<a href="page.html#section2">anchored</a>"#;
        assert_eq!(
            link_strings(html),
            vec!["https://www.ics.uci.edu/grad/page.html"]
        );
    }

    #[test]
    fn anchors_without_href_ignored() {
        let html = r#"<a name="top">anchor</a><a href="next.html">next</a>"#;
        assert_eq!(link_strings(html).len(), 1);
    }
}
