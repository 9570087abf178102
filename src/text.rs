//! Visible-text extraction.
//!
//! Parses page markup and produces the text a reader would actually see:
//! script, style, image, and navigation-chrome subtrees are dropped, the
//! remaining text nodes are joined with single spaces, and whitespace runs
//! are collapsed.

use dom_query::Document;

use crate::patterns::WHITESPACE;

/// Elements whose subtrees carry no visible prose.
const NON_CONTENT_SELECTOR: &str = "script, style, img, nav";

/// Sniff for a PDF payload saved under a markup-looking name. The magic
/// number is checked after leading whitespace, independent of any declared
/// content type.
#[must_use]
pub fn is_pdf_payload(body: &[u8]) -> bool {
    let start = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(body.len());
    body[start..].starts_with(b"%PDF-")
}

/// Extract the visible text of an HTML document.
///
/// The parser is error-recovering, so garbage markup degrades to less text
/// rather than a failure.
#[must_use]
pub fn extract_visible_text(html: &str) -> String {
    let doc = Document::from(html);
    doc.select(NON_CONTENT_SELECTOR).remove();

    let body = doc.select("body");
    let Some(root) = body.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for node in root.descendants() {
        if node.is_text() {
            out.push_str(&node.text());
            out.push(' ');
        }
    }

    collapse_whitespace(&out)
}

/// Collapse whitespace runs to single spaces and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_content_elements() {
        let html = r#"<html><head><style>p { color: red; }</style></head>
            <body><nav><a href="/">Home</a></nav>
            <p>Faculty research highlights.</p>
            <script>track("view");</script>
            <img src="banner.png" alt="banner">
            </body></html>"#;
        let text = extract_visible_text(html);
        assert_eq!(text, "Faculty research highlights.");
    }

    #[test]
    fn joins_adjacent_blocks_with_spaces() {
        let html = "<html><body><p>first</p><p>second</p></body></html>";
        assert_eq!(extract_visible_text(html), "first second");
    }

    #[test]
    fn collapses_whitespace_runs() {
        let html = "<html><body><p>spread   out\n\n\ttext</p></body></html>";
        assert_eq!(extract_visible_text(html), "spread out text");
    }

    #[test]
    fn garbage_markup_yields_text_not_panic() {
        let text = extract_visible_text("<p><div><<<unclosed &nonsense; tags");
        assert!(text.contains("unclosed"));
    }

    #[test]
    fn empty_document_yields_empty_text() {
        assert_eq!(extract_visible_text(""), "");
    }

    #[test]
    fn pdf_sniffing() {
        assert!(is_pdf_payload(b"%PDF-1.7 rest"));
        assert!(is_pdf_payload(b"  \n\t%PDF-1.4"));
        assert!(!is_pdf_payload(b"<html>%PDF-</html>"));
        assert!(!is_pdf_payload(b""));
        assert!(!is_pdf_payload(b"   "));
    }
}
