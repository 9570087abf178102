//! The fetch-result record handed over by the external fetcher.

/// Result of a single URL fetch.
///
/// An explicit tagged record: status code, the response headers the policy
/// engine cares about, the raw body, and the final URL after any redirects.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,

    /// `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,

    /// `Content-Length` header, if the server sent one. The actual body
    /// size is checked separately; servers lie.
    pub content_length: Option<u64>,

    /// Raw response body bytes.
    pub body: Vec<u8>,

    /// The URL the response was actually served from.
    pub final_url: String,
}

impl FetchResponse {
    /// Whether the status code indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the declared content type is a markup payload the text
    /// pipeline can use. A missing header counts as not-markup; the body
    /// is skipped rather than sniffed into parsing.
    #[must_use]
    pub fn declares_markup(&self) -> bool {
        self.content_type.as_deref().is_some_and(|ctype| {
            let ctype = ctype.to_ascii_lowercase();
            ctype.contains("text/html") || ctype.contains("application/xhtml")
        })
    }
}
