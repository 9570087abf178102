//! Charset detection and transcoding to UTF-8.
//!
//! Saved and fetched page bodies arrive as raw bytes in whatever encoding
//! the origin server used. Before parsing, the body is converted to UTF-8
//! based on the meta-tag charset declaration, falling back to UTF-8 with
//! lossy replacement when no declaration is present.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// `<meta charset="...">`
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// `<meta http-equiv="Content-Type" content="...; charset=...">`
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Detect the declared encoding from the first KiB of the payload.
#[must_use]
pub fn detect_encoding(body: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&body[..body.len().min(1024)]);

    for pattern in [&*META_CHARSET, &*HTTP_EQUIV_CHARSET] {
        if let Some(label) = pattern.captures(&head).and_then(|c| c.get(1)) {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Transcode a page body to a UTF-8 string, replacing invalid sequences
/// with the Unicode replacement character rather than failing.
#[must_use]
pub fn transcode_to_utf8(body: &[u8]) -> String {
    let encoding = detect_encoding(body);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}
