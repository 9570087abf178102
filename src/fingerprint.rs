//! Content fingerprinting and duplicate classification.
//!
//! Pages are classified before any of their text reaches analytics: exact
//! duplicates by SHA-256 of the extracted text, repetitive-list traps by a
//! token-uniqueness heuristic, and unusable payloads by cheap precondition
//! checks that run before parsing.

use std::collections::HashSet;
use std::fmt;

use sha2::{Digest, Sha256};

use crate::config::CrawlScopeConfig;
use crate::response::FetchResponse;
use crate::state::CrawlState;
use crate::text::is_pdf_payload;

/// 256-bit digest of a page's normalized visible text. Identical
/// post-normalization text always produces equal fingerprints.
pub type PageFingerprint = [u8; 32];

/// Hash normalized visible text into a fingerprint.
#[must_use]
pub fn fingerprint_text(text: &str) -> PageFingerprint {
    Sha256::digest(text.as_bytes()).into()
}

/// Why a page was skipped before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Non-success HTTP status.
    BadStatus(u16),
    /// Content type does not declare a markup payload.
    NotMarkup,
    /// Declared or actual payload size exceeds the cap.
    Oversized(u64),
    /// PDF magic number found in the body.
    PdfPayload,
    /// The page's own URL does not parse as an absolute URL.
    MalformedSourceUrl,
    /// The page's own URL is outside the crawl scope.
    SourceOutOfScope,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadStatus(status) => write!(f, "status {status}"),
            Self::NotMarkup => write!(f, "content type is not markup"),
            Self::Oversized(len) => write!(f, "payload of {len} bytes exceeds cap"),
            Self::PdfPayload => write!(f, "PDF payload"),
            Self::MalformedSourceUrl => write!(f, "source URL does not parse"),
            Self::SourceOutOfScope => write!(f, "source URL out of scope"),
        }
    }
}

/// Classification of one fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageVerdict {
    /// Novel, information-bearing page; carries the extracted text.
    Fresh { text: String },
    /// Extracted text was byte-identical to a previously seen page.
    ExactDuplicate,
    /// Long page with almost no token diversity, e.g. an auto-generated
    /// index.
    RepetitiveTrap,
    /// Skipped before parsing.
    Skipped(SkipReason),
}

/// Precondition checks that run before any parsing. Returns the skip
/// reason, or `None` when the payload may be parsed.
#[must_use]
pub fn precheck(resp: &FetchResponse, config: &CrawlScopeConfig) -> Option<SkipReason> {
    if !resp.is_success() {
        return Some(SkipReason::BadStatus(resp.status));
    }
    if !resp.declares_markup() {
        return Some(SkipReason::NotMarkup);
    }
    if let Some(declared) = resp.content_length {
        if declared > config.max_page_bytes as u64 {
            return Some(SkipReason::Oversized(declared));
        }
    }
    if resp.body.len() > config.max_page_bytes {
        return Some(SkipReason::Oversized(resp.body.len() as u64));
    }
    if is_pdf_payload(&resp.body) {
        return Some(SkipReason::PdfPayload);
    }
    None
}

/// Classify already-extracted text against the crawl state.
///
/// The duplicate check-then-insert is a single atomic step against the
/// shared fingerprint set; two workers submitting identical text cannot
/// both come out `Fresh`.
#[must_use]
pub fn classify_text(text: String, config: &CrawlScopeConfig, state: &CrawlState) -> PageVerdict {
    let fingerprint = fingerprint_text(&text);
    if !state.insert_fingerprint(fingerprint) {
        return PageVerdict::ExactDuplicate;
    }

    let tokens = config.tokenizer.tokenize(&text);
    if tokens.len() > config.repetitive_token_threshold {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let ratio = distinct.len() as f64 / tokens.len() as f64;
        if ratio < config.repetitive_unique_ratio {
            return PageVerdict::RepetitiveTrap;
        }
    }

    PageVerdict::Fresh { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CrawlScopeConfig {
        CrawlScopeConfig::default()
    }

    #[test]
    fn fingerprints_are_deterministic() {
        assert_eq!(fingerprint_text("faculty news"), fingerprint_text("faculty news"));
        assert_ne!(fingerprint_text("faculty news"), fingerprint_text("faculty news "));
    }

    #[test]
    fn second_identical_text_is_exact_duplicate() {
        let state = CrawlState::new();
        let first = classify_text("faculty research news".to_string(), &config(), &state);
        assert!(matches!(first, PageVerdict::Fresh { .. }));

        let second = classify_text("faculty research news".to_string(), &config(), &state);
        assert_eq!(second, PageVerdict::ExactDuplicate);
    }

    #[test]
    fn low_diversity_long_page_is_repetitive_trap() {
        let state = CrawlState::new();
        // 2000 tokens drawn from 10 distinct words: ratio 0.005
        let text = (0..200)
            .flat_map(|_| (0..10).map(|i| format!("word{i}")))
            .collect::<Vec<_>>()
            .join(" ");
        let verdict = classify_text(text, &config(), &state);
        assert_eq!(verdict, PageVerdict::RepetitiveTrap);
    }

    #[test]
    fn diverse_long_page_is_fresh() {
        let state = CrawlState::new();
        // 2000 tokens drawn from 400 distinct words: ratio 0.2
        let text = (0..5)
            .flat_map(|_| (0..400).map(|i| format!("term{i}")))
            .collect::<Vec<_>>()
            .join(" ");
        let verdict = classify_text(text, &config(), &state);
        assert!(matches!(verdict, PageVerdict::Fresh { .. }));
    }

    #[test]
    fn short_repetitive_page_is_fresh() {
        let state = CrawlState::new();
        // Repetitive but under the 1000-token threshold
        let text = vec!["echo"; 900].join(" ");
        let verdict = classify_text(text, &config(), &state);
        assert!(matches!(verdict, PageVerdict::Fresh { .. }));
    }

    #[test]
    fn precheck_order_and_reasons() {
        let mut resp = FetchResponse {
            status: 404,
            content_type: Some("text/html".to_string()),
            content_length: None,
            body: b"<html></html>".to_vec(),
            final_url: "https://www.ics.uci.edu/".to_string(),
        };
        assert_eq!(precheck(&resp, &config()), Some(SkipReason::BadStatus(404)));

        resp.status = 200;
        resp.content_type = Some("application/pdf".to_string());
        assert_eq!(precheck(&resp, &config()), Some(SkipReason::NotMarkup));

        resp.content_type = Some("text/html".to_string());
        resp.content_length = Some(2_000_000);
        assert_eq!(precheck(&resp, &config()), Some(SkipReason::Oversized(2_000_000)));

        resp.content_length = None;
        resp.body = b"%PDF-1.4 pretending to be html".to_vec();
        assert_eq!(precheck(&resp, &config()), Some(SkipReason::PdfPayload));

        resp.body = b"<html><body>fine</body></html>".to_vec();
        assert_eq!(precheck(&resp, &config()), None);
    }

    #[test]
    fn oversized_actual_body_is_skipped() {
        let resp = FetchResponse {
            status: 200,
            content_type: Some("text/html".to_string()),
            content_length: None,
            body: vec![b'a'; 1_048_577],
            final_url: "https://www.ics.uci.edu/".to_string(),
        };
        assert!(matches!(
            precheck(&resp, &config()),
            Some(SkipReason::Oversized(_))
        ));
    }
}
