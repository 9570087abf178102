//! Compiled regex patterns for URL filtering and tokenization.
//!
//! All patterns are compiled once at startup using `LazyLock` and reused
//! for the lifetime of the crawl run.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Trap Detection Patterns
// =============================================================================

/// Matches `MM-DD-YYYY` dates anywhere in a URL.
pub static DATE_MDY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2}-\d{2}-\d{4}\b").expect("DATE_MDY regex"));

/// Matches `YYYY-MM-DD` dates anywhere in a URL.
pub static DATE_YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").expect("DATE_YMD regex"));

/// Matches `YYYY-MM` prefixes anywhere in a URL.
///
/// The regex crate has no lookahead, so the "not followed by `-DD`" half of
/// the rule lives in `traps::year_month_without_day`.
pub static DATE_YM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}-\d{2}\b").expect("DATE_YM regex"));

/// Matches calendar/event path segments and the tribe-bar-date paging
/// parameter used by a third-party calendar widget.
pub static CALENDAR_TRAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/calendar/|/events/|tribe-bar-date=\d{4}-\d{2}-\d{2}")
        .expect("CALENDAR_TRAP regex")
});

// =============================================================================
// Scope Filter Patterns
// =============================================================================

/// Matches denylisted file extensions, anchored to the end of the URL path.
///
/// Covers binary/media/archive/office/document formats, source-code payloads,
/// and dataset formats that are indexed elsewhere. The text pipeline cannot
/// use any of these, so fetching them wastes crawl budget.
pub static EXTENSION_DENYLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\.(css|js|bmp|gif|jpe?g|ico|png|tiff?|mid|mp2|mp3|mp4|wav|avi|mov|mpeg|ram|m4v|mkv|ogg|ogv|pdf|ps|eps|tex|ppt|pptx|doc|docx|xls|xlsx|names|data|dat|exe|bz2|tar|msi|bin|7z|psd|dmg|iso|epub|dll|cnf|tgz|sha1|thmx|mso|arff|rtf|jar|csv|rm|smil|wmv|swf|wma|zip|rar|gz)$",
    )
    .expect("EXTENSION_DENYLIST regex")
});

// =============================================================================
// Tokenization Patterns
// =============================================================================

/// Broad tokenizer: maximal runs of word characters.
pub static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("WORD_TOKEN regex"));

/// Letters-only tokenizer: runs of lowercase letters and apostrophes.
/// Input must already be lowercased.
pub static LETTER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z']+").expect("LETTER_TOKEN regex"));

/// Matches runs of whitespace for collapse during text normalization.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_patterns_match_url_forms() {
        assert!(DATE_MDY.is_match("http://x.uci.edu/day/03-15-2024/"));
        assert!(DATE_YMD.is_match("http://x.uci.edu/events/2024-03-15/"));
        assert!(DATE_YM.is_match("http://x.uci.edu/archive/2024-03/"));
        assert!(!DATE_YMD.is_match("http://x.uci.edu/about/"));
    }

    #[test]
    fn calendar_trap_matches_paths_and_widget_param() {
        assert!(CALENDAR_TRAP.is_match("http://x.uci.edu/calendar/week"));
        assert!(CALENDAR_TRAP.is_match("http://x.uci.edu/events/seminar"));
        assert!(CALENDAR_TRAP.is_match("http://x.uci.edu/list?tribe-bar-date=2024-03-15"));
        assert!(!CALENDAR_TRAP.is_match("http://x.uci.edu/eventual/"));
    }

    #[test]
    fn extension_denylist_anchored_and_case_insensitive() {
        assert!(EXTENSION_DENYLIST.is_match("/talks/slides.pptx"));
        assert!(EXTENSION_DENYLIST.is_match("/talks/SLIDES.PPTX"));
        assert!(EXTENSION_DENYLIST.is_match("/logo.png"));
        assert!(!EXTENSION_DENYLIST.is_match("/index.html"));
        assert!(!EXTENSION_DENYLIST.is_match("/zipcodes"));
    }

    #[test]
    fn tokenizer_patterns() {
        let words: Vec<_> = WORD_TOKEN.find_iter("don't stop-2024").map(|m| m.as_str()).collect();
        assert_eq!(words, vec!["don", "t", "stop", "2024"]);

        let letters: Vec<_> = LETTER_TOKEN.find_iter("don't stop-2024").map(|m| m.as_str()).collect();
        assert_eq!(letters, vec!["don't", "stop"]);
    }
}
