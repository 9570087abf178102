//! Infinite-crawl trap detection.
//!
//! A trap is a URL whose structure encodes a near-unbounded parameter space
//! yielding many distinct URLs with near-identical content; calendar pages
//! parameterized by date are the canonical case. The detector runs on URLs
//! the scope filter has already accepted, and a URL must pass every check
//! here to be accepted.

use crate::config::CrawlScopeConfig;
use crate::normalize::CrawlUrl;
use crate::patterns::{CALENDAR_TRAP, DATE_MDY, DATE_YM, DATE_YMD};
use crate::scope::Verdict;

/// Apply the trap checks to a normalized, in-scope URL.
///
/// Order matters only for cost: the structural date patterns catch the bulk
/// of traps cheaply, the substring denylist catches site-specific dead ends
/// that follow no date pattern, and the calendar-path check catches the rest.
#[must_use]
pub fn check_traps(url: &CrawlUrl, config: &CrawlScopeConfig) -> Verdict {
    let full = url.as_str();

    if matches_date_trap(full) {
        return Verdict::Reject;
    }

    if config
        .url_substring_denylist
        .iter()
        .any(|needle| full.contains(needle.as_str()))
    {
        return Verdict::Reject;
    }

    if CALENDAR_TRAP.is_match(full) {
        return Verdict::Reject;
    }

    Verdict::Accept
}

/// True when the URL carries a date in any of the three encodings the target
/// sites use: `MM-DD-YYYY`, `YYYY-MM-DD`, or `YYYY-MM` not followed by a day
/// component. Checking only one form lets trap URLs of the other forms
/// through.
pub(crate) fn matches_date_trap(url: &str) -> bool {
    DATE_MDY.is_match(url) || DATE_YMD.is_match(url) || year_month_without_day(url)
}

/// `YYYY-MM` matches that are not immediately followed by `-DD`. The full
/// `YYYY-MM-DD` form is handled by its own pattern, so this only needs to
/// catch bare month URLs like `/archive/2024-03/`.
fn year_month_without_day(url: &str) -> bool {
    DATE_YM.find_iter(url).any(|m| {
        let rest = &url.as_bytes()[m.end()..];
        let followed_by_day = rest.len() >= 3
            && rest[0] == b'-'
            && rest[1].is_ascii_digit()
            && rest[2].is_ascii_digit();
        !followed_by_day
    })
}
