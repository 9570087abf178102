//! Scope filtering.
//!
//! Decides whether a normalized URL belongs to the crawl at all. Rules are
//! applied in order and short-circuit on the first rejection; the filter has
//! no side effects and no memory, so every URL is evaluated independently
//! (acceptance of a page never implies acceptance of its sub-paths).

use crate::config::CrawlScopeConfig;
use crate::normalize::CrawlUrl;
use crate::patterns::EXTENSION_DENYLIST;

/// Accept/reject decision shared by the scope filter and trap detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
}

/// Apply the scope rules to a normalized URL.
///
/// In order: scheme must be http/https; host must match an allowed suffix
/// (or the host+path must contain the carve-out prefix); the path must not
/// end in a denylisted extension; the known-dead resource path is rejected
/// unconditionally.
#[must_use]
pub fn check_scope(url: &CrawlUrl, config: &CrawlScopeConfig) -> Verdict {
    if !matches!(url.scheme(), "http" | "https") {
        return Verdict::Reject;
    }

    let Some(host) = url.host() else {
        return Verdict::Reject;
    };

    let host_allowed = config
        .allowed_host_suffixes
        .iter()
        .any(|suffix| host_matches_suffix(host, suffix));
    if !host_allowed && !url.host_and_path().contains(&config.carve_out_prefix) {
        return Verdict::Reject;
    }

    if EXTENSION_DENYLIST.is_match(url.path()) {
        return Verdict::Reject;
    }

    if url.path().contains(&config.dead_resource_path) {
        return Verdict::Reject;
    }

    Verdict::Accept
}

/// Suffix match covering subdomains: `host == suffix` or `host` ends with
/// `.<suffix>`. Plain substring containment would also accept hosts like
/// `ics.uci.edu.evil.com`, which is why it is not used.
fn host_matches_suffix(host: &str, suffix: &str) -> bool {
    host == suffix
        || host
            .strip_suffix(suffix)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
