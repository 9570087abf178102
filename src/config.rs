//! Crawl scope configuration.
//!
//! `CrawlScopeConfig` is built once at startup and never mutated afterwards.
//! The defaults describe the UCI ICS crawl this engine was written for; the
//! fields exist so deployments against other site families stay possible
//! without touching the filter code.

use std::collections::HashSet;

use crate::analytics::Tokenizer;

/// Maximum accepted page payload: 1 MiB.
pub const MAX_PAGE_BYTES: usize = 1_048_576;

/// Token count above which the uniqueness-ratio trap check applies.
pub const REPETITIVE_TOKEN_THRESHOLD: usize = 1000;

/// Distinct/total token ratio below which a long page is a repetitive trap.
pub const REPETITIVE_UNIQUE_RATIO: f64 = 0.05;

/// Number of tokens in the crawl-end frequency report.
pub const TOP_K: usize = 50;

/// Immutable configuration for scope filtering, trap detection, and
/// analytics thresholds.
#[derive(Debug, Clone)]
pub struct CrawlScopeConfig {
    /// Host suffixes the crawl may fetch from. A host is in scope when it
    /// equals a suffix or ends with `.<suffix>`, so subdomains are covered
    /// without enumeration.
    pub allowed_host_suffixes: Vec<String>,

    /// One host+path prefix allowed outside the host suffixes: a department
    /// page tree hosted on an otherwise out-of-scope domain.
    pub carve_out_prefix: String,

    /// Substrings that mark a URL as a known dead end: wiki edit/login
    /// actions, iCal export endpoints, code-hosting and staging mirrors,
    /// and specific dead subtrees. Plain substring tests, not regexes.
    pub url_substring_denylist: Vec<String>,

    /// A retired informational page rejected unconditionally.
    pub dead_resource_path: String,

    /// Hosts whose saved pages are skipped entirely in offline analytics.
    pub low_value_hosts: HashSet<String>,

    /// Pages larger than this (declared or actual) are skipped unparsed.
    pub max_page_bytes: usize,

    /// Minimum token count before the repetitive-trap ratio check applies.
    pub repetitive_token_threshold: usize,

    /// Uniqueness ratio below which a long page is a repetitive-list trap.
    pub repetitive_unique_ratio: f64,

    /// Report size for the crawl-end word-frequency listing.
    pub top_k: usize,

    /// Tokenizer variant; determines the paired stopword set.
    pub tokenizer: Tokenizer,
}

impl Default for CrawlScopeConfig {
    fn default() -> Self {
        Self {
            allowed_host_suffixes: vec![
                "ics.uci.edu".to_string(),
                "cs.uci.edu".to_string(),
                "informatics.uci.edu".to_string(),
                "stat.uci.edu".to_string(),
            ],
            carve_out_prefix: "today.uci.edu/department/information_computer_sciences/"
                .to_string(),
            url_substring_denylist: vec![
                "action=edit".to_string(),
                "action=login".to_string(),
                "action=diff".to_string(),
                "do=edit".to_string(),
                "do=login".to_string(),
                "ical=1".to_string(),
                "format=ics".to_string(),
                "gitlab.ics.uci.edu".to_string(),
                "staging.ics.uci.edu".to_string(),
                "grape.ics.uci.edu/wiki".to_string(),
                "~eppstein/pix".to_string(),
            ],
            dead_resource_path: "/~mlearn/MLRepository".to_string(),
            low_value_hosts: ["studentcouncil.ics.uci.edu".to_string()]
                .into_iter()
                .collect(),
            max_page_bytes: MAX_PAGE_BYTES,
            repetitive_token_threshold: REPETITIVE_TOKEN_THRESHOLD,
            repetitive_unique_ratio: REPETITIVE_UNIQUE_RATIO,
            top_k: TOP_K,
            tokenizer: Tokenizer::default(),
        }
    }
}
