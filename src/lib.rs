//! # crawl-policy
//!
//! Crawl policy and deduplication engine for a focused web crawler.
//!
//! Given a fetched page, the engine decides which outgoing links are worth
//! re-queuing, detects and discards redundant or low-value content, and
//! maintains running lexical statistics used to judge crawl quality. The
//! HTTP fetch loop and the frontier queue are external collaborators: the
//! fetcher hands in [`FetchResponse`] records, and the accepted links in
//! each [`PageOutcome`] go back out to the frontier.
//!
//! ## Quick Start
//!
//! ```rust
//! use crawl_policy::{CrawlScopeConfig, FetchResponse, PolicyEngine};
//!
//! let engine = PolicyEngine::new(CrawlScopeConfig::default());
//!
//! let resp = FetchResponse {
//!     status: 200,
//!     content_type: Some("text/html".to_string()),
//!     content_length: None,
//!     body: br#"<html><body><p>Lab news.</p><a href="/about/">About</a></body></html>"#.to_vec(),
//!     final_url: "https://www.ics.uci.edu/news/".to_string(),
//! };
//!
//! let outcome = engine.process(&resp);
//! assert_eq!(outcome.links, vec!["https://www.ics.uci.edu/about/"]);
//! ```
//!
//! ## Pipeline
//!
//! Per page: the scope filter validates the source URL, cheap precondition
//! checks weed out unusable payloads, the fingerprinter classifies the
//! extracted text (fresh / exact duplicate / repetitive trap), fresh text
//! feeds the corpus analytics, and every outgoing link runs through
//! normalization, the scope filter, and the trap detector.
//!
//! All shared state lives in one [`CrawlState`] per run; the engine is
//! `Sync` and is called concurrently from fetch workers.

mod error;
mod pipeline;

/// Corpus analytics: tokenizers, word frequencies, longest-page tracking.
pub mod analytics;

/// Crawl scope configuration and thresholds.
pub mod config;

/// Charset detection and transcoding to UTF-8.
pub mod encoding;

/// Content fingerprints and page classification.
pub mod fingerprint;

/// Anchor extraction from raw markup.
pub mod links;

/// URL normalization.
pub mod normalize;

/// Offline analytics over saved page bodies.
pub mod offline;

/// Compiled regex patterns for filtering and tokenization.
pub mod patterns;

/// The fetch-result record handed over by the fetcher.
pub mod response;

/// Scope filtering rules.
pub mod scope;

/// Process-wide crawl state.
pub mod state;

/// Static stopword sets.
pub mod stopwords;

/// Infinite-crawl trap detection.
pub mod traps;

/// Visible-text extraction.
pub mod text;

// Public API - re-exports
pub use analytics::{LongestPageRecord, Tokenizer, WordFrequencyTable};
pub use config::CrawlScopeConfig;
pub use error::{Error, Result};
pub use fingerprint::{PageFingerprint, PageVerdict, SkipReason};
pub use normalize::{normalize, CrawlUrl};
pub use pipeline::{is_valid, PageOutcome, PolicyEngine};
pub use response::FetchResponse;
pub use scope::{check_scope, Verdict};
pub use state::CrawlState;
pub use traps::check_traps;
