//! The per-page policy pipeline.
//!
//! `PolicyEngine` ties the components together: scope-check the source
//! page, classify its content, feed fresh text into the corpus analytics,
//! then normalize and filter every outgoing link. One engine lives for one
//! crawl run and is safe to call from any number of fetch workers.

use tracing::{debug, info, warn};

use crate::config::CrawlScopeConfig;
use crate::encoding::transcode_to_utf8;
use crate::fingerprint::{classify_text, precheck, PageVerdict, SkipReason};
use crate::links::extract_links;
use crate::normalize::CrawlUrl;
use crate::response::FetchResponse;
use crate::scope::{check_scope, Verdict};
use crate::state::CrawlState;
use crate::text::extract_visible_text;
use crate::traps::check_traps;

/// Result of evaluating one fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    /// Content classification of the page itself.
    pub verdict: PageVerdict,
    /// Accepted outgoing links, normalized, in appearance order. These go
    /// straight to the frontier; duplicates within one page are permitted.
    pub links: Vec<String>,
}

impl PageOutcome {
    fn skipped(reason: SkipReason) -> Self {
        Self {
            verdict: PageVerdict::Skipped(reason),
            links: Vec::new(),
        }
    }
}

/// The crawl policy engine for one run.
///
/// Holds the immutable scope configuration and the shared crawl state.
/// All methods take `&self`; the engine is `Sync` and is shared across
/// workers by reference.
#[derive(Debug, Default)]
pub struct PolicyEngine {
    config: CrawlScopeConfig,
    state: CrawlState,
}

impl PolicyEngine {
    #[must_use]
    pub fn new(config: CrawlScopeConfig) -> Self {
        Self {
            config,
            state: CrawlState::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &CrawlScopeConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &CrawlState {
        &self.state
    }

    /// Evaluate one fetched page: classify its content, update analytics
    /// for fresh pages, and return the outgoing links worth queuing.
    pub fn process(&self, resp: &FetchResponse) -> PageOutcome {
        let Ok(source) = CrawlUrl::parse(&resp.final_url) else {
            debug!(url = %resp.final_url, "page skipped: source URL does not parse");
            return PageOutcome::skipped(SkipReason::MalformedSourceUrl);
        };

        if check_scope(&source, &self.config) == Verdict::Reject {
            debug!(url = %source.as_str(), "page skipped: source out of scope");
            return PageOutcome::skipped(SkipReason::SourceOutOfScope);
        }

        if let Some(reason) = precheck(resp, &self.config) {
            debug!(url = %source.as_str(), %reason, "page skipped");
            return PageOutcome::skipped(reason);
        }

        let html = transcode_to_utf8(&resp.body);
        let text = extract_visible_text(&html);
        let verdict = classify_text(text, &self.config, &self.state);

        match &verdict {
            PageVerdict::Fresh { text } => self.record_fresh_page(source.as_str(), text),
            PageVerdict::ExactDuplicate => {
                debug!(url = %source.as_str(), "duplicate content, analytics skipped");
            }
            PageVerdict::RepetitiveTrap => {
                debug!(url = %source.as_str(), "repetitive-list trap, analytics skipped");
            }
            PageVerdict::Skipped(_) => {}
        }

        // Links are followed even off duplicate and repetitive pages; only
        // the analytics treat those as worthless.
        let links = match extract_links(source.as_url(), &html) {
            Ok(candidates) => self.filter_candidates(candidates),
            Err(err) => {
                warn!(url = %source.as_str(), %err, "link extraction failed, page yields no links");
                Vec::new()
            }
        };

        PageOutcome { verdict, links }
    }

    /// Combined scope-plus-trap decision for a single URL string.
    #[must_use]
    pub fn is_valid(&self, url: &str) -> bool {
        is_valid(url, &self.config)
    }

    /// Top tokens by frequency, using the configured report size.
    #[must_use]
    pub fn top_words(&self) -> Vec<(String, u64)> {
        self.state.top_words(self.config.top_k)
    }

    fn record_fresh_page(&self, url: &str, text: &str) {
        let tokens = self.config.tokenizer.tokenize(text);
        if self.state.observe_page_length(url, tokens.len()) {
            info!(url, word_count = tokens.len(), "new longest page");
        }
        self.state
            .accumulate_words(&tokens, self.config.tokenizer.stopwords());
    }

    fn filter_candidates(&self, candidates: Vec<CrawlUrl>) -> Vec<String> {
        candidates
            .into_iter()
            .filter(|url| {
                if check_scope(url, &self.config) == Verdict::Reject {
                    debug!(url = %url.as_str(), "link rejected: out of scope");
                    return false;
                }
                if check_traps(url, &self.config) == Verdict::Reject {
                    debug!(url = %url.as_str(), "link rejected: trap");
                    return false;
                }
                true
            })
            .map(CrawlUrl::into_string)
            .collect()
    }
}

/// Decide whether a URL is worth crawling: it must parse as an absolute
/// URL, pass the scope filter, and pass the trap detector.
#[must_use]
pub fn is_valid(url: &str, config: &CrawlScopeConfig) -> bool {
    CrawlUrl::parse(url).is_ok_and(|parsed| {
        check_scope(&parsed, config) == Verdict::Accept
            && check_traps(&parsed, config) == Verdict::Accept
    })
}
