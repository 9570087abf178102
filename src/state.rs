//! Process-wide crawl state.
//!
//! One `CrawlState` lives for one crawl run and is shared by reference (or
//! behind an `Arc`) across every fetch worker. Each piece of state sits
//! behind its own mutex, held only for the read-check-write step; all
//! per-page computation happens outside any lock.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::analytics::{LongestPageRecord, WordFrequencyTable};
use crate::fingerprint::PageFingerprint;

/// Shared mutable state for one crawl run.
#[derive(Debug, Default)]
pub struct CrawlState {
    seen: Mutex<HashSet<PageFingerprint>>,
    words: Mutex<WordFrequencyTable>,
    longest: Mutex<LongestPageRecord>,
}

/// Recover from a poisoned lock. The guarded data is append-only sets and
/// counters, still valid if a panicking thread held the guard.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl CrawlState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomic check-then-insert against the seen-fingerprint set. Returns
    /// true when the fingerprint was novel.
    pub fn insert_fingerprint(&self, fingerprint: PageFingerprint) -> bool {
        lock(&self.seen).insert(fingerprint)
    }

    /// Number of distinct fingerprints recorded so far.
    #[must_use]
    pub fn fingerprint_count(&self) -> usize {
        lock(&self.seen).len()
    }

    /// Merge one page's tokens into the global frequency table.
    pub fn accumulate_words(
        &self,
        tokens: &[String],
        stopwords: &HashSet<&'static str>,
    ) {
        lock(&self.words).accumulate(tokens, stopwords);
    }

    /// Atomic check-then-update of the longest-page record. Returns true
    /// when this page became the new record holder.
    pub fn observe_page_length(&self, url: &str, word_count: usize) -> bool {
        lock(&self.longest).observe(url, word_count)
    }

    /// Top `k` tokens by frequency, ties broken by first-seen order.
    #[must_use]
    pub fn top_words(&self, k: usize) -> Vec<(String, u64)> {
        lock(&self.words).top_k(k)
    }

    /// Snapshot of the longest-page record.
    #[must_use]
    pub fn longest_page(&self) -> LongestPageRecord {
        lock(&self.longest).clone()
    }

    /// Number of distinct non-stopword tokens accumulated.
    #[must_use]
    pub fn distinct_words(&self) -> usize {
        lock(&self.words).distinct_tokens()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::fingerprint::fingerprint_text;

    #[test]
    fn fingerprint_insert_reports_novelty_once() {
        let state = CrawlState::new();
        let fp = fingerprint_text("same text");
        assert!(state.insert_fingerprint(fp));
        assert!(!state.insert_fingerprint(fp));
        assert_eq!(state.fingerprint_count(), 1);
    }

    #[test]
    fn concurrent_duplicate_inserts_yield_one_winner() {
        let state = Arc::new(CrawlState::new());
        let fp = fingerprint_text("contended page text");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || state.insert_fingerprint(fp))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(std::thread::JoinHandle::join)
            .filter(|r| matches!(r, Ok(true)))
            .count();
        assert_eq!(winners, 1);
        assert_eq!(state.fingerprint_count(), 1);
    }

    #[test]
    fn longest_page_update_is_first_wins_on_ties() {
        let state = CrawlState::new();
        assert!(state.observe_page_length("http://a.ics.uci.edu/", 50));
        assert!(!state.observe_page_length("http://b.ics.uci.edu/", 50));
        assert_eq!(state.longest_page().url, "http://a.ics.uci.edu/");
    }
}
