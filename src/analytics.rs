//! Corpus analytics: tokenization, word frequencies, longest-page tracking.
//!
//! These types hold no locking themselves; `CrawlState` wraps them for
//! concurrent use. Everything here is pure computation over owned data.

use std::collections::{HashMap, HashSet};

use crate::patterns::{LETTER_TOKEN, WORD_TOKEN};
use crate::stopwords::{LETTERS_ONLY_STOPWORDS, WORD_CHARS_STOPWORDS};

/// Tokenizer variant. Two exist because the crawler and the offline
/// analyzer historically tokenized differently; each is paired with its own
/// stopword set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tokenizer {
    /// Maximal runs of word characters (`\w+`): letters, digits, underscore.
    /// Splits contractions apart.
    #[default]
    WordChars,
    /// Runs of letters and apostrophes (`[a-z']+`) after lowercasing.
    /// Keeps contractions whole and drops digits entirely.
    LettersOnly,
}

impl Tokenizer {
    /// Lowercase the text and extract tokens.
    #[must_use]
    pub fn tokenize(self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let pattern = match self {
            Self::WordChars => &*WORD_TOKEN,
            Self::LettersOnly => &*LETTER_TOKEN,
        };
        pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// The stopword set paired with this tokenizer.
    #[must_use]
    pub fn stopwords(self) -> &'static HashSet<&'static str> {
        match self {
            Self::WordChars => &WORD_CHARS_STOPWORDS,
            Self::LettersOnly => &LETTERS_ONLY_STOPWORDS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TokenEntry {
    count: u64,
    /// Sequence number of first observation, used to stabilize tie order
    /// in the top-K report.
    first_seen: u64,
}

/// Running token frequencies for the whole crawl. Counts are never
/// decremented and never reset mid-run.
#[derive(Debug, Default)]
pub struct WordFrequencyTable {
    entries: HashMap<String, TokenEntry>,
    next_seen: u64,
}

impl WordFrequencyTable {
    /// Merge one page's token multiset into the table, discarding tokens of
    /// length <= 1 and stopwords.
    pub fn accumulate(&mut self, tokens: &[String], stopwords: &HashSet<&'static str>) {
        for token in tokens {
            if token.chars().count() <= 1 || stopwords.contains(token.as_str()) {
                continue;
            }
            if let Some(entry) = self.entries.get_mut(token) {
                entry.count += 1;
            } else {
                let first_seen = self.next_seen;
                self.next_seen += 1;
                self.entries
                    .insert(token.clone(), TokenEntry { count: 1, first_seen });
            }
        }
    }

    /// The top `k` tokens by descending frequency, ties broken by
    /// first-encountered order.
    #[must_use]
    pub fn top_k(&self, k: usize) -> Vec<(String, u64)> {
        let mut rows: Vec<(&String, TokenEntry)> =
            self.entries.iter().map(|(w, e)| (w, *e)).collect();
        rows.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        rows.truncate(k);
        rows.into_iter().map(|(w, e)| (w.clone(), e.count)).collect()
    }

    /// Occurrence count for one token.
    #[must_use]
    pub fn count(&self, token: &str) -> u64 {
        self.entries.get(token).map_or(0, |e| e.count)
    }

    /// Number of distinct tokens accumulated so far.
    #[must_use]
    pub fn distinct_tokens(&self) -> usize {
        self.entries.len()
    }
}

/// The maximum word-count page seen so far. Word counts are raw token
/// counts, before stopword filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestPageRecord {
    /// URL (or offline filename) of the record holder.
    pub url: String,
    /// Raw token count of that page.
    pub word_count: usize,
}

impl LongestPageRecord {
    /// Replace the record if this page is strictly longer. Ties keep the
    /// earlier page. Returns whether the record changed.
    pub fn observe(&mut self, url: &str, word_count: usize) -> bool {
        if word_count > self.word_count {
            self.url = url.to_string();
            self.word_count = word_count;
            true
        } else {
            false
        }
    }
}
