//! Static stopword sets for corpus analytics.
//!
//! Two sets exist because the two tokenizer variants produce different token
//! shapes: the word-character tokenizer splits contractions apart ("don't"
//! becomes "don" and "t"), while the letters-only tokenizer keeps them whole
//! and therefore needs contraction entries plus single-letter fragments.
//! Both sets are fixed at compile time and never mutated.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Stopwords paired with the `WordChars` tokenizer.
///
/// Common English function words lacking semantic value for crawl-quality
/// reporting.
pub static WORD_CHARS_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
        "are", "around", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing",
        "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
        "having", "he", "her", "here", "hers", "him", "his", "how", "if", "in", "into", "is",
        "it", "its", "just", "may", "might", "more", "most", "must", "my", "no", "nor", "not",
        "now", "of", "off", "on", "once", "only", "or", "other", "our", "out", "over", "own",
        "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "them",
        "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
        "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
        "who", "whom", "why", "with", "would", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Stopwords paired with the `LettersOnly` tokenizer.
///
/// Extends the common function words with contractions (which this tokenizer
/// keeps intact), possessive forms, single letters, and a bare apostrophe.
pub static LETTERS_ONLY_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't",
        "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "few", "for",
        "from", "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he",
        "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him", "himself",
        "his", "how", "how's", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is",
        "isn't", "it", "it's", "its", "itself", "let's", "me", "more", "most", "mustn't", "my",
        "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought",
        "our", "ours", "ourselves", "out", "over", "own", "same", "shan't", "she", "she'd",
        "she'll", "she's", "should", "shouldn't", "so", "some", "such", "than", "that",
        "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
        "these", "they", "they'd", "they'll", "they're", "they've", "this", "those", "through",
        "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll",
        "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
        "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
        "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
        "yourself", "yourselves", "b", "c", "d", "e", "f", "g", "h", "j", "k", "l", "m", "n",
        "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "'",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_words_present_in_both_sets() {
        for word in ["the", "and", "with", "would"] {
            assert!(WORD_CHARS_STOPWORDS.contains(word));
            assert!(LETTERS_ONLY_STOPWORDS.contains(word));
        }
    }

    #[test]
    fn contractions_only_in_letters_set() {
        assert!(LETTERS_ONLY_STOPWORDS.contains("don't"));
        assert!(!WORD_CHARS_STOPWORDS.contains("don't"));
    }

    #[test]
    fn content_words_absent() {
        assert!(!WORD_CHARS_STOPWORDS.contains("research"));
        assert!(!LETTERS_ONLY_STOPWORDS.contains("research"));
    }
}
