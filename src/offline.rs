//! Offline analytics over a directory of saved page bodies.
//!
//! Re-runs the fingerprint and analytics pipeline on raw response bodies
//! saved during an earlier crawl, one file per page with the source host
//! encoded in the filename (`<host>_<path>.html`). No fetching happens
//! here; the output is the same crawl-quality report the live engine
//! produces at crawl end.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::analytics::LongestPageRecord;
use crate::config::CrawlScopeConfig;
use crate::encoding::transcode_to_utf8;
use crate::error::Result;
use crate::fingerprint::{classify_text, PageVerdict};
use crate::state::CrawlState;
use crate::text::{extract_visible_text, is_pdf_payload};

/// Crawl-quality summary produced by [`analyze_directory`].
#[derive(Debug, Clone)]
pub struct OfflineReport {
    /// Pages whose text entered the analytics.
    pub pages_processed: usize,
    /// Pages skipped as PDF blobs, low-value hosts, duplicates, or traps.
    pub pages_skipped: usize,
    /// The maximum word-count page.
    pub longest: LongestPageRecord,
    /// Top tokens by frequency, stopwords excluded.
    pub top_words: Vec<(String, u64)>,
}

/// Run the fingerprint + analytics pipeline over every `.html` file in
/// `dir`. Files are visited in sorted filename order so repeated runs
/// produce identical reports. Per-file read failures are logged and
/// skipped; only an unreadable directory is an error.
pub fn analyze_directory(dir: &Path, config: &CrawlScopeConfig) -> Result<OfflineReport> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension() == Some(std::ffi::OsStr::new("html")))
        .collect();
    paths.sort();

    let state = CrawlState::new();
    let mut processed = 0usize;
    let mut skipped = 0usize;

    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(file = %name, %err, "unreadable file skipped");
                skipped += 1;
                continue;
            }
        };

        if is_pdf_payload(&raw) {
            info!(file = %name, "skipping PDF blob");
            skipped += 1;
            continue;
        }

        if config.low_value_hosts.contains(host_from_filename(&name)) {
            info!(file = %name, "skipping known low-value host");
            skipped += 1;
            continue;
        }

        let text = extract_visible_text(&transcode_to_utf8(&raw));
        match classify_text(text, config, &state) {
            PageVerdict::Fresh { text } => {
                let tokens = config.tokenizer.tokenize(&text);
                if state.observe_page_length(&name, tokens.len()) {
                    info!(file = %name, word_count = tokens.len(), "new longest page");
                }
                state.accumulate_words(&tokens, config.tokenizer.stopwords());
                processed += 1;
            }
            PageVerdict::ExactDuplicate => {
                debug!(file = %name, "skipping exact duplicate");
                skipped += 1;
            }
            PageVerdict::RepetitiveTrap => {
                info!(file = %name, "skipping repetitive-list trap");
                skipped += 1;
            }
            PageVerdict::Skipped(_) => skipped += 1,
        }
    }

    Ok(OfflineReport {
        pages_processed: processed,
        pages_skipped: skipped,
        longest: state.longest_page(),
        top_words: state.top_words(config.top_k),
    })
}

/// The saved filename encodes the source host before the first underscore.
fn host_from_filename(name: &str) -> &str {
    name.split('_').next().unwrap_or(name)
}

/// Format the top-words listing, one `"<rank>. <word>: <count>"` line per
/// token.
#[must_use]
pub fn format_report(report: &OfflineReport) -> String {
    let mut out = String::new();
    for (rank, (word, count)) in report.top_words.iter().enumerate() {
        out.push_str(&format!("{}. {}: {}\n", rank + 1, word, count));
    }
    out
}
