//! Offline analytics CLI.
//!
//! Runs the fingerprint + analytics pipeline over a directory of saved
//! page bodies and prints the top-50 word report to stdout. Skip and
//! progress diagnostics go to stderr via tracing; tune them with
//! `RUST_LOG` (default `info`).
//!
//! Usage: `analyze_pages [pages-dir]` (default `pages`)

use std::env;
use std::path::Path;
use std::process::ExitCode;

use crawl_policy::offline::{analyze_directory, format_report};
use crawl_policy::{CrawlScopeConfig, Tokenizer};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let dir = env::args().nth(1).unwrap_or_else(|| "pages".to_string());

    // Saved-page analysis uses the letters-only tokenizer and its larger
    // stopword list.
    let config = CrawlScopeConfig {
        tokenizer: Tokenizer::LettersOnly,
        ..CrawlScopeConfig::default()
    };

    match analyze_directory(Path::new(&dir), &config) {
        Ok(report) => {
            eprintln!(
                "Processed {} pages ({} skipped); longest: {} ({} words)",
                report.pages_processed,
                report.pages_skipped,
                report.longest.url,
                report.longest.word_count
            );
            print!("{}", format_report(&report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("analyze_pages: {err}");
            ExitCode::FAILURE
        }
    }
}
