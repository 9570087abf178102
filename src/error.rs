//! Error types for crawl-policy.
//!
//! This module defines the error types returned by policy-engine operations.

/// Error type for policy-engine operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An href could not be resolved to an absolute URL.
    ///
    /// Callers drop these silently during link extraction; a malformed
    /// href is never a crawl error.
    #[error("malformed href: {0}")]
    MalformedHref(String),

    /// Markup parsing failed for a whole page.
    #[error("markup parsing failed: {0}")]
    ParseError(String),

    /// Filesystem failure in offline analytics mode.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for policy-engine operations.
pub type Result<T> = std::result::Result<T, Error>;
