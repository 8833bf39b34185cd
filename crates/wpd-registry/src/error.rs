//! Directory client error types.

use thiserror::Error;

/// Errors that can occur when talking to WordPress.org.
///
/// A 404 on a plugin lookup is deliberately NOT represented here — the
/// directory answers "no such plugin" with an error status, and that is a
/// successful lookup (`PluginLookup::NotFound`), not a failure.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// HTTP transport error (DNS, timeout, connection reset).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status other than 404.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the directory.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a directory response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The directory returned a 429 Too Many Requests response.
    #[error("rate limited — retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
