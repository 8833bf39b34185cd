//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success → [`DirectoryError::Api`]) so the endpoint modules
//! stay focused on request construction and response mapping. Note the 404
//! special case for plugin lookups is handled *before* this check, in
//! `plugin_info`.

use crate::error::DirectoryError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`DirectoryError::RateLimited`], reading
///   the `Retry-After` header (60 s if absent or unparseable).
/// - **Non-success status** → [`DirectoryError::Api`] with status code and
///   response body.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, DirectoryError> {
    if resp.status() == 429 {
        return Err(DirectoryError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(DirectoryError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// `Retry-After` header as seconds, falling back to 60 s.
fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
